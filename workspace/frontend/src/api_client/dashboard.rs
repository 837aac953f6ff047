use async_trait::async_trait;
use campaign_common::{ApiError, DashboardApi, DashboardSummary, RecentActivityItem};
use crate::api_client;

pub const SUMMARY_ENDPOINT: &str = "/api/dashboard/summary";
pub const RECENT_ACTIVITY_ENDPOINT: &str = "/api/dashboard/recent-activity";

/// Get campaign counts per status
pub async fn get_summary() -> Result<DashboardSummary, ApiError> {
    log::trace!("Fetching dashboard summary");
    let result = api_client::get::<DashboardSummary>(SUMMARY_ENDPOINT).await;
    match &result {
        Ok(summary) => log::info!("Fetched dashboard summary ({} campaigns)", summary.total_campaigns),
        Err(e) => log::debug!("Dashboard summary unavailable: {}", e),
    }
    result
}

/// Get the latest campaign snapshots in the order the backend returns them
pub async fn get_recent_activity() -> Result<Vec<RecentActivityItem>, ApiError> {
    log::trace!("Fetching recent activity");
    let result = api_client::get::<Vec<RecentActivityItem>>(RECENT_ACTIVITY_ENDPOINT).await;
    match &result {
        Ok(items) => log::info!("Fetched {} recent activity items", items.len()),
        Err(e) => log::debug!("Recent activity unavailable: {}", e),
    }
    result
}

/// Backend-backed implementation used by the dashboard page
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HttpDashboardApi;

#[async_trait(?Send)]
impl DashboardApi for HttpDashboardApi {
    async fn summary(&self) -> Result<DashboardSummary, ApiError> {
        get_summary().await
    }

    async fn recent_activity(&self) -> Result<Vec<RecentActivityItem>, ApiError> {
        get_recent_activity().await
    }
}
