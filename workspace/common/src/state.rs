use async_trait::async_trait;
use futures_util::future::try_join;
use std::cell::Cell;
use std::rc::Rc;

use crate::error::ApiError;
use crate::model::{DashboardSummary, RecentActivityItem};

pub const DASHBOARD_LOAD_FAILED: &str = "대시보드 데이터를 불러오는데 실패했습니다.";

/// Dashboard page state.
///
/// `Loading` is the initial state; `Ready` and `Failed` are terminal for one
/// mounted page.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashboardState {
    #[default]
    Loading,
    Ready {
        summary: DashboardSummary,
        activity: Vec<RecentActivityItem>,
    },
    Failed(String),
}

impl DashboardState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Read-only backend endpoints the dashboard depends on
#[async_trait(?Send)]
pub trait DashboardApi {
    async fn summary(&self) -> Result<DashboardSummary, ApiError>;
    async fn recent_activity(&self) -> Result<Vec<RecentActivityItem>, ApiError>;
}

/// Fetches both payloads concurrently.
///
/// The first failure wins and the other request's outcome is dropped; no
/// partial data is ever returned.
pub async fn load_dashboard<A>(api: &A) -> DashboardState
where
    A: DashboardApi + ?Sized,
{
    log::debug!("Loading dashboard data");

    match try_join(api.summary(), api.recent_activity()).await {
        Ok((summary, activity)) => {
            log::info!(
                "Dashboard loaded: {} campaigns, {} recent activities",
                summary.total_campaigns,
                activity.len()
            );
            DashboardState::Ready { summary, activity }
        }
        Err(err) => {
            log::warn!("Dashboard data unavailable, showing error: {}", err);
            DashboardState::Failed(DASHBOARD_LOAD_FAILED.to_string())
        }
    }
}

/// Liveness flag of one mounted page.
///
/// Cloned into the load task and cancelled by the page's teardown, so a
/// response that arrives after unmount is dropped instead of applied.
#[derive(Debug, Clone)]
pub struct MountGuard {
    active: Rc<Cell<bool>>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self {
            active: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn cancel(&self) {
        self.active.set(false);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs [`load_dashboard`] and hands the result to `apply` if the page is
/// still mounted. Returns whether the result was applied.
pub async fn load_into<A, F>(api: &A, guard: &MountGuard, apply: F) -> bool
where
    A: DashboardApi + ?Sized,
    F: FnOnce(DashboardState),
{
    let state = load_dashboard(api).await;

    if !guard.is_active() {
        log::debug!("Dashboard unmounted before data arrived, dropping result");
        return false;
    }

    apply(state);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::CampaignStatus;
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::time::Duration;

    struct StubApi {
        summary: Result<DashboardSummary, ApiError>,
        activity: Result<Vec<RecentActivityItem>, ApiError>,
        calls: RefCell<Vec<&'static str>>,
    }

    impl StubApi {
        fn new(
            summary: Result<DashboardSummary, ApiError>,
            activity: Result<Vec<RecentActivityItem>, ApiError>,
        ) -> Self {
            Self {
                summary,
                activity,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl DashboardApi for StubApi {
        async fn summary(&self) -> Result<DashboardSummary, ApiError> {
            self.calls.borrow_mut().push("summary");
            self.summary.clone()
        }

        async fn recent_activity(&self) -> Result<Vec<RecentActivityItem>, ApiError> {
            self.calls.borrow_mut().push("recent-activity");
            self.activity.clone()
        }
    }

    fn summary() -> DashboardSummary {
        let mut status_counts = BTreeMap::new();
        status_counts.insert("ONGOING".to_string(), 2);
        DashboardSummary {
            total_campaigns: 3,
            status_counts,
        }
    }

    fn activity() -> Vec<RecentActivityItem> {
        vec![RecentActivityItem {
            id: "C1".to_string(),
            request_date: Some("2024-05-01".to_string()),
            marketer_id: Some(7),
            purpose: "재방문 유도".to_string(),
            core_benefit_text: None,
            source_url: None,
            custom_columns: None,
            status: CampaignStatus::Ongoing,
            actual_ctr: Some(0.02),
            conversion_rate: None,
            updated_at: None,
            message_results: Vec::new(),
        }]
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = DashboardState::default();
        assert!(state.is_loading());
        assert!(state.error().is_none());
    }

    #[tokio::test]
    async fn test_both_fetches_succeed() {
        let api = StubApi::new(Ok(summary()), Ok(activity()));

        let state = load_dashboard(&api).await;

        assert_eq!(
            state,
            DashboardState::Ready {
                summary: summary(),
                activity: activity()
            }
        );
        assert!(!state.is_loading());
        assert!(api.calls.borrow().contains(&"summary"));
        assert!(api.calls.borrow().contains(&"recent-activity"));
    }

    #[tokio::test]
    async fn test_summary_failure_fails_whole_page() {
        let api = StubApi::new(Err(ApiError::Status(500)), Ok(activity()));

        let state = load_dashboard(&api).await;

        assert_eq!(state, DashboardState::Failed(DASHBOARD_LOAD_FAILED.to_string()));
        assert!(!state.is_loading());
        assert!(!state.is_ready());
    }

    #[tokio::test]
    async fn test_activity_failure_discards_summary() {
        let api = StubApi::new(
            Ok(summary()),
            Err(ApiError::Decode("expected a sequence".to_string())),
        );

        let state = load_dashboard(&api).await;

        assert_eq!(state.error(), Some(DASHBOARD_LOAD_FAILED));
    }

    /// Summary fails right away while recent activity never answers
    struct StalledActivityApi;

    #[async_trait(?Send)]
    impl DashboardApi for StalledActivityApi {
        async fn summary(&self) -> Result<DashboardSummary, ApiError> {
            Err(ApiError::Status(503))
        }

        async fn recent_activity(&self) -> Result<Vec<RecentActivityItem>, ApiError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_summary_failure_abandons_pending_activity() {
        let state = tokio::time::timeout(Duration::from_secs(2), load_dashboard(&StalledActivityApi))
            .await
            .expect("load should not wait for the stalled request");

        assert_eq!(state, DashboardState::Failed(DASHBOARD_LOAD_FAILED.to_string()));
    }

    thread_local! {
        static LOG_LEVELS: RefCell<Vec<log::Level>> = const { RefCell::new(Vec::new()) };
    }

    struct CaptureLogger;

    impl log::Log for CaptureLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            LOG_LEVELS.with(|levels| levels.borrow_mut().push(record.level()));
        }

        fn flush(&self) {}
    }

    static CAPTURE_LOGGER: CaptureLogger = CaptureLogger;

    #[tokio::test]
    async fn test_failed_load_leaves_error_logging_to_request_layer() {
        let _ = log::set_logger(&CAPTURE_LOGGER);
        log::set_max_level(log::LevelFilter::Trace);
        LOG_LEVELS.with(|levels| levels.borrow_mut().clear());

        let api = StubApi::new(Err(ApiError::Status(500)), Ok(activity()));
        load_dashboard(&api).await;

        let levels = LOG_LEVELS.with(|levels| levels.borrow().clone());
        assert!(levels.contains(&log::Level::Warn));
        assert!(!levels.contains(&log::Level::Error));
    }

    #[tokio::test]
    async fn test_both_failures_give_same_message() {
        let api = StubApi::new(
            Err(ApiError::Request("connection refused".to_string())),
            Err(ApiError::Status(404)),
        );

        let state = load_dashboard(&api).await;

        assert_eq!(state.error(), Some(DASHBOARD_LOAD_FAILED));
    }

    #[tokio::test]
    async fn test_result_applied_while_mounted() {
        let api = StubApi::new(Ok(summary()), Ok(activity()));
        let guard = MountGuard::new();
        let applied = RefCell::new(None);

        let done = load_into(&api, &guard, |state| *applied.borrow_mut() = Some(state)).await;

        assert!(done);
        assert!(applied.borrow().as_ref().is_some_and(DashboardState::is_ready));
    }

    #[tokio::test]
    async fn test_result_dropped_after_teardown() {
        let api = StubApi::new(Ok(summary()), Ok(activity()));
        let guard = MountGuard::new();
        let teardown = guard.clone();
        teardown.cancel();

        let applied = RefCell::new(false);
        let done = load_into(&api, &guard, |_| *applied.borrow_mut() = true).await;

        assert!(!done);
        assert!(!*applied.borrow());
        assert!(!guard.is_active());
    }
}
