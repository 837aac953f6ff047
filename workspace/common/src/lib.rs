//! Platform-independent pieces of the campaign dashboard.
//! Wire types mirror the backend's dashboard endpoints; view models and the
//! page state machine live here so they can be tested off the browser.

pub mod activity;
pub mod chart;
pub mod error;
pub mod model;
pub mod navigation;
pub mod state;
pub mod status;

pub use activity::{ActivityRow, ActivityView, NO_RECENT_ACTIVITY};
pub use chart::{ChartGeometry, StatusBreakdown, StatusSlice};
pub use error::ApiError;
pub use model::{DashboardSummary, RecentActivityItem};
pub use navigation::{AppPath, Navigate};
pub use state::{DashboardApi, DashboardState, MountGuard, DASHBOARD_LOAD_FAILED};
pub use status::{CampaignStatus, DashboardStatus};
