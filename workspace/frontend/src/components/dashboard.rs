mod activity;
mod status_chart;
mod status_legend;

pub use activity::RecentActivity;
pub use status_chart::StatusChart;
pub use status_legend::StatusLegend;
