pub mod campaign_detail;
pub mod dashboard;
pub mod promotion_create;
