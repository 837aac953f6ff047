use chrono::{DateTime, NaiveDateTime};

use crate::model::RecentActivityItem;
use crate::navigation::{AppPath, Navigate};

pub const NO_RECENT_ACTIVITY: &str = "최근 활동이 없습니다.";

/// One clickable row of the recent activity list
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRow {
    /// Position in the list as received
    pub position: usize,
    pub id: String,
    pub purpose: String,
    pub status_label: String,
    pub updated_at: Option<String>,
}

impl ActivityRow {
    pub fn from_item(position: usize, item: &RecentActivityItem) -> Self {
        Self {
            position,
            id: item.id.clone(),
            purpose: item.purpose.clone(),
            status_label: item.status.label().to_string(),
            updated_at: item.updated_at.as_deref().map(format_timestamp),
        }
    }

    /// Render key; unique even when the backend repeats a campaign
    pub fn list_key(&self) -> String {
        format!("{}-{}", self.position, self.id)
    }

    pub fn target(&self) -> AppPath {
        AppPath::CampaignDetail(self.id.clone())
    }

    /// Row click: open the campaign detail view
    pub fn select<N: Navigate + ?Sized>(&self, navigator: &N) {
        self.target().open(navigator);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActivityView {
    Empty,
    Rows(Vec<ActivityRow>),
}

impl ActivityView {
    /// Rows keep the order the backend sent them in.
    pub fn from_items(items: &[RecentActivityItem]) -> Self {
        if items.is_empty() {
            return ActivityView::Empty;
        }
        ActivityView::Rows(
            items
                .iter()
                .enumerate()
                .map(|(position, item)| ActivityRow::from_item(position, item))
                .collect(),
        )
    }

    pub fn rows(&self) -> &[ActivityRow] {
        match self {
            ActivityView::Empty => &[],
            ActivityView::Rows(rows) => rows,
        }
    }
}

/// Formats an activity timestamp as `YYYY-MM-DD HH:MM`.
///
/// Accepts RFC 3339 and naive ISO timestamps; anything else is returned as is.
pub fn format_timestamp(raw: &str) -> String {
    const DISPLAY: &str = "%Y-%m-%d %H:%M";

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format(DISPLAY).to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format(DISPLAY).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::testing::RecordingNavigator;
    use crate::status::CampaignStatus;

    fn item(id: &str, purpose: &str, status: &str) -> RecentActivityItem {
        RecentActivityItem {
            id: id.to_string(),
            request_date: None,
            marketer_id: None,
            purpose: purpose.to_string(),
            core_benefit_text: None,
            source_url: None,
            custom_columns: None,
            status: CampaignStatus::from(status),
            actual_ctr: None,
            conversion_rate: None,
            updated_at: None,
            message_results: Vec::new(),
        }
    }

    #[test]
    fn test_empty_list_shows_placeholder_only() {
        let view = ActivityView::from_items(&[]);
        assert_eq!(view, ActivityView::Empty);
        assert!(view.rows().is_empty());
    }

    #[test]
    fn test_rows_match_items_and_labels() {
        let items = vec![
            item("C1", "봄 시즌 프로모션", "COMPLETED"),
            item("C2", "재구매 유도", "REFINING"),
            item("C3", "휴면 고객 복귀", "ON_HOLD"),
        ];

        let view = ActivityView::from_items(&items);
        let rows = view.rows();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].purpose, "봄 시즌 프로모션");
        assert_eq!(rows[0].status_label, "완료");
        assert_eq!(rows[1].status_label, "정제 중");
        assert_eq!(rows[2].status_label, "ON_HOLD");
    }

    #[test]
    fn test_rows_keep_backend_order() {
        let items = vec![item("Z", "", "ONGOING"), item("A", "", "ONGOING"), item("M", "", "ONGOING")];
        let ids: Vec<String> = ActivityView::from_items(&items)
            .rows()
            .iter()
            .map(|r| r.id.clone())
            .collect();
        assert_eq!(ids, vec!["Z", "A", "M"]);
    }

    #[test]
    fn test_repeated_campaign_gets_distinct_keys() {
        let items = vec![item("C5", "", "ONGOING"), item("C6", "", "ONGOING"), item("C5", "", "COMPLETED")];
        let view = ActivityView::from_items(&items);
        let keys: Vec<String> = view.rows().iter().map(ActivityRow::list_key).collect();

        assert_eq!(keys, vec!["0-C5", "1-C6", "2-C5"]);
        assert_eq!(view.rows()[2].target(), AppPath::CampaignDetail("C5".to_string()));
    }

    #[test]
    fn test_row_click_opens_campaign_detail() {
        let navigator = RecordingNavigator::default();
        let row = ActivityRow::from_item(0, &item("C123", "테스트", "ONGOING"));

        row.select(&navigator);

        assert_eq!(*navigator.visited.borrow(), vec!["/campaigns/C123".to_string()]);
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2024-05-03T09:15:27"), "2024-05-03 09:15");
        assert_eq!(format_timestamp("2024-05-03T09:15:27.123456"), "2024-05-03 09:15");
        assert_eq!(format_timestamp("2024-05-03T09:15:27+09:00"), "2024-05-03 09:15");
        assert_eq!(format_timestamp("어제"), "어제");
    }
}
