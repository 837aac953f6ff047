use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::status::{CampaignStatus, DashboardStatus};

/// Response of `GET /api/dashboard/summary`.
///
/// `status_counts` is a partial mapping keyed by status code. Absent statuses
/// count as zero; keys outside [`DashboardStatus`] are kept but never shown.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_campaigns: u64,
    #[serde(default)]
    pub status_counts: BTreeMap<String, u64>,
}

impl DashboardSummary {
    pub fn count_for(&self, status: DashboardStatus) -> u64 {
        self.status_counts.get(status.code()).copied().unwrap_or(0)
    }
}

/// One entry of `GET /api/dashboard/recent-activity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivityItem {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub request_date: Option<String>,
    pub marketer_id: Option<i64>,
    #[serde(default)]
    pub purpose: String,
    pub core_benefit_text: Option<String>,
    pub source_url: Option<String>,
    pub custom_columns: Option<String>,
    pub status: CampaignStatus,
    pub actual_ctr: Option<f64>,
    pub conversion_rate: Option<f64>,
    pub updated_at: Option<String>,
    /// Message generation results, untyped at this layer
    #[serde(default)]
    pub message_results: Vec<serde_json::Value>,
}

/// Campaign ids arrive as strings or plain numbers depending on the backend
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_missing_counts_default_to_zero() {
        let summary: DashboardSummary =
            serde_json::from_str(r#"{"totalCampaigns": 7, "statusCounts": {"ONGOING": 3}}"#)
                .unwrap();

        assert_eq!(summary.total_campaigns, 7);
        assert_eq!(summary.count_for(DashboardStatus::Ongoing), 3);
        assert_eq!(summary.count_for(DashboardStatus::Creating), 0);
        assert_eq!(summary.count_for(DashboardStatus::DbRegistered), 0);
    }

    #[test]
    fn test_summary_without_status_counts() {
        let summary: DashboardSummary = serde_json::from_str(r#"{"totalCampaigns": 0}"#).unwrap();
        assert!(summary.status_counts.is_empty());
    }

    #[test]
    fn test_activity_item_from_backend_payload() {
        let json = r#"{
            "id": "C123",
            "requestDate": "2024-05-02",
            "marketerId": 42,
            "purpose": "신규 가입 유도",
            "coreBenefitText": "첫 달 무료",
            "sourceUrl": "https://example.com/promo",
            "customColumns": "{\"segment\":\"VIP\"}",
            "status": "MESSAGE_SELECTED",
            "actualCtr": 0.042,
            "conversionRate": 0.013,
            "updatedAt": "2024-05-03T09:15:00",
            "messageResults": [{"messageId": 1}, {"messageId": 2}]
        }"#;

        let item: RecentActivityItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "C123");
        assert_eq!(item.marketer_id, Some(42));
        assert_eq!(item.status, CampaignStatus::MessageSelected);
        assert_eq!(item.actual_ctr, Some(0.042));
        assert_eq!(item.message_results.len(), 2);
    }

    #[test]
    fn test_activity_item_numeric_id() {
        let item: RecentActivityItem =
            serde_json::from_str(r#"{"id": 123, "status": "ONGOING"}"#).unwrap();
        assert_eq!(item.id, "123");

        let items: Vec<RecentActivityItem> = serde_json::from_str(
            r#"[{"id": "C7", "status": "ONGOING"}, {"id": 8, "status": "FAILED"}]"#,
        )
        .unwrap();
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["C7", "8"]);
    }

    #[test]
    fn test_activity_item_minimal_payload() {
        let item: RecentActivityItem =
            serde_json::from_str(r#"{"id": "C9", "status": "ARCHIVED"}"#).unwrap();
        assert_eq!(item.purpose, "");
        assert_eq!(item.status, CampaignStatus::Other("ARCHIVED".to_string()));
        assert!(item.updated_at.is_none());
        assert!(item.message_results.is_empty());
    }
}
