use serde::{Deserialize, Serialize};
use std::fmt;

/// Statuses counted by the dashboard summary endpoint.
///
/// This is the closed set rendered by the donut chart and its legend. The
/// order of [`DashboardStatus::DISPLAY_ORDER`] is the order of slices and
/// legend rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DashboardStatus {
    Creating,
    Ongoing,
    CaseRegistered,
    DbRegistered,
}

impl DashboardStatus {
    pub const DISPLAY_ORDER: [DashboardStatus; 4] = [
        DashboardStatus::Creating,
        DashboardStatus::Ongoing,
        DashboardStatus::CaseRegistered,
        DashboardStatus::DbRegistered,
    ];

    /// Wire code used as key in `statusCounts`
    pub fn code(self) -> &'static str {
        match self {
            DashboardStatus::Creating => "CREATING",
            DashboardStatus::Ongoing => "ONGOING",
            DashboardStatus::CaseRegistered => "CASE_REGISTERED",
            DashboardStatus::DbRegistered => "DB_REGISTERED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DashboardStatus::Creating => "생성 중",
            DashboardStatus::Ongoing => "진행 중",
            DashboardStatus::CaseRegistered => "사례 등록",
            DashboardStatus::DbRegistered => "DB 등록",
        }
    }

    /// Hex color shared by the chart slice and the legend row
    pub fn color(self) -> &'static str {
        match self {
            DashboardStatus::Creating => "#3B82F6",
            DashboardStatus::Ongoing => "#10B981",
            DashboardStatus::CaseRegistered => "#F59E0B",
            DashboardStatus::DbRegistered => "#8B5CF6",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::DISPLAY_ORDER.into_iter().find(|s| s.code() == code)
    }
}

/// Status of a single campaign as reported in recent activity.
///
/// Wider than [`DashboardStatus`] and open-ended: codes the frontend does not
/// know are kept verbatim in [`CampaignStatus::Other`] and displayed raw.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CampaignStatus {
    Creating,
    Ongoing,
    CaseRegistered,
    DbRegistered,
    Processing,
    Refining,
    Completed,
    Failed,
    MessageSelected,
    PerformanceRegistered,
    SuccessCase,
    RagRegistered,
    Other(String),
}

impl CampaignStatus {
    pub fn code(&self) -> &str {
        match self {
            CampaignStatus::Creating => "CREATING",
            CampaignStatus::Ongoing => "ONGOING",
            CampaignStatus::CaseRegistered => "CASE_REGISTERED",
            CampaignStatus::DbRegistered => "DB_REGISTERED",
            CampaignStatus::Processing => "PROCESSING",
            CampaignStatus::Refining => "REFINING",
            CampaignStatus::Completed => "COMPLETED",
            CampaignStatus::Failed => "FAILED",
            CampaignStatus::MessageSelected => "MESSAGE_SELECTED",
            CampaignStatus::PerformanceRegistered => "PERFORMANCE_REGISTERED",
            CampaignStatus::SuccessCase => "SUCCESS_CASE",
            CampaignStatus::RagRegistered => "RAG_REGISTERED",
            CampaignStatus::Other(raw) => raw,
        }
    }

    /// Human-readable label, or the raw code for unknown statuses
    pub fn label(&self) -> &str {
        match self {
            CampaignStatus::Creating => "생성 중",
            CampaignStatus::Ongoing => "진행 중",
            CampaignStatus::CaseRegistered => "사례 등록",
            CampaignStatus::DbRegistered => "DB 등록",
            CampaignStatus::Processing => "처리 중",
            CampaignStatus::Refining => "정제 중",
            CampaignStatus::Completed => "완료",
            CampaignStatus::Failed => "실패",
            CampaignStatus::MessageSelected => "메시지 선택",
            CampaignStatus::PerformanceRegistered => "성과 등록",
            CampaignStatus::SuccessCase => "성공 사례",
            CampaignStatus::RagRegistered => "RAG 등록",
            CampaignStatus::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, CampaignStatus::Other(_))
    }
}

impl From<String> for CampaignStatus {
    fn from(code: String) -> Self {
        match code.as_str() {
            "CREATING" => CampaignStatus::Creating,
            "ONGOING" => CampaignStatus::Ongoing,
            "CASE_REGISTERED" => CampaignStatus::CaseRegistered,
            "DB_REGISTERED" => CampaignStatus::DbRegistered,
            "PROCESSING" => CampaignStatus::Processing,
            "REFINING" => CampaignStatus::Refining,
            "COMPLETED" => CampaignStatus::Completed,
            "FAILED" => CampaignStatus::Failed,
            "MESSAGE_SELECTED" => CampaignStatus::MessageSelected,
            "PERFORMANCE_REGISTERED" => CampaignStatus::PerformanceRegistered,
            "SUCCESS_CASE" => CampaignStatus::SuccessCase,
            "RAG_REGISTERED" => CampaignStatus::RagRegistered,
            _ => CampaignStatus::Other(code),
        }
    }
}

impl From<&str> for CampaignStatus {
    fn from(code: &str) -> Self {
        CampaignStatus::from(code.to_string())
    }
}

impl From<CampaignStatus> for String {
    fn from(status: CampaignStatus) -> Self {
        match status {
            CampaignStatus::Other(raw) => raw,
            known => known.code().to_string(),
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
