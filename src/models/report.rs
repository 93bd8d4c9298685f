use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Generation state of a report.
///
/// `Completed` and `Failed` are terminal; the client polls while the
/// server reports `Processing`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    /// Created but generation not started
    #[default]
    Pending,
    /// Generation in progress
    Processing,
    /// Content is available
    Completed,
    /// Generation failed server-side (server reports "error")
    #[serde(rename = "error")]
    Failed,
}

impl ReportStatus {
    /// Whether the report has reached a state that will no longer change.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReportStatus::Completed | ReportStatus::Failed)
    }

    /// Short label for list views.
    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Processing => "processing",
            ReportStatus::Completed => "completed",
            ReportStatus::Failed => "error",
        }
    }
}

/// A report summary from `GET /reports`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportSummary {
    /// Unique report ID
    pub id: String,
    /// Report title
    pub title: String,
    /// When the report was requested
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// Generation state
    #[serde(default)]
    pub status: ReportStatus,
}

/// A full report record from `GET /reports/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    /// Unique report ID
    pub id: String,
    /// Report title
    pub title: String,
    /// When the report was requested
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// Generation state
    #[serde(default)]
    pub status: ReportStatus,
    /// Generated content, present once `status` is `Completed`
    #[serde(default)]
    pub content: Option<String>,
    /// IDs of the documents the report was generated from
    #[serde(default)]
    pub document_ids: Vec<String>,
    /// Server-side failure detail when `status` is `Failed`
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Request body for `POST /reports/generate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateReportRequest {
    pub document_ids: Vec<String>,
}

/// Response from `POST /reports/generate`: the created report stub.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateReportResponse {
    /// ID of the created report
    pub id: String,
    /// Title assigned by the server
    #[serde(default)]
    pub title: Option<String>,
    /// Initial status
    #[serde(default)]
    pub status: ReportStatus,
}
