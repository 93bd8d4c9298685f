//! AppMessage enum for async communication within the application.

use crate::models::{Document, Identity, Report, ReportSummary, UploadResponse};

/// Messages received from async operations (API calls, polling, uploads).
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Startup session restore finished
    SessionRestored(Option<Identity>),
    /// Startup session restore could not reach the server
    SessionRestoreFailed(String),
    /// Login completed
    LoginSucceeded(Identity),
    /// Login failed with a user-facing message
    LoginFailed(String),
    /// Registration completed (the user is signed in)
    RegisterSucceeded(Identity),
    /// Registration failed with a stage-classified message
    RegisterFailed(String),
    /// Logout completed
    LoggedOut,

    /// Document list loaded
    DocumentsLoaded(Vec<Document>),
    /// Document list could not be loaded
    DocumentsLoadFailed(String),
    /// Single document detail loaded
    DocumentLoaded(Document),
    /// Single document detail could not be loaded
    DocumentLoadFailed { id: String, error: String },
    /// One file in the upload batch finished (ok or not)
    UploadFinished {
        index: usize,
        result: Result<UploadResponse, String>,
    },
    /// The whole upload batch is done
    UploadBatchDone,

    /// Report list loaded
    ReportsLoaded(Vec<ReportSummary>),
    /// Report list could not be loaded
    ReportsLoadFailed(String),
    /// Report detail loaded or re-fetched by the poller
    ReportLoaded(Report),
    /// Report detail could not be fetched
    ReportLoadFailed { id: String, error: String },
    /// Report generation request accepted; carries the new report ID
    ReportGenerated { id: String },
    /// Report generation request rejected
    ReportGenerateFailed(String),

    /// Profile update completed
    ProfileUpdated(Identity),
    /// Profile update failed
    ProfileUpdateFailed(String),
}
