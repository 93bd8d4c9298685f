//! Data models for the titledesk API and client-side state.
//!
//! Wire types mirror the JSON payloads of the remote service; upload
//! entries are client-only ephemeral state.

pub mod document;
pub mod report;
pub mod upload;
pub mod user;

pub use document::{Document, DocumentStatus, UploadResponse};
pub use report::{
    GenerateReportRequest, GenerateReportResponse, Report, ReportStatus, ReportSummary,
};
pub use upload::{UploadEntry, UploadState};
pub use user::{
    Identity, LoginResponse, ProfileCreateRequest, ProfileUpdateRequest, ProfileUpdateResponse,
    RegisterRequest,
};
