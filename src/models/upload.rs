//! Ephemeral client-side upload state.
//!
//! An [`UploadEntry`] tracks one file through the upload widget. Entries
//! are never persisted; they are discarded when the upload screen is left.

/// State of a single upload entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadState {
    /// Request in flight
    Uploading,
    /// Server accepted the file
    Success,
    /// Upload failed; carries a user-facing message
    Error(String),
}

/// Client-only state for one file moving through the upload flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadEntry {
    /// File name shown in the list
    pub name: String,
    /// File size in bytes
    pub size: u64,
    /// Progress percentage (0 or 100; per-byte progress is not reported)
    pub progress: u8,
    /// Current state
    pub state: UploadState,
    /// Server-assigned document ID once uploaded
    pub document_id: Option<String>,
}

impl UploadEntry {
    /// Create a new entry in the `Uploading` state.
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            progress: 0,
            state: UploadState::Uploading,
            document_id: None,
        }
    }

    /// Mark the entry successful with the server-assigned document ID.
    pub fn succeed(&mut self, document_id: impl Into<String>) {
        self.progress = 100;
        self.state = UploadState::Success;
        self.document_id = Some(document_id.into());
    }

    /// Mark the entry failed with a user-facing message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = UploadState::Error(message.into());
    }

    /// Whether the entry reached `Success`.
    pub fn is_success(&self) -> bool {
        self.state == UploadState::Success
    }
}
