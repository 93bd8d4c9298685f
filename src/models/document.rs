use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Processing state of an uploaded document, as reported by the server.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Stored but not yet picked up for text extraction
    #[default]
    Uploaded,
    /// Text extraction in progress (server also reports "pending")
    #[serde(alias = "pending")]
    Processing,
    /// Text extraction finished
    Processed,
}

impl DocumentStatus {
    /// Short label for list views.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentStatus::Uploaded => "uploaded",
            DocumentStatus::Processing => "processing",
            DocumentStatus::Processed => "processed",
        }
    }
}

/// A document record from `GET /documents` or `GET /documents/{id}`.
///
/// Documents are created server-side on upload; the client only reads them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Unique document ID
    pub id: String,
    /// Original file name
    pub filename: String,
    /// MIME type, present on detail responses
    #[serde(default)]
    pub content_type: Option<String>,
    /// When the document was uploaded
    #[serde(default = "Utc::now")]
    pub upload_date: DateTime<Utc>,
    /// Processing state
    #[serde(default)]
    pub status: DocumentStatus,
    /// Extracted text, present on detail responses once processed
    #[serde(default)]
    pub extracted_text: Option<String>,
}

/// Response from `POST /documents/upload`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadResponse {
    /// Server-assigned document ID
    pub id: String,
    /// Echoed file name
    #[serde(default)]
    pub filename: Option<String>,
    /// Initial status
    #[serde(default)]
    pub status: DocumentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_deserialize_list_item() {
        let json = r#"{
            "id": "doc-123",
            "filename": "sample_deed.pdf",
            "upload_date": "2025-05-01T10:00:00Z",
            "status": "processed"
        }"#;

        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.id, "doc-123");
        assert_eq!(doc.status, DocumentStatus::Processed);
        assert!(doc.extracted_text.is_none());
    }

    #[test]
    fn test_document_deserialize_detail() {
        let json = r#"{
            "id": "doc-123",
            "filename": "sample_deed.pdf",
            "content_type": "application/pdf",
            "upload_date": "2025-05-01T10:00:00Z",
            "status": "processed",
            "extracted_text": "Sample extracted text..."
        }"#;

        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.content_type, Some("application/pdf".to_string()));
        assert!(doc.extracted_text.is_some());
    }

    #[test]
    fn test_document_status_pending_alias() {
        let status: DocumentStatus = serde_json::from_str(r#""pending""#).unwrap();
        assert_eq!(status, DocumentStatus::Processing);
    }

    #[test]
    fn test_document_status_labels() {
        assert_eq!(DocumentStatus::Uploaded.label(), "uploaded");
        assert_eq!(DocumentStatus::Processing.label(), "processing");
        assert_eq!(DocumentStatus::Processed.label(), "processed");
    }

    #[test]
    fn test_upload_response_deserialize() {
        let json = r#"{
            "id": "doc-9",
            "filename": "a.pdf",
            "content_type": "application/pdf",
            "size": 0,
            "upload_date": "2025-05-01T10:00:00",
            "status": "uploaded"
        }"#;

        let response: UploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.id, "doc-9");
        assert_eq!(response.status, DocumentStatus::Uploaded);
    }
}
