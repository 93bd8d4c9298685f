//! Document upload flow.
//!
//! Files are uploaded one at a time, in the order they were selected; a
//! failed file does not stop the rest of the batch. Per-file outcomes are
//! forwarded as [`AppMessage::UploadFinished`] with the file's index in
//! the batch, followed by [`AppMessage::UploadBatchDone`].

use std::path::Path;

use bytes::Bytes;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::api::ApiClient;
use crate::app::messages::AppMessage;
use crate::traits::HttpClient;

/// A file read into memory and ready to upload.
#[derive(Debug, Clone)]
pub struct UploadFile {
    /// File name sent to the server
    pub name: String,
    /// MIME type, guessed from the extension
    pub content_type: String,
    /// File contents
    pub data: Bytes,
}

impl UploadFile {
    /// Build an upload file from a name and raw bytes.
    pub fn new(name: impl Into<String>, data: Bytes) -> Self {
        let name = name.into();
        let content_type = content_type_for(&name).to_string();
        Self {
            name,
            content_type,
            data,
        }
    }

    /// File size in bytes.
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

/// Read a file from disk into an [`UploadFile`].
pub async fn load_file(path: &Path) -> std::io::Result<UploadFile> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let data = tokio::fs::read(path).await?;
    Ok(UploadFile::new(name, Bytes::from(data)))
}

/// Guess a MIME type from a file name's extension.
pub fn content_type_for(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "tif" | "tiff" => "image/tiff",
        "txt" => "text/plain",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

/// Upload `files` sequentially, reporting per-file outcomes on `tx`.
///
/// Each file carries its index in the staged entry list, so outcomes can
/// be matched up even when some staged files never made it into the
/// batch. The next file is not started until the previous one has
/// resolved. Failures are reported per file; the batch continues past
/// them.
pub fn run_upload_batch<C>(
    api: ApiClient<C>,
    files: Vec<(usize, UploadFile)>,
    tx: UnboundedSender<AppMessage>,
) -> JoinHandle<()>
where
    C: HttpClient + Clone + 'static,
{
    tokio::spawn(async move {
        for (index, file) in files {
            tracing::info!("uploading {} ({} bytes)", file.name, file.data.len());
            let result = api
                .upload_document(&file.name, &file.content_type, file.data)
                .await
                .map_err(|e| e.to_string());

            if tx.send(AppMessage::UploadFinished { index, result }).is_err() {
                return;
            }
        }
        let _ = tx.send(AppMessage::UploadBatchDone);
    })
}
