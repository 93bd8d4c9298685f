//! Document upload integration tests.
//!
//! Uploads run sequentially in selection order, one file resolving before
//! the next begins, and a failed file does not abort the rest of the batch.

mod common;

use common::*;

use std::io::Write;

use titledesk::adapters::mock::{InMemoryCredentials, MockHttpClient, MockResponse};
use titledesk::app::AppMessage;

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents).unwrap();
    path
}

fn upload_ok(id: &str) -> MockResponse {
    ok_response(&format!(
        r#"{{"id":"{}","filename":"f","status":"uploaded"}}"#,
        id
    ))
}

#[tokio::test]
async fn test_files_upload_sequentially_in_selection_order() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_file(&dir, "a.pdf", b"%PDF-1.4");
    let second = write_file(&dir, "b.png", b"\x89PNG");

    let client = MockHttpClient::new();
    client.set_response(
        &url("/documents/upload"),
        MockResponse::Sequence(vec![upload_ok("doc-1"), upload_ok("doc-2")]),
    );
    let provider = InMemoryCredentials::new();
    let (mut app, mut rx) = test_app(&client, &provider);
    app.identity = Some(test_identity());

    app.start_upload(vec![first, second]);
    assert_eq!(app.uploads.len(), 2);

    // First file resolves before the second request is issued.
    let message = rx.recv().await.unwrap();
    assert!(matches!(message, AppMessage::UploadFinished { index: 0, .. }));
    app.handle_message(message);
    assert!(app.uploads[0].is_success());

    let message = rx.recv().await.unwrap();
    assert!(matches!(message, AppMessage::UploadFinished { index: 1, .. }));
    app.handle_message(message);

    let message = rx.recv().await.unwrap();
    assert!(matches!(message, AppMessage::UploadBatchDone));
    app.handle_message(message);
    assert!(!app.uploading);

    let requests = client.requests_for(&url("/documents/upload"));
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].file_name.as_deref(), Some("a.pdf"));
    assert_eq!(requests[1].file_name.as_deref(), Some("b.png"));
}

#[tokio::test]
async fn test_unreadable_file_fails_in_place_without_stopping_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("gone.pdf");
    let readable = write_file(&dir, "ok.pdf", b"%PDF-1.4");

    let client = MockHttpClient::new();
    client.set_response(&url("/documents/upload"), upload_ok("doc-1"));
    let provider = InMemoryCredentials::new();
    let (mut app, mut rx) = test_app(&client, &provider);
    app.identity = Some(test_identity());

    app.start_upload(vec![missing, readable]);
    assert_eq!(app.uploads.len(), 2);

    let mut done = false;
    while !done {
        let message = rx.recv().await.unwrap();
        done = matches!(message, AppMessage::UploadBatchDone);
        app.handle_message(message);
    }

    assert!(!app.uploads[0].is_success());
    assert!(app.uploads[1].is_success());

    // Only the readable file reached the server.
    let requests = client.requests_for(&url("/documents/upload"));
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].file_name.as_deref(), Some("ok.pdf"));
}

#[tokio::test]
async fn test_server_rejection_marks_the_entry_failed() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "big.pdf", b"%PDF-1.4");

    let client = MockHttpClient::new();
    client.set_response(&url("/documents/upload"), status_response(413, "too large"));
    let provider = InMemoryCredentials::new();
    let (mut app, mut rx) = test_app(&client, &provider);
    app.identity = Some(test_identity());

    app.start_upload(vec![path]);

    let mut done = false;
    while !done {
        let message = rx.recv().await.unwrap();
        done = matches!(message, AppMessage::UploadBatchDone);
        app.handle_message(message);
    }

    assert!(!app.uploads[0].is_success());
    assert!(app.notice.is_some());
}
