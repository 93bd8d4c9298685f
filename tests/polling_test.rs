//! Report polling integration tests at the app level.
//!
//! The app starts polling when an opened report is still processing and
//! must stop (and never fetch again) once the report completes, the fetch
//! fails, or the view is left.

mod common;

use common::*;

use titledesk::adapters::mock::{InMemoryCredentials, MockHttpClient, MockResponse};
use titledesk::app::{AppMessage, Screen};
use titledesk::models::ReportStatus;

fn report_body(status: &str) -> String {
    format!(r#"{{"id":"rep-1","title":"T","status":"{}"}}"#, status)
}

async fn pump(
    app: &mut titledesk::app::App<MockHttpClient, InMemoryCredentials>,
    rx: &mut tokio::sync::mpsc::UnboundedReceiver<AppMessage>,
) -> AppMessage {
    let message = rx.recv().await.unwrap();
    app.handle_message(message.clone());
    message
}

#[tokio::test(start_paused = true)]
async fn test_processing_report_refetched_no_sooner_than_interval() {
    let client = MockHttpClient::new();
    client.set_response(
        &url("/reports/rep-1"),
        MockResponse::Sequence(vec![
            ok_response(&report_body("processing")),
            ok_response(&report_body("processing")),
            ok_response(&report_body("completed")),
        ]),
    );
    let provider = InMemoryCredentials::new();
    let (mut app, mut rx) = test_app(&client, &provider);
    app.identity = Some(test_identity());

    let start = tokio::time::Instant::now();
    app.open_report("rep-1".to_string());

    // Initial fetch, then two polls five seconds apart.
    pump(&mut app, &mut rx).await;
    assert!(app.poll.is_some());

    pump(&mut app, &mut rx).await;
    assert_eq!(start.elapsed(), app.poll_interval);

    pump(&mut app, &mut rx).await;
    assert_eq!(start.elapsed(), app.poll_interval * 2);

    assert_eq!(
        app.report_detail.as_ref().unwrap().status,
        ReportStatus::Completed
    );
    assert!(app.poll.is_none());
    assert_eq!(client.requests_for(&url("/reports/rep-1")).len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_no_further_fetches_after_completed() {
    let client = MockHttpClient::new();
    client.set_response(
        &url("/reports/rep-1"),
        MockResponse::Sequence(vec![
            ok_response(&report_body("processing")),
            ok_response(&report_body("completed")),
        ]),
    );
    let provider = InMemoryCredentials::new();
    let (mut app, mut rx) = test_app(&client, &provider);
    app.identity = Some(test_identity());

    app.open_report("rep-1".to_string());
    pump(&mut app, &mut rx).await;
    pump(&mut app, &mut rx).await;
    assert!(app.poll.is_none());

    tokio::time::sleep(app.poll_interval * 3).await;
    assert_eq!(client.requests_for(&url("/reports/rep-1")).len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_leaving_the_view_prevents_further_fetches() {
    let client = MockHttpClient::new();
    client.set_response(&url("/reports/rep-1"), ok_response(&report_body("processing")));
    let provider = InMemoryCredentials::new();
    let (mut app, mut rx) = test_app(&client, &provider);
    app.identity = Some(test_identity());

    app.open_report("rep-1".to_string());
    pump(&mut app, &mut rx).await;
    assert!(app.poll.is_some());
    let fetches_before = client.requests_for(&url("/reports/rep-1")).len();

    // Unmount: back to the dashboard. The poll handle is dropped.
    app.navigate(Screen::Dashboard);
    assert!(app.poll.is_none());

    tokio::time::sleep(app.poll_interval * 3).await;
    assert_eq!(
        client.requests_for(&url("/reports/rep-1")).len(),
        fetches_before
    );
}

#[tokio::test(start_paused = true)]
async fn test_fetch_failure_stops_polling_and_surfaces_notice() {
    let client = MockHttpClient::new();
    client.set_response(
        &url("/reports/rep-1"),
        MockResponse::Sequence(vec![
            ok_response(&report_body("processing")),
            status_response(500, "boom"),
        ]),
    );
    let provider = InMemoryCredentials::new();
    let (mut app, mut rx) = test_app(&client, &provider);
    app.identity = Some(test_identity());

    app.open_report("rep-1".to_string());
    pump(&mut app, &mut rx).await;
    let failure = pump(&mut app, &mut rx).await;

    assert!(matches!(failure, AppMessage::ReportLoadFailed { .. }));
    assert!(app.poll.is_none());
    assert!(app.notice.is_some());

    tokio::time::sleep(app.poll_interval * 3).await;
    assert_eq!(client.requests_for(&url("/reports/rep-1")).len(), 2);
}
