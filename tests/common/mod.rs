//! Common test utilities for integration tests.
//!
//! Provides reusable fixtures for driving the session and app layers
//! against the mock adapters without network or file system access.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::sync::mpsc;

use titledesk::adapters::mock::{InMemoryCredentials, MockHttpClient, MockResponse};
use titledesk::api::ApiClient;
use titledesk::app::{App, AppMessage};
use titledesk::auth::Credentials;
use titledesk::models::Identity;
use titledesk::session::{SessionContext, SessionStore};
use titledesk::traits::Response;

/// Base URL used by all mock-backed tests.
pub const BASE_URL: &str = "https://api.test/api/v1";

/// Canonical login response body for `a@b.com` / `tok123`.
pub const LOGIN_BODY: &str =
    r#"{"access_token":"tok123","token_type":"bearer","user":{"id":"u1","email":"a@b.com"}}"#;

/// Canonical `/users/me` body for the same user.
pub const ME_BODY: &str = r#"{"id":"u1","email":"a@b.com","full_name":"Ada","firm_name":"Firm"}"#;

/// The identity matching [`ME_BODY`].
pub fn test_identity() -> Identity {
    Identity {
        id: "u1".to_string(),
        email: "a@b.com".to_string(),
        full_name: Some("Ada".to_string()),
        firm_name: Some("Firm".to_string()),
        is_active: true,
    }
}

/// Stored credentials holding `tok123`.
pub fn stored_credentials() -> Credentials {
    Credentials::with_token("tok123")
}

/// A 200 response with the given body.
pub fn ok_response(body: &str) -> MockResponse {
    MockResponse::Success(Response::new(200, Bytes::from(body.to_string())))
}

/// A non-2xx response with the given status and body.
pub fn status_response(status: u16, body: &str) -> MockResponse {
    MockResponse::Success(Response::new(status, Bytes::from(body.to_string())))
}

/// Absolute URL for an API path.
pub fn url(path: &str) -> String {
    format!("{}{}", BASE_URL, path)
}

/// Session store wired to the given mock client and credential store.
pub fn test_session(
    client: &MockHttpClient,
    provider: &InMemoryCredentials,
) -> Arc<SessionStore<MockHttpClient, InMemoryCredentials>> {
    let api = ApiClient::new(client.clone(), BASE_URL, SessionContext::new());
    Arc::new(SessionStore::new(api, provider.clone()))
}

/// Full app fixture over mocks, with the message channel split out so
/// tests can pump messages through `handle_message` themselves.
pub fn test_app(
    client: &MockHttpClient,
    provider: &InMemoryCredentials,
) -> (
    App<MockHttpClient, InMemoryCredentials>,
    mpsc::UnboundedReceiver<AppMessage>,
) {
    let session = test_session(client, provider);
    let (tx, rx) = mpsc::unbounded_channel();
    (App::new(session, Duration::from_secs(5), tx), rx)
}
