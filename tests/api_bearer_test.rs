//! Bearer-token behavior against a real HTTP server.
//!
//! Runs the reqwest adapter against a wiremock server to confirm that the
//! Authorization header follows the session: present on every call after
//! login, absent again after logout.

use std::sync::Arc;

use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use titledesk::adapters::mock::InMemoryCredentials;
use titledesk::adapters::ReqwestHttpClient;
use titledesk::api::ApiClient;
use titledesk::session::{SessionContext, SessionStore};

const LOGIN_BODY: &str =
    r#"{"access_token":"tok123","token_type":"bearer","user":{"id":"u1","email":"a@b.com"}}"#;

async fn mock_backend() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LOGIN_BODY))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;
    server
}

fn store(server: &MockServer) -> Arc<SessionStore<ReqwestHttpClient, InMemoryCredentials>> {
    let api = ApiClient::new(
        ReqwestHttpClient::new(),
        server.uri(),
        SessionContext::new(),
    );
    Arc::new(SessionStore::new(api, InMemoryCredentials::new()))
}

#[tokio::test]
async fn test_bearer_header_sent_on_every_call_after_login() {
    let server = mock_backend().await;
    let store = store(&server);

    store.login("a@b.com", "secret123").await.unwrap();

    store.api().list_documents().await.unwrap();
    store.api().list_documents().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let document_calls: Vec<&Request> = requests
        .iter()
        .filter(|r| r.url.path() == "/documents")
        .collect();
    assert_eq!(document_calls.len(), 2);
    for request in document_calls {
        let value = request
            .headers
            .get("authorization")
            .expect("authorization header");
        assert_eq!(value.to_str().unwrap(), "Bearer tok123");
    }
}

#[tokio::test]
async fn test_login_request_itself_carries_no_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(500).set_body_string("unexpected auth"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LOGIN_BODY))
        .mount(&server)
        .await;

    let store = store(&server);
    store.login("a@b.com", "secret123").await.unwrap();
}

#[tokio::test]
async fn test_no_bearer_header_after_logout() {
    let server = mock_backend().await;
    let store = store(&server);

    store.login("a@b.com", "secret123").await.unwrap();
    store.logout().await;

    store.api().list_documents().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let last = requests
        .iter()
        .filter(|r| r.url.path() == "/documents")
        .last()
        .unwrap();
    assert!(last.headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_rejected_call_surfaces_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .and(header("authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"detail":"expired"}"#))
        .mount(&server)
        .await;

    let api = ApiClient::new(
        ReqwestHttpClient::new(),
        server.uri(),
        SessionContext::new(),
    );
    api.context().set_token("stale".to_string());

    let err = api.list_documents().await.unwrap_err();
    assert!(err.is_unauthorized());
}
