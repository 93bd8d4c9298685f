//! API client for the titledesk service.
//!
//! Wraps outbound HTTP calls against a fixed base URL. Every request
//! carries `Content-Type: application/json` (except the multipart upload)
//! and, when a credential is installed in the [`SessionContext`], a
//! bearer authorization header read at request-construction time.
//!
//! The client performs no retries and no circuit breaking; callers handle
//! failures.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::{
    Document, GenerateReportRequest, GenerateReportResponse, Identity, LoginResponse,
    ProfileCreateRequest, ProfileUpdateRequest, ProfileUpdateResponse, RegisterRequest, Report,
    ReportSummary, UploadResponse,
};
use crate::session::SessionContext;
use crate::traits::{FilePart, Headers, HttpClient, Response};

/// Client for the titledesk HTTP API, generic over the HTTP transport.
///
/// # Example
///
/// ```ignore
/// use titledesk::adapters::ReqwestHttpClient;
/// use titledesk::api::ApiClient;
/// use titledesk::session::SessionContext;
///
/// let context = SessionContext::new();
/// let api = ApiClient::new(ReqwestHttpClient::new(), "https://api.titledesk.app/api/v1", context);
/// let documents = api.list_documents().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient<C: HttpClient> {
    http: C,
    base_url: String,
    context: SessionContext,
}

impl<C: HttpClient> ApiClient<C> {
    /// Create a new API client.
    pub fn new(http: C, base_url: impl Into<String>, context: SessionContext) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http,
            base_url,
            context,
        }
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session context credentials are read from.
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build headers for a request. The credential is read from the
    /// session context here, at request-construction time.
    fn headers(&self, json: bool) -> Headers {
        let mut headers = Headers::new();
        if json {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(token) = self.context.token() {
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        }
        headers
    }

    fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(ApiError::from_status(response.status, message));
        }
        response.json().map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.http.get(&self.url(path), &self.headers(true)).await?;
        Self::decode(response)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = self
            .http
            .post(&self.url(path), &body, &self.headers(true))
            .await?;
        Self::decode(response)
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = self
            .http
            .put(&self.url(path), &body, &self.headers(true))
            .await?;
        Self::decode(response)
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    /// `POST /auth/login` with email and password.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = serde_json::json!({ "email": email, "password": password });
        self.post_json("/auth/login", &body).await
    }

    /// `POST /auth/register` to create an account.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let body =
            serde_json::to_string(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = self
            .http
            .post(&self.url("/auth/register"), &body, &self.headers(true))
            .await?;
        if !response.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(ApiError::from_status(response.status, message));
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    /// `GET /users/me`, the "who am I" endpoint.
    pub async fn me(&self) -> Result<Identity, ApiError> {
        self.get_json("/users/me").await
    }

    /// `POST /users` to create the user-profile record.
    pub async fn create_profile(
        &self,
        request: &ProfileCreateRequest,
    ) -> Result<Identity, ApiError> {
        self.post_json("/users", request).await
    }

    /// `PUT /users/me` to update profile fields.
    pub async fn update_profile(
        &self,
        request: &ProfileUpdateRequest,
    ) -> Result<ProfileUpdateResponse, ApiError> {
        self.put_json("/users/me", request).await
    }

    // ------------------------------------------------------------------
    // Documents
    // ------------------------------------------------------------------

    /// `GET /documents`.
    pub async fn list_documents(&self) -> Result<Vec<Document>, ApiError> {
        self.get_json("/documents").await
    }

    /// `GET /documents/{id}`.
    pub async fn get_document(&self, id: &str) -> Result<Document, ApiError> {
        self.get_json(&format!("/documents/{}", id)).await
    }

    /// `POST /documents/upload` with a multipart file body.
    pub async fn upload_document(
        &self,
        filename: &str,
        content_type: &str,
        data: Bytes,
    ) -> Result<UploadResponse, ApiError> {
        let file = FilePart::new(filename, content_type, data);
        let response = self
            .http
            .post_multipart(&self.url("/documents/upload"), file, &self.headers(false))
            .await?;
        Self::decode(response)
    }

    // ------------------------------------------------------------------
    // Reports
    // ------------------------------------------------------------------

    /// `GET /reports`.
    pub async fn list_reports(&self) -> Result<Vec<ReportSummary>, ApiError> {
        self.get_json("/reports").await
    }

    /// `GET /reports/{id}`.
    pub async fn get_report(&self, id: &str) -> Result<Report, ApiError> {
        self.get_json(&format!("/reports/{}", id)).await
    }

    /// `POST /reports/generate` with the selected document IDs.
    pub async fn generate_report(
        &self,
        document_ids: Vec<String>,
    ) -> Result<GenerateReportResponse, ApiError> {
        let request = GenerateReportRequest { document_ids };
        self.post_json("/reports/generate", &request).await
    }
}
