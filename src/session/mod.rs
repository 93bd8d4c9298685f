//! Session lifecycle: restore, login, register, logout.
//!
//! [`SessionStore`] owns the credential storage and drives the
//! authentication flows against the API. "Authenticated" is not a flag:
//! the store hands back an [`Identity`] on success and the app treats
//! holding one as being signed in.

mod context;

pub use context::SessionContext;

use std::time::Duration;

use crate::api::ApiClient;
use crate::auth::Credentials;
use crate::error::{ApiError, RegisterError};
use crate::models::{Identity, ProfileCreateRequest, RegisterRequest};
use crate::retry::with_retries;
use crate::traits::{CredentialsProvider, HttpClient};

/// Attempts made at profile-record creation during registration.
pub const PROFILE_CREATE_ATTEMPTS: u32 = 3;

/// Delay between profile-record creation attempts.
pub const PROFILE_CREATE_DELAY: Duration = Duration::from_secs(2);

/// Drives session flows and keeps the credential cell and storage in sync.
pub struct SessionStore<C: HttpClient, P: CredentialsProvider> {
    api: ApiClient<C>,
    provider: P,
}

impl<C: HttpClient, P: CredentialsProvider> SessionStore<C, P> {
    /// Create a store around an API client and a credential storage backend.
    pub fn new(api: ApiClient<C>, provider: P) -> Self {
        Self { api, provider }
    }

    /// The underlying API client.
    pub fn api(&self) -> &ApiClient<C> {
        &self.api
    }

    /// Try to resume a previous session from stored credentials.
    ///
    /// Returns `Ok(Some(identity))` when a stored token is still accepted
    /// by the server. A rejected token is treated as a clean logged-out
    /// start: storage and the context are cleared and `Ok(None)` comes
    /// back. Transport failures propagate so the caller can distinguish
    /// "not signed in" from "could not reach the server".
    pub async fn restore(&self) -> Result<Option<Identity>, ApiError> {
        let stored = match self.provider.load().await {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!("could not read stored credentials: {}", e);
                None
            }
        };

        let token = match stored.and_then(|c| c.access_token) {
            Some(token) if !token.is_empty() => token,
            _ => return Ok(None),
        };

        self.api.context().set_token(token);

        match self.api.me().await {
            Ok(identity) => {
                tracing::info!("session restored for {}", identity.email);
                Ok(Some(identity))
            }
            Err(e) if e.is_unauthorized() => {
                tracing::info!("stored credential rejected, clearing");
                self.forget().await;
                Ok(None)
            }
            Err(e) => {
                // Leave storage alone; the token may still be good.
                self.api.context().clear_token();
                Err(e)
            }
        }
    }

    /// Sign in with email and password.
    ///
    /// On success the token is installed in the context and persisted.
    /// A storage write failure does not fail the login; the session is
    /// simply not remembered across restarts.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, ApiError> {
        let response = self.api.login(email, password).await?;

        self.api.context().set_token(response.access_token.clone());

        let mut creds = Credentials::with_token(&response.access_token);
        creds.user_id = Some(response.user.id.clone());
        if let Err(e) = self.provider.save(&creds).await {
            tracing::warn!("could not persist credentials: {}", e);
        }

        tracing::info!("signed in as {}", response.user.email);
        Ok(response.user)
    }

    /// Create an account, sign in with it, and create the profile record.
    ///
    /// Three stages, each with its own failure classification:
    ///
    /// 1. account creation (`POST /auth/register`)
    /// 2. sign-in with the new credentials
    /// 3. profile-record creation, retried up to
    ///    [`PROFILE_CREATE_ATTEMPTS`] times with [`PROFILE_CREATE_DELAY`]
    ///    between attempts
    ///
    /// A stage-3 failure still leaves the user signed in; the caller gets
    /// the error and the identity from stage 2 is lost, so it reports the
    /// stage message and lets the user retry from the profile screen.
    pub async fn register(&self, request: RegisterRequest) -> Result<Identity, RegisterError> {
        self.api
            .register(&request)
            .await
            .map_err(RegisterError::AccountCreation)?;

        let identity = self
            .login(&request.email, &request.password)
            .await
            .map_err(RegisterError::SignIn)?;

        let profile = ProfileCreateRequest {
            email: request.email.clone(),
            full_name: request.full_name.clone(),
            firm_name: request.firm_name.clone(),
        };
        with_retries(PROFILE_CREATE_ATTEMPTS, PROFILE_CREATE_DELAY, || {
            self.api.create_profile(&profile)
        })
        .await
        .map_err(RegisterError::ProfileCreation)?;

        tracing::info!("registered {}", identity.email);
        Ok(identity)
    }

    /// Sign out: drop the credential from the context and storage.
    ///
    /// Always succeeds from the caller's point of view; a storage failure
    /// is logged but the in-memory session still ends.
    pub async fn logout(&self) {
        tracing::info!("signing out");
        self.forget().await;
    }

    async fn forget(&self) {
        self.api.context().clear_token();
        if let Err(e) = self.provider.clear().await {
            tracing::warn!("could not clear stored credentials: {}", e);
        }
    }
}
