//! Error types for the API and session layers.
//!
//! Transport-level errors live in [`crate::traits::HttpError`]; this module
//! adds the API-call classification the views act on, plus the
//! stage-classified registration error.

use thiserror::Error;

use crate::traits::HttpError;

/// Errors from a single API call.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Transport-level failure (connection, timeout, IO)
    #[error("{0}")]
    Transport(HttpError),

    /// Server rejected the request's credential
    #[error("Not authorized")]
    Unauthorized,

    /// Server returned a non-2xx status
    #[error("Server error ({status}): {message}")]
    Status { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a raw HTTP failure.
    pub fn from_http(err: HttpError) -> Self {
        match err {
            HttpError::ServerError { status: 401, message } => {
                let _ = message;
                ApiError::Unauthorized
            }
            HttpError::ServerError { status, message } => ApiError::Status { status, message },
            other => ApiError::Transport(other),
        }
    }

    /// Classify a non-2xx response status with its body text.
    pub fn from_status(status: u16, message: String) -> Self {
        if status == 401 {
            ApiError::Unauthorized
        } else {
            ApiError::Status { status, message }
        }
    }

    /// Whether the error indicates a rejected credential.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        ApiError::from_http(err)
    }
}

/// Registration failures, classified by stage.
///
/// The flow is deliberately non-idempotent: re-invoking register after a
/// partial failure attempts account creation again.
#[derive(Debug, Clone, Error)]
pub enum RegisterError {
    /// `POST /auth/register` failed; no account was created
    #[error("Could not create account: {0}")]
    AccountCreation(ApiError),

    /// The account exists but signing in with the new credentials failed
    #[error("Account created but could not sign in: {0}")]
    SignIn(ApiError),

    /// The account exists and is signed in, but the profile record could
    /// not be created after all retry attempts
    #[error("Signed in but could not create profile: {0}")]
    ProfileCreation(ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_classification() {
        let err = ApiError::from_http(HttpError::ServerError {
            status: 401,
            message: "invalid token".to_string(),
        });
        assert!(err.is_unauthorized());

        let err = ApiError::from_status(401, String::new());
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_status_classification() {
        let err = ApiError::from_status(500, "boom".to_string());
        assert!(!err.is_unauthorized());
        assert_eq!(err.to_string(), "Server error (500): boom");
    }

    #[test]
    fn test_transport_classification() {
        let err = ApiError::from_http(HttpError::ConnectionFailed("refused".to_string()));
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[test]
    fn test_register_error_messages() {
        let sign_in = RegisterError::SignIn(ApiError::Unauthorized);
        assert!(sign_in
            .to_string()
            .starts_with("Account created but could not sign in"));

        let profile = RegisterError::ProfileCreation(ApiError::from_status(500, "x".to_string()));
        assert!(profile.to_string().starts_with("Signed in but"));
    }
}
