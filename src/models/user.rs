use serde::{Deserialize, Serialize};

/// The authenticated user's profile data as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    /// Unique user ID
    pub id: String,
    /// Account email address
    pub email: String,
    /// Display name
    #[serde(default)]
    pub full_name: Option<String>,
    /// Organization (law firm) name
    #[serde(default)]
    pub firm_name: Option<String>,
    /// Whether the account is active
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Identity {
    /// Name to show in the UI header: full name when present, else email.
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.email,
        }
    }
}

/// Response from `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    /// Opaque bearer token
    pub access_token: String,
    /// Token type, always "bearer"
    #[serde(default)]
    pub token_type: Option<String>,
    /// The authenticated user
    pub user: Identity,
}

/// Request body for `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub firm_name: String,
}

/// Request body for `POST /users` (profile record creation).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileCreateRequest {
    pub email: String,
    pub full_name: String,
    pub firm_name: String,
}

/// Request body for `PUT /users/me`. Unset fields are omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firm_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Response from `PUT /users/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdateResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub user: Identity,
}
