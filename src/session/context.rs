//! Shared session context.
//!
//! A single [`SessionContext`] is constructed at startup and handed to
//! every component that issues API calls. The credential is read from it
//! at request-construction time, so the context is the one place a
//! logout-racing-an-in-flight-call can be reasoned about: a request that
//! was built before logout keeps the credential it read.

use std::sync::{Arc, RwLock};

/// Process-wide holder of the current bearer credential.
///
/// Cheap to clone; clones share the same underlying cell.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    token: Arc<RwLock<Option<String>>>,
}

impl SessionContext {
    /// Create a context with no credential.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context holding the given credential.
    pub fn with_token(token: impl Into<String>) -> Self {
        let context = Self::new();
        context.set_token(token.into());
        context
    }

    /// Read the current credential.
    pub fn token(&self) -> Option<String> {
        self.token.read().expect("session context lock poisoned").clone()
    }

    /// Whether a credential is currently installed.
    pub fn has_token(&self) -> bool {
        self.token.read().expect("session context lock poisoned").is_some()
    }

    /// Install a credential.
    pub fn set_token(&self, token: String) {
        *self.token.write().expect("session context lock poisoned") = Some(token);
    }

    /// Remove the credential.
    pub fn clear_token(&self) {
        *self.token.write().expect("session context lock poisoned") = None;
    }
}
