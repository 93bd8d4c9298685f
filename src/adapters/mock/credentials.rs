//! In-memory credentials provider for testing.
//!
//! Provides a credentials provider that stores credentials in memory,
//! suitable for testing without file system access.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::auth::credentials::Credentials;
use crate::traits::{CredentialsError, CredentialsProvider};

/// In-memory credentials provider for testing.
///
/// # Example
///
/// ```ignore
/// use titledesk::adapters::mock::InMemoryCredentials;
/// use titledesk::traits::CredentialsProvider;
/// use titledesk::auth::Credentials;
///
/// let provider = InMemoryCredentials::new();
/// assert!(provider.load().await?.is_none());
///
/// provider.save(&Credentials::with_token("tok123")).await?;
/// assert!(provider.load().await?.is_some());
///
/// provider.clear().await?;
/// assert!(provider.load().await?.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryCredentials {
    /// Stored credentials
    credentials: Arc<Mutex<Option<Credentials>>>,
    /// Whether save should fail
    save_should_fail: Arc<Mutex<bool>>,
    /// Whether clear should fail
    clear_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryCredentials {
    /// Create a new in-memory credentials provider.
    pub fn new() -> Self {
        Self {
            credentials: Arc::new(Mutex::new(None)),
            save_should_fail: Arc::new(Mutex::new(false)),
            clear_should_fail: Arc::new(Mutex::new(false)),
        }
    }

    /// Create a provider with initial credentials.
    pub fn with_credentials(creds: Credentials) -> Self {
        let provider = Self::new();
        provider.set_credentials(Some(creds));
        provider
    }

    /// Configure whether save should fail.
    pub fn set_save_should_fail(&self, should_fail: bool) {
        *self.save_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether clear should fail.
    pub fn set_clear_should_fail(&self, should_fail: bool) {
        *self.clear_should_fail.lock().unwrap() = should_fail;
    }

    /// Get the current credentials synchronously (for test assertions).
    pub fn get_credentials(&self) -> Option<Credentials> {
        self.credentials.lock().unwrap().clone()
    }

    /// Set credentials synchronously (for test setup).
    pub fn set_credentials(&self, creds: Option<Credentials>) {
        *self.credentials.lock().unwrap() = creds;
    }
}

impl Default for InMemoryCredentials {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialsProvider for InMemoryCredentials {
    async fn load(&self) -> Result<Option<Credentials>, CredentialsError> {
        Ok(self.credentials.lock().unwrap().clone())
    }

    async fn save(&self, creds: &Credentials) -> Result<(), CredentialsError> {
        if *self.save_should_fail.lock().unwrap() {
            return Err(CredentialsError::SaveFailed(
                "Mock save failure".to_string(),
            ));
        }

        *self.credentials.lock().unwrap() = Some(creds.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), CredentialsError> {
        if *self.clear_should_fail.lock().unwrap() {
            return Err(CredentialsError::ClearFailed(
                "Mock clear failure".to_string(),
            ));
        }

        *self.credentials.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_by_default() {
        let provider = InMemoryCredentials::new();
        assert!(provider.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let provider = InMemoryCredentials::new();
        let creds = Credentials::with_token("tok123");

        provider.save(&creds).await.unwrap();
        assert_eq!(provider.load().await.unwrap(), Some(creds));
    }

    #[tokio::test]
    async fn test_with_credentials() {
        let provider = InMemoryCredentials::with_credentials(Credentials::with_token("t"));
        assert!(provider.load().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_clear() {
        let provider = InMemoryCredentials::with_credentials(Credentials::with_token("t"));
        provider.clear().await.unwrap();
        assert!(provider.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_failure() {
        let provider = InMemoryCredentials::new();
        provider.set_save_should_fail(true);

        let result = provider.save(&Credentials::with_token("t")).await;
        assert!(matches!(result, Err(CredentialsError::SaveFailed(_))));
        assert!(provider.get_credentials().is_none());
    }

    #[tokio::test]
    async fn test_clear_failure() {
        let provider = InMemoryCredentials::with_credentials(Credentials::with_token("t"));
        provider.set_clear_should_fail(true);

        let result = provider.clear().await;
        assert!(matches!(result, Err(CredentialsError::ClearFailed(_))));
        assert!(provider.get_credentials().is_some());
    }
}
