//! File-based credentials provider adapter.
//!
//! Wraps [`CredentialsManager`] so credential storage can be injected
//! behind the [`CredentialsProvider`] trait.

use async_trait::async_trait;

use crate::auth::credentials::{Credentials, CredentialsManager};
use crate::traits::{CredentialsError, CredentialsProvider};

/// File-based credentials provider.
///
/// Credentials are stored in `~/.titledesk/.credentials.json`.
#[derive(Debug)]
pub struct FileCredentialsProvider {
    manager: CredentialsManager,
}

impl FileCredentialsProvider {
    /// Create a new file-based credentials provider.
    ///
    /// Fails if the home directory cannot be determined.
    pub fn new() -> Result<Self, CredentialsError> {
        CredentialsManager::new()
            .map(|manager| Self { manager })
            .ok_or_else(|| {
                CredentialsError::Other("Failed to determine home directory".to_string())
            })
    }

    /// Create a provider around an existing manager (used by tests with
    /// a temporary directory).
    pub fn with_manager(manager: CredentialsManager) -> Self {
        Self { manager }
    }

    /// Get a reference to the underlying credentials manager.
    pub fn manager(&self) -> &CredentialsManager {
        &self.manager
    }

    /// Get the path to the credentials file.
    pub fn credentials_path(&self) -> &std::path::PathBuf {
        self.manager.credentials_path()
    }
}

#[async_trait]
impl CredentialsProvider for FileCredentialsProvider {
    async fn load(&self) -> Result<Option<Credentials>, CredentialsError> {
        // CredentialsManager::load() returns default Credentials if the
        // file doesn't exist; map that back to None.
        let creds = self.manager.load();

        if creds.access_token.is_none() && creds.user_id.is_none() {
            Ok(None)
        } else {
            Ok(Some(creds))
        }
    }

    async fn save(&self, creds: &Credentials) -> Result<(), CredentialsError> {
        if self.manager.save(creds) {
            Ok(())
        } else {
            Err(CredentialsError::SaveFailed(
                "Failed to write credentials file".to_string(),
            ))
        }
    }

    async fn clear(&self) -> Result<(), CredentialsError> {
        if self.manager.clear() {
            Ok(())
        } else {
            Err(CredentialsError::ClearFailed(
                "Failed to delete credentials file".to_string(),
            ))
        }
    }
}
