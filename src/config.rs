//! Client configuration.
//!
//! Defaults are compiled in; environment variables override them for
//! development against a local backend.

use std::time::Duration;

/// Default URL for the titledesk API.
pub const DEFAULT_API_URL: &str = "https://api.titledesk.app/api/v1";

/// Default interval between report status polls.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// Runtime configuration for the client.
///
/// # Example
///
/// ```ignore
/// use titledesk::config::Config;
///
/// let config = Config::from_env().with_base_url("http://localhost:8000/api/v1");
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL the API client resolves relative paths against
    pub base_url: String,
    /// Interval between report status polls
    pub poll_interval: Duration,
    /// Log file path (logging disabled when None)
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            log_file: None,
        }
    }
}

impl Config {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the poll interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Build config from environment variables.
    ///
    /// - `TITLEDESK_API_URL` overrides the base URL
    /// - `TITLEDESK_POLL_SECS` overrides the poll interval
    /// - `TITLEDESK_LOG` enables file logging to the given path
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("TITLEDESK_API_URL") {
            if !url.is_empty() {
                config.base_url = url;
            }
        }

        if let Ok(secs) = std::env::var("TITLEDESK_POLL_SECS") {
            if let Ok(secs) = secs.parse::<u64>() {
                if secs > 0 {
                    config.poll_interval = Duration::from_secs(secs);
                }
            }
        }

        if let Ok(path) = std::env::var("TITLEDESK_LOG") {
            if !path.is_empty() {
                config.log_file = Some(path);
            }
        }

        config
    }
}
