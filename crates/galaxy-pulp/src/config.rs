//! Public configuration for the Pulp client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this.

use std::fmt;
use std::time::Duration;

/// Default Pulp API root.
pub const DEFAULT_BASE_URL: &str = "http://localhost:24817";

/// Default path prefix of the Galaxy plugin API.
pub const DEFAULT_API_PREFIX: &str = "/api/automation-hub/";

/// Configuration for the Pulp client.
///
/// # Example
///
/// ```
/// use galaxy_pulp::PulpClientConfig;
/// use std::time::Duration;
///
/// let config = PulpClientConfig::new()
///     .with_base_url("http://pulp.internal:24817")
///     .with_timeout(Duration::from_secs(10))
///     .with_basic_auth("admin", "password");
/// ```
#[derive(Clone)]
pub struct PulpClientConfig {
    /// Base URL of the Pulp server (scheme, host, port)
    pub(crate) base_url: String,
    /// Path prefix of the Galaxy plugin API, e.g. `/api/automation-hub/`
    pub(crate) api_prefix: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Optional HTTP basic credentials
    pub(crate) username: Option<String>,
    pub(crate) password: Option<String>,
    /// Maximum number of retry attempts for idempotent requests
    pub(crate) max_retries: u8,
    /// Base delay for exponential backoff
    pub(crate) retry_base_delay: Duration,
}

impl Default for PulpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            user_agent: concat!("galaxy-pulp/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            username: None,
            password: None,
            max_retries: 3,
            retry_base_delay: Duration::from_millis(500),
        }
    }
}

// Keeps the password out of logs.
impl fmt::Debug for PulpClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PulpClientConfig")
            .field("base_url", &self.base_url)
            .field("api_prefix", &self.api_prefix)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("max_retries", &self.max_retries)
            .field("retry_base_delay", &self.retry_base_delay)
            .finish()
    }
}

impl PulpClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Pulp server.
    ///
    /// Defaults to `http://localhost:24817`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the Galaxy API path prefix.
    ///
    /// Leading and trailing slashes are added when missing.
    #[must_use]
    pub fn with_api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = prefix.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Authenticate with HTTP basic credentials.
    #[must_use]
    pub fn with_basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Set optional credentials; a username without a password sends an
    /// empty password.
    #[must_use]
    pub fn with_optional_auth(mut self, username: Option<String>, password: Option<String>) -> Self {
        self.username = username;
        self.password = password;
        self
    }

    /// Set the maximum number of retry attempts for idempotent requests.
    ///
    /// Defaults to 3 retries. Certification changes are never retried.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base delay for exponential backoff retries.
    ///
    /// Defaults to 500ms.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn api_prefix(&self) -> &str {
        &self.api_prefix
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PulpClientConfig::new();
        assert_eq!(config.base_url, "http://localhost:24817");
        assert_eq!(config.api_prefix, "/api/automation-hub/");
        assert!(config.user_agent.starts_with("galaxy-pulp/"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.username.is_none());
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn test_builder_pattern() {
        let config = PulpClientConfig::new()
            .with_base_url("https://pulp.example/")
            .with_api_prefix("api/galaxy")
            .with_timeout(Duration::from_secs(5))
            .with_basic_auth("admin", "hunter2")
            .with_max_retries(0);

        assert_eq!(config.base_url(), "https://pulp.example/");
        assert_eq!(config.api_prefix(), "api/galaxy");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.username.as_deref(), Some("admin"));
        assert_eq!(config.max_retries, 0);
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = PulpClientConfig::new().with_basic_auth("admin", "hunter2");
        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("***"));
    }
}
