//! Pulp client for collection versions and import tasks.

mod collections;
mod imports;

use crate::config::PulpClientConfig;
use crate::error::PulpResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{BasicCredentials, PulpConfig, normalize_prefix};
use std::time::Duration;
use url::Url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Pulp client using the reqwest HTTP backend.
pub type DefaultPulpClient = PulpClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the Pulp REST API.
///
/// Generic over an HTTP backend so tests can inject a fake. Use
/// `DefaultPulpClient` in production code.
pub struct PulpClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: PulpConfig,
}

impl DefaultPulpClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails if the base URL does not parse or the HTTP client cannot be
    /// built.
    pub fn new(config: &PulpClientConfig) -> PulpResult<Self> {
        let internal_config = Self::to_internal_config(config)?;
        let backend = ReqwestBackend::new(&internal_config, config.timeout, &config.user_agent)?;
        tracing::debug!(
            base_url = %internal_config.base_url,
            api_prefix = %internal_config.api_prefix,
            "Pulp client configured"
        );
        Ok(Self {
            backend,
            config: internal_config,
        })
    }

    fn to_internal_config(config: &PulpClientConfig) -> PulpResult<PulpConfig> {
        let credentials = config.username.as_ref().map(|username| BasicCredentials {
            username: username.clone(),
            password: config.password.clone(),
        });
        Ok(PulpConfig {
            base_url: Url::parse(&config.base_url)?,
            api_prefix: normalize_prefix(&config.api_prefix),
            credentials,
            max_retries: config.max_retries,
            retry_base_delay_ms: duration_millis(config.retry_base_delay),
        })
    }
}

fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl<B: HttpBackend> PulpClient<B> {
    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: PulpConfig, backend: B) -> Self {
        Self { backend, config }
    }
}
