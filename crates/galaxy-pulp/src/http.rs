//! HTTP backend abstraction for the Pulp API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest with retry logic for idempotent reads.

use crate::error::{PulpError, PulpResult};
use crate::models::{BasicCredentials, PulpConfig};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that exchange JSON with Pulp.
///
/// This is an implementation detail - external code should use the
/// `PackageStorePort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it. May be retried.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> PulpResult<T>;

    /// PUT a JSON body and deserialize the response. Never retried.
    async fn put_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        body: serde_json::Value,
    ) -> PulpResult<T>;
}

/// Map a non-success status to an error.
fn status_error(status: u16, url: &Url, body: String) -> PulpError {
    if status == 404 {
        PulpError::NotFound {
            url: url.to_string(),
        }
    } else {
        PulpError::ApiRequestFailed {
            status,
            url: url.to_string(),
            body,
        }
    }
}

/// Delay before retry `attempt` (1-based), doubling each time.
fn backoff_delay(base_ms: u64, attempt: u8) -> Duration {
    let factor = 2u64.saturating_pow(u32::from(attempt.saturating_sub(1)));
    Duration::from_millis(base_ms.saturating_mul(factor))
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// GETs are retried with exponential backoff on server errors (5xx) and
/// network errors. PUTs are sent exactly once.
pub struct ReqwestBackend {
    client: reqwest::Client,
    max_retries: u8,
    retry_base_delay_ms: u64,
    credentials: Option<BasicCredentials>,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &PulpConfig, timeout: Duration, user_agent: &str) -> PulpResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
            retry_base_delay_ms: config.retry_base_delay_ms,
            credentials: config.credentials.clone(),
        })
    }

    /// Attach credentials when configured.
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.credentials {
            Some(ref creds) => request.basic_auth(&creds.username, creds.password.as_ref()),
            None => request,
        }
    }

    fn network_error(url: &Url, e: reqwest::Error) -> PulpError {
        if e.is_timeout() {
            PulpError::Timeout {
                url: url.to_string(),
            }
        } else {
            e.into()
        }
    }

    /// Fetch a URL with automatic retry for transient errors.
    async fn fetch_with_retry(&self, url: &Url) -> PulpResult<reqwest::Response> {
        let mut last_error: Option<PulpError> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                tokio::time::sleep(backoff_delay(self.retry_base_delay_ms, attempt)).await;
                tracing::debug!(%url, attempt, "Retrying Pulp request");
            }

            match self.authorize(self.client.get(url.as_str())).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    // 5xx errors are retryable (server-side issues)
                    if status.is_server_error() && attempt < self.max_retries {
                        last_error = Some(status_error(status.as_u16(), url, String::new()));
                        continue;
                    }

                    let body = response.text().await.unwrap_or_default();
                    return Err(status_error(status.as_u16(), url, body));
                }
                Err(e) => {
                    // Network errors are retryable
                    if attempt < self.max_retries {
                        last_error = Some(Self::network_error(url, e));
                        continue;
                    }
                    return Err(Self::network_error(url, e));
                }
            }
        }

        Err(last_error.unwrap_or_else(|| PulpError::InvalidResponse {
            message: "Unknown error during fetch".to_string(),
        }))
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> PulpResult<T> {
        let response = self.fetch_with_retry(url).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Self::network_error(url, e))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn put_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        body: serde_json::Value,
    ) -> PulpResult<T> {
        let response = self
            .authorize(self.client.put(url.as_str()).json(&body))
            .send()
            .await
            .map_err(|e| Self::network_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), url, body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Self::network_error(url, e))?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
