//! Paging bridge between the client page contract and the upstream
//! offset/limit protocol.
//!
//! The bridge never reorders or re-slices results: upstream decides both.

use crate::config::GatewayConfig;
use crate::domain::{Page, PageRequest};
use crate::ports::{CoreError, UpstreamPage, UpstreamQuery, params};

/// Resolves client page requests and wraps upstream pages.
#[derive(Debug, Clone, Copy)]
pub struct PagingBridge {
    default_limit: u64,
    max_limit: u64,
}

impl PagingBridge {
    pub const fn new(default_limit: u64, max_limit: u64) -> Self {
        Self {
            default_limit,
            max_limit,
        }
    }

    pub const fn from_config(config: &GatewayConfig) -> Self {
        Self::new(config.default_page_limit, config.max_page_limit)
    }

    /// Resolve raw `offset` / `limit` values into a page request.
    ///
    /// A missing limit uses the default and an oversized one is clamped.
    pub fn page_request(
        &self,
        offset: Option<&str>,
        limit: Option<&str>,
    ) -> Result<PageRequest, CoreError> {
        let offset = match offset {
            Some(raw) => parse_non_negative(params::OFFSET, raw)?,
            None => 0,
        };
        let limit = match limit {
            Some(raw) => {
                let value = parse_non_negative(params::LIMIT, raw)?;
                if value == 0 {
                    return Err(CoreError::Validation(
                        "limit must be at least 1".to_string(),
                    ));
                }
                value.min(self.max_limit)
            }
            None => self.default_limit,
        };
        Ok(PageRequest { offset, limit })
    }

    /// Upstream offset/limit for a client page (identity mapping).
    pub fn build_query(&self, page: PageRequest) -> UpstreamQuery {
        UpstreamQuery::new()
            .with(params::OFFSET, page.offset.to_string())
            .with(params::LIMIT, page.limit.to_string())
    }

    /// Wrap an upstream page for the client, keeping upstream order.
    pub fn wrap_response<T>(&self, upstream: UpstreamPage<T>) -> Page<T> {
        Page::new(upstream.results, upstream.count)
    }
}

impl Default for PagingBridge {
    fn default() -> Self {
        Self::from_config(&GatewayConfig::default())
    }
}

fn parse_non_negative(key: &str, raw: &str) -> Result<u64, CoreError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| CoreError::Validation(format!("{key} must be a non-negative integer, got '{raw}'")))
}
