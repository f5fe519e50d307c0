//! Gateway configuration.
//!
//! Pure configuration values for the query services. Transport settings
//! (base URL, timeout, credentials) live with the package store adapter.

use serde::{Deserialize, Serialize};

use crate::ports::CoreError;

/// Group whose members hold the privileged (partner-engineer) role.
pub const DEFAULT_PRIVILEGED_GROUP: &str = "system:partner-engineers";

/// Page size used when the client sends no `limit`.
pub const DEFAULT_PAGE_LIMIT: u64 = 10;

/// Largest page size a client may request; larger values are clamped.
pub const DEFAULT_MAX_PAGE_LIMIT: u64 = 100;

/// Concurrent remote fetches per import list page.
pub const DEFAULT_IMPORT_FANOUT: usize = 8;

/// Configuration for the collection and import services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Group name that grants the privileged role.
    pub privileged_group: String,
    /// Default page size.
    pub default_page_limit: u64,
    /// Maximum page size.
    pub max_page_limit: u64,
    /// Bounded concurrency for import state fetches.
    pub import_fanout: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            privileged_group: DEFAULT_PRIVILEGED_GROUP.to_string(),
            default_page_limit: DEFAULT_PAGE_LIMIT,
            max_page_limit: DEFAULT_MAX_PAGE_LIMIT,
            import_fanout: DEFAULT_IMPORT_FANOUT,
        }
    }
}

impl GatewayConfig {
    #[must_use]
    pub fn with_privileged_group(mut self, group: impl Into<String>) -> Self {
        self.privileged_group = group.into();
        self
    }

    #[must_use]
    pub const fn with_page_limits(mut self, default: u64, max: u64) -> Self {
        self.default_page_limit = default;
        self.max_page_limit = max;
        self
    }

    #[must_use]
    pub const fn with_import_fanout(mut self, fanout: usize) -> Self {
        self.import_fanout = fanout;
        self
    }

    /// Check that the values are usable.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.privileged_group.trim().is_empty() {
            return Err(CoreError::Configuration(
                "privileged group cannot be empty".to_string(),
            ));
        }
        if self.default_page_limit == 0 {
            return Err(CoreError::Configuration(
                "default page limit must be at least 1".to_string(),
            ));
        }
        if self.max_page_limit < self.default_page_limit {
            return Err(CoreError::Configuration(format!(
                "max page limit ({}) is below the default page limit ({})",
                self.max_page_limit, self.default_page_limit
            )));
        }
        if self.import_fanout == 0 {
            return Err(CoreError::Configuration(
                "import fan-out must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GatewayConfig::default();
        assert_eq!(config.privileged_group, "system:partner-engineers");
        assert_eq!(config.default_page_limit, 10);
        assert_eq!(config.max_page_limit, 100);
        assert_eq!(config.import_fanout, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_group() {
        let config = GatewayConfig::default().with_privileged_group("  ");
        assert!(matches!(
            config.validate(),
            Err(CoreError::Configuration(_))
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_limits() {
        let config = GatewayConfig::default().with_page_limits(50, 20);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_fanout() {
        let config = GatewayConfig::default().with_import_fanout(0);
        assert!(config.validate().is_err());
    }
}
