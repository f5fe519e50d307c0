//! Subcommands and their shared server options.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Subcommand};
use galaxy_axum::bootstrap::{DEFAULT_DATABASE_PATH, DEFAULT_PORT};
use galaxy_axum::{CorsConfig, ServerConfig};
use galaxy_core::GatewayConfig;
use galaxy_core::config::{
    DEFAULT_IMPORT_FANOUT, DEFAULT_MAX_PAGE_LIMIT, DEFAULT_PAGE_LIMIT, DEFAULT_PRIVILEGED_GROUP,
};
use galaxy_pulp::{DEFAULT_API_PREFIX, DEFAULT_BASE_URL, PulpClientConfig};

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(ServeArgs),

    /// Print the resolved configuration and exit
    CheckConfig(ServeArgs),
}

/// Options shared by `serve` and `check-config`.
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, env = "GALAXY_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// SQLite database holding namespaces and import records
    #[arg(long, env = "GALAXY_DATABASE", default_value = DEFAULT_DATABASE_PATH)]
    pub database: PathBuf,

    /// Base URL of the Pulp server
    #[arg(long, env = "GALAXY_PULP_URL", default_value = DEFAULT_BASE_URL)]
    pub pulp_url: String,

    /// Path prefix of the Galaxy plugin API
    #[arg(long, env = "GALAXY_API_PREFIX", default_value = DEFAULT_API_PREFIX)]
    pub api_prefix: String,

    /// Username for Pulp basic auth
    #[arg(long, env = "GALAXY_PULP_USERNAME")]
    pub pulp_username: Option<String>,

    /// Password for Pulp basic auth
    #[arg(long, env = "GALAXY_PULP_PASSWORD", hide_env_values = true)]
    pub pulp_password: Option<String>,

    /// Timeout for each Pulp request, in seconds
    #[arg(long, env = "GALAXY_PULP_TIMEOUT", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Group whose members are partner engineers
    #[arg(long, env = "GALAXY_PRIVILEGED_GROUP", default_value = DEFAULT_PRIVILEGED_GROUP)]
    pub privileged_group: String,

    /// Page size when a request sends no limit
    #[arg(long, env = "GALAXY_PAGE_LIMIT", default_value_t = DEFAULT_PAGE_LIMIT)]
    pub page_limit: u64,

    /// Largest page size a request may ask for
    #[arg(long, env = "GALAXY_MAX_PAGE_LIMIT", default_value_t = DEFAULT_MAX_PAGE_LIMIT)]
    pub max_page_limit: u64,

    /// Concurrent task lookups when listing imports
    #[arg(long, env = "GALAXY_IMPORT_FANOUT", default_value_t = DEFAULT_IMPORT_FANOUT)]
    pub import_fanout: usize,

    /// Allowed CORS origins; all origins are allowed when none are given
    #[arg(long = "allowed-origin", env = "GALAXY_CORS_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Vec<String>,
}

impl ServeArgs {
    /// Build the server configuration these options describe.
    pub fn to_server_config(&self) -> ServerConfig {
        let pulp = PulpClientConfig::new()
            .with_base_url(self.pulp_url.clone())
            .with_api_prefix(self.api_prefix.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_optional_auth(self.pulp_username.clone(), self.pulp_password.clone());

        let gateway = GatewayConfig::default()
            .with_privileged_group(self.privileged_group.clone())
            .with_page_limits(self.page_limit, self.max_page_limit)
            .with_import_fanout(self.import_fanout);

        let config = ServerConfig::default()
            .with_port(self.port)
            .with_database_path(self.database.clone())
            .with_pulp(pulp)
            .with_gateway(gateway);

        if self.allowed_origins.is_empty() {
            ServerConfig {
                cors: CorsConfig::AllowAll,
                ..config
            }
        } else {
            config.with_allowed_origins(self.allowed_origins.clone())
        }
    }
}
