//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. All concrete implementations are instantiated here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use galaxy_core::{ApiCore, Authorizer, GatewayConfig, GroupAuthorizer, PackageStorePort};
use galaxy_db::{StoreFactory, setup_database};
use galaxy_pulp::{DefaultPulpClient, PulpClientConfig};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8002;

/// Default database file, relative to the working directory.
pub const DEFAULT_DATABASE_PATH: &str = "galaxy.db";

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// `SQLite` file holding namespaces and import records.
    pub database_path: PathBuf,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Package store connection.
    pub pulp: PulpClientConfig,
    /// Role, paging and fan-out policy.
    pub gateway: GatewayConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            cors: CorsConfig::default(),
            pulp: PulpClientConfig::default(),
            gateway: GatewayConfig::default(),
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = path.into();
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    #[must_use]
    pub fn with_pulp(mut self, pulp: PulpClientConfig) -> Self {
        self.pulp = pulp;
        self
    }

    #[must_use]
    pub fn with_gateway(mut self, gateway: GatewayConfig) -> Self {
        self.gateway = gateway;
        self
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<ApiCore>,
}

impl AxumContext {
    pub const fn new(core: Arc<ApiCore>) -> Self {
        Self { core }
    }
}

/// Open storage, build the package store client and assemble `ApiCore`.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    config
        .gateway
        .validate()
        .context("invalid gateway configuration")?;

    tracing::info!(
        target: "galaxy.bootstrap",
        database_path = %config.database_path.display(),
        pulp_url = config.pulp.base_url(),
        api_prefix = config.pulp.api_prefix(),
        timeout_secs = config.pulp.timeout().as_secs(),
        privileged_group = %config.gateway.privileged_group,
        "Axum bootstrap resolved configuration"
    );

    // 1. Local storage
    let pool = setup_database(&config.database_path).await?;
    let repos = StoreFactory::build_repos(&pool);

    // 2. Package store client
    let store: Arc<dyn PackageStorePort> = Arc::new(
        DefaultPulpClient::new(&config.pulp).context("failed to build package store client")?,
    );

    // 3. Role checks
    let authorizer: Arc<dyn Authorizer> = Arc::new(GroupAuthorizer::new(
        config.gateway.privileged_group.clone(),
    ));

    let core = Arc::new(ApiCore::new(repos, store, authorizer, &config.gateway));
    Ok(AxumContext::new(core))
}

/// Bootstrap and serve until the process is stopped.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("galaxy API listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bootstrap_creates_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("galaxy.db");
        let config = ServerConfig::default().with_database_path(&path);

        let ctx = bootstrap(&config).await.unwrap();
        assert!(path.exists());
        assert_eq!(ctx.core.paging().page_request(None, None).unwrap().limit, 10);
    }

    #[tokio::test]
    async fn test_bootstrap_rejects_invalid_gateway_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig::default()
            .with_database_path(dir.path().join("galaxy.db"))
            .with_gateway(GatewayConfig::default().with_import_fanout(0));

        assert!(bootstrap(&config).await.is_err());
    }
}
