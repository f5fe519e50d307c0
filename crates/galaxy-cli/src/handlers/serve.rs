//! Serve command handler.

use anyhow::Result;

use crate::commands::ServeArgs;

/// Run the HTTP API until the process is stopped.
pub async fn execute(args: &ServeArgs) -> Result<()> {
    let config = args.to_server_config();
    tracing::info!(port = config.port, "Starting galaxy API");
    galaxy_axum::start_server(config).await
}
