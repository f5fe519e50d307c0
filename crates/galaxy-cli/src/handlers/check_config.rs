//! Check-config command handler.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use galaxy_axum::{CorsConfig, ServerConfig};

use crate::commands::ServeArgs;

/// Validate the configuration and print it. Credentials are redacted.
pub fn execute(args: &ServeArgs) -> Result<()> {
    let config = args.to_server_config();
    config
        .gateway
        .validate()
        .context("invalid gateway configuration")?;
    print!("{}", render(&config));
    Ok(())
}

fn render(config: &ServerConfig) -> String {
    let mut out = String::new();
    let cors = match &config.cors {
        CorsConfig::AllowAll => "any origin".to_string(),
        CorsConfig::AllowOrigins(origins) => origins.join(", "),
    };

    // Writing to a String cannot fail
    let _ = writeln!(out, "port:             {}", config.port);
    let _ = writeln!(out, "database:         {}", config.database_path.display());
    let _ = writeln!(out, "cors:             {cors}");
    let _ = writeln!(out, "pulp:             {:?}", config.pulp);
    let _ = writeln!(out, "privileged group: {}", config.gateway.privileged_group);
    let _ = writeln!(
        out,
        "page limit:       {} (max {})",
        config.gateway.default_page_limit, config.gateway.max_page_limit
    );
    let _ = writeln!(out, "import fan-out:   {}", config.gateway.import_fanout);
    out
}
