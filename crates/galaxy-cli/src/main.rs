//! CLI entry point - the composition root.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use galaxy_cli::{Cli, Commands, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before parsing so env fallbacks see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Serve(args) => handlers::serve::execute(&args).await?,
        Commands::CheckConfig(args) => handlers::check_config::execute(&args)?,
    }

    Ok(())
}
