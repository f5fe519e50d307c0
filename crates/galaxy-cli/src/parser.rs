//! Root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Certification-aware query gateway over a Pulp collection store.
#[derive(Parser)]
#[command(name = "galaxy-api")]
#[command(about = "Serve the Galaxy UI API over a Pulp package store")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is not set.
    pub const fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "debug,hyper=info,sqlx=warn"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::parse_from(["galaxy-api", "serve", "--verbose"]);
        assert!(cli.verbose);
        assert!(cli.default_log_filter().starts_with("debug"));
        assert!(matches!(cli.command, Commands::Serve(_)));
    }
}
