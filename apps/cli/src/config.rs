//! Command-line configuration with environment fallbacks

use clap::Args;
use std::path::PathBuf;

/// Logging options shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for ferrum crates (`RUST_LOG` takes precedence)
    #[arg(long = "log-level", env = "FERRUM_LOG_LEVEL", default_value = "warn", global = true)]
    pub level: String,

    /// Emit logs as JSON lines
    #[arg(long = "log-json", env = "FERRUM_LOG_JSON", global = true)]
    pub json: bool,
}

/// Where to read the code system catalog from
#[derive(Args, Debug, Clone)]
pub struct CatalogConfig {
    /// Catalog JSON file (defaults to the embedded FHIR R4 catalog)
    #[arg(long, env = "FERRUM_CATALOG")]
    pub catalog: Option<PathBuf>,
}
