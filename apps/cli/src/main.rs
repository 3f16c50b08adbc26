//! `ferrum-codes`: generate and query FHIR code system enumerations
//!
//! Usage:
//!   ferrum-codes generate rust --input <bundle.json> --output <dir>
//!   ferrum-codes generate catalog --input <bundle.json> --output <catalog.json>
//!   ferrum-codes check [--catalog <catalog.json>]
//!   ferrum-codes list [<system-uri-or-name>]
//!   ferrum-codes lookup <system-uri-or-name> <code> [--binding extensible]

mod commands;
mod config;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ferrum_codegen::generators::GeneratorConfig;
use ferrum_codesystem::BindingStrength;
use std::path::PathBuf;

use config::{CatalogConfig, LoggingConfig};

#[derive(Parser, Debug)]
#[command(name = "ferrum-codes", version)]
#[command(about = "Generate and query FHIR code system enumerations")]
struct Cli {
    #[command(flatten)]
    logging: LoggingConfig,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate code from FHIR CodeSystem resources
    #[command(subcommand)]
    Generate(GenerateCommand),

    /// Validate a catalog and report its size
    Check {
        #[command(flatten)]
        catalog: CatalogConfig,
    },

    /// List code systems, or the members of one code system
    List {
        /// System URI or type name
        system: Option<String>,

        #[command(flatten)]
        catalog: CatalogConfig,
    },

    /// Resolve a code against a code system
    Lookup {
        /// System URI or type name
        system: String,

        /// Wire value to resolve
        code: String,

        /// Binding strength of the element carrying the code
        #[arg(long, default_value = "required")]
        binding: BindingStrength,

        #[command(flatten)]
        catalog: CatalogConfig,
    },
}

#[derive(Subcommand, Debug)]
enum GenerateCommand {
    /// Typed Rust enums, one module per code system
    Rust {
        /// Bundle or CodeSystem JSON file, or a directory of them
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for the generated modules
        #[arg(short, long)]
        output: PathBuf,

        /// Skip doc comments
        #[arg(long)]
        no_docs: bool,

        /// Skip serde impls
        #[arg(long)]
        no_serde: bool,

        /// Path the generated code uses for the runtime crate
        #[arg(long, default_value = "ferrum_codesystem")]
        runtime_crate: String,
    },

    /// JSON catalog loadable by the runtime registry
    Catalog {
        /// Bundle or CodeSystem JSON file, or a directory of them
        #[arg(short, long)]
        input: PathBuf,

        /// Output catalog file
        #[arg(short, long)]
        output: PathBuf,

        /// FHIR version recorded in the catalog
        #[arg(long)]
        fhir_version: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli.logging)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Generate(GenerateCommand::Rust {
            input,
            output,
            no_docs,
            no_serde,
            runtime_crate,
        }) => {
            let config = GeneratorConfig {
                generate_docs: !no_docs,
                generate_serde: !no_serde,
                runtime_crate,
            };
            commands::generate_rust(&input, &output, config, &mut out)
        }
        Command::Generate(GenerateCommand::Catalog {
            input,
            output,
            fhir_version,
        }) => commands::generate_catalog(&input, &output, fhir_version.as_deref(), &mut out),
        Command::Check { catalog } => commands::check(&catalog, &mut out),
        Command::List { system, catalog } => commands::list(&catalog, system.as_deref(), &mut out),
        Command::Lookup {
            system,
            code,
            binding,
            catalog,
        } => commands::lookup(&catalog, &system, &code, binding, &mut out),
    }
}
