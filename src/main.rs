//! Shelfwright - parametric layout engine for configurable furniture
//!
//! This binary exposes the layout engines as scriptable commands: column
//! splits, zone resolution, validation, fallback, pricing and the shareable
//! column string.

use clap::{Parser, Subcommand};
use shelfwright::cli::{
    CliResult, ColumnsArgs, ConfigArgs, DesignArgs, FallbackArgs, PriceArgs, TemplatesArgs,
    UrlArgs, ValidateArgs, ZonesArgs,
};
use shelfwright::constants::{APP_BINARY_NAME, APP_NAME};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Shelfwright - parametric layout engine for cabinets, wardrobes and racks
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Split a width into columns
    Columns(ColumnsArgs),
    /// Resolve a template's zones for a column height
    Zones(ZonesArgs),
    /// Check a configuration type against a column's dimensions
    Validate(ValidateArgs),
    /// Find the replacement for a configuration that no longer fits
    Fallback(FallbackArgs),
    /// Compute a price
    Price(PriceArgs),
    /// Encode or decode the shareable column string
    Url(UrlArgs),
    /// List the built-in zone templates
    Templates(TemplatesArgs),
    /// Run the full design pipeline
    Design(DesignArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Commands {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Columns(args) => args.execute(),
            Self::Zones(args) => args.execute(),
            Self::Validate(args) => args.execute(),
            Self::Fallback(args) => args.execute(),
            Self::Price(args) => args.execute(),
            Self::Url(args) => args.execute(),
            Self::Templates(args) => args.execute(),
            Self::Design(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code.code());
    }
}
