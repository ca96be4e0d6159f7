//! Shared CLI types: errors, exit codes, dimension flags and JSON output.

use crate::config::Config;
use crate::models::{Dimensions, Family, OuterDimensions};
use clap::Args;
use serde::Serialize;
use std::fmt;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Invalid input or a negative validation result
    ValidationError = 1,
    /// File, parse or serialization failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by a command, carrying the exit code to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Message printed to stderr
    pub message: String,
    /// Exit code of the process
    pub exit_code: ExitCode,
}

impl CliError {
    /// Invalid input or a failed check (exit 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::ValidationError,
        }
    }

    /// File or serialization failure (exit 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of every command.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the user configuration, mapping failures to an I/O error.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Returns true if JSON output was requested by flag or by configuration.
#[must_use]
pub const fn wants_json(flag: bool, config: &Config) -> bool {
    flag || config.output.json
}

/// Parses a family name for clap.
pub fn parse_family(value: &str) -> Result<Family, String> {
    value.parse()
}

/// Piece flags shared by the geometry commands. Omitted flags fall back to
/// `[defaults]` in the configuration.
#[derive(Debug, Clone, Args, Default)]
pub struct PieceArgs {
    /// Product family (stand, tv_stand, bedside, wardrobe, rack, bookcase)
    #[arg(short, long, value_name = "FAMILY", value_parser = parse_family)]
    pub family: Option<Family>,

    /// Width in cm
    #[arg(short, long, value_name = "CM", allow_negative_numbers = true)]
    pub width: Option<f64>,

    /// Height in cm
    #[arg(long, value_name = "CM", allow_negative_numbers = true)]
    pub height: Option<f64>,

    /// Depth in cm
    #[arg(short, long, value_name = "CM", allow_negative_numbers = true)]
    pub depth: Option<f64>,

    /// Plinth height in cm
    #[arg(long, value_name = "CM")]
    pub plinth: Option<f64>,
}

impl PieceArgs {
    /// Family from the flag or the configuration.
    #[must_use]
    pub fn family(&self, config: &Config) -> Family {
        self.family.unwrap_or(config.defaults.family)
    }

    /// Outer dimensions from the flags or the configuration.
    #[must_use]
    pub fn outer(&self, config: &Config) -> OuterDimensions {
        let defaults = config.defaults.dimensions();
        OuterDimensions {
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            depth: self.depth.unwrap_or(defaults.depth),
            plinth_height: self.plinth.unwrap_or(defaults.plinth_height),
        }
    }

    /// Column dimensions: the flags taken as one column, no plinth applied.
    #[must_use]
    pub fn column(&self, config: &Config) -> Dimensions {
        let outer = self.outer(config);
        Dimensions::new(outer.width, outer.height, outer.depth)
    }
}
