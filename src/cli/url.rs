//! URL encode/decode commands.

use crate::catalog::catalog;
use crate::cli::common::{load_config, print_json, wants_json, CliError, CliResult};
use crate::models::ColumnSelection;
use crate::parser::url::{decode_with_report, encode};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Encode or decode the shareable column string
#[derive(Debug, Clone, Args)]
pub struct UrlArgs {
    /// URL subcommand
    #[command(subcommand)]
    pub command: UrlCommand,
}

/// URL subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum UrlCommand {
    /// Encode template selections, e.g. `FULL_HANGING SHELVES_ONLY:open`
    Encode(EncodeArgs),
    /// Decode a column string, e.g. `F1S,SO:0`
    Decode(DecodeArgs),
}

/// Encode template selections
#[derive(Debug, Clone, Args)]
pub struct EncodeArgs {
    /// Template ids, left to right; append `:open` for an open door
    #[arg(value_name = "ID[:open]", required = true)]
    pub columns: Vec<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Decode a column string
#[derive(Debug, Clone, Args)]
pub struct DecodeArgs {
    /// Encoded column string
    #[arg(value_name = "STRING")]
    pub value: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct EncodeResponse {
    encoded: String,
    columns: Vec<ColumnSelection>,
}

impl UrlArgs {
    /// Execute the url command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            UrlCommand::Encode(args) => args.execute(),
            UrlCommand::Decode(args) => args.execute(),
        }
    }
}

/// Parses `ID` or `ID:open` into a selection.
fn parse_selection(token: &str) -> CliResult<ColumnSelection> {
    let (id, door) = match token.split_once(':') {
        Some((id, state)) => match state.to_ascii_lowercase().as_str() {
            "open" | "0" => (id, false),
            "closed" | "1" => (id, true),
            _ => {
                return Err(CliError::validation(format!(
                    "Invalid door state '{state}' in '{token}'. Expected: open, closed"
                )))
            }
        },
        None => (token, true),
    };

    if !catalog().contains(id) {
        return Err(CliError::validation(format!("Unknown template '{id}'")));
    }

    Ok(ColumnSelection::new(id, door))
}

impl EncodeArgs {
    /// Execute the encode command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let columns = self
            .columns
            .iter()
            .map(|token| parse_selection(token))
            .collect::<CliResult<Vec<_>>>()?;

        let response = EncodeResponse {
            encoded: encode(&columns),
            columns,
        };

        if wants_json(self.json, &config) {
            print_json(&response)
        } else {
            println!("{}", response.encoded);
            Ok(())
        }
    }
}

impl DecodeArgs {
    /// Execute the decode command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let report = decode_with_report(&self.value);

        if wants_json(self.json, &config) {
            return print_json(&report);
        }

        for (idx, column) in report.columns.iter().enumerate() {
            let door = if column.has_door { "closed" } else { "open" };
            println!("  {}: {} (door {door})", idx + 1, column.template_id);
        }
        for code in &report.unknown_codes {
            println!("⚠ Unknown code '{code}' replaced with the default template");
        }

        Ok(())
    }
}
