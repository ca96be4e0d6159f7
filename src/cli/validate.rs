//! Configuration-type validation command.

use crate::cli::common::{load_config, print_json, wants_json, CliError, CliResult, PieceArgs};
use crate::models::{ConfigurationType, Dimensions, Family};
use crate::services::validator::{check, valid_types};
use clap::Args;
use serde::Serialize;

/// Check whether a configuration type is allowed for a column
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Family and column dimensions (no plinth is subtracted)
    #[command(flatten)]
    pub piece: PieceArgs,

    /// Configuration type, e.g. TWO_DRAWERS; omit to list every valid type
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub configuration_type: Option<ConfigurationType>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ValidateResponse {
    family: Family,
    dimensions: Dimensions,
    #[serde(skip_serializing_if = "Option::is_none")]
    configuration_type: Option<ConfigurationType>,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    violation: Option<String>,
    valid_types: Vec<ConfigurationType>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let family = self.piece.family(&config);
        let dims = self.piece.column(&config);

        let result = self
            .configuration_type
            .map(|ty| check(ty, family, &dims));
        let valid_types = valid_types(family, &dims);

        let response = ValidateResponse {
            family,
            dimensions: dims,
            configuration_type: self.configuration_type,
            valid: result.as_ref().is_none_or(Result::is_ok),
            violation: result.and_then(Result::err).map(|v| v.to_string()),
            valid_types,
        };

        if wants_json(self.json, &config) {
            print_json(&response)?;
        } else {
            print_human(&response);
        }

        if !response.valid {
            return Err(CliError::validation("Configuration is not allowed"));
        }

        Ok(())
    }
}

fn print_human(response: &ValidateResponse) {
    let dims = &response.dimensions;
    println!(
        "{} column {} x {} x {} cm",
        response.family, dims.width, dims.height, dims.depth
    );

    if let Some(ty) = response.configuration_type {
        if response.valid {
            println!("✓ {ty} is allowed");
        } else {
            println!("✗ {ty} is not allowed");
            if let Some(violation) = &response.violation {
                println!("  {violation}");
            }
        }
    }

    if response.valid_types.is_empty() {
        println!("No configuration type is allowed");
    } else {
        println!("Allowed types:");
        for ty in &response.valid_types {
            println!("  {ty}");
        }
    }
}
