//! Fallback resolution command.

use crate::cli::common::{load_config, print_json, wants_json, CliError, CliResult, PieceArgs};
use crate::models::{ConfigurationType, Dimensions, Family};
use crate::services::fallback::{find_fallback_template, find_nearest};
use clap::Args;
use serde::Serialize;

/// Find the replacement for a configuration that no longer fits
#[derive(Debug, Clone, Args)]
pub struct FallbackArgs {
    /// Family and column dimensions (no plinth is subtracted)
    #[command(flatten)]
    pub piece: PieceArgs,

    /// Current configuration type (stand, TV stand, bedside)
    #[arg(short = 't', long = "type", value_name = "TYPE", conflicts_with = "template")]
    pub configuration_type: Option<ConfigurationType>,

    /// Current template id (wardrobe, rack, bookcase)
    #[arg(long, value_name = "ID")]
    pub template: Option<String>,

    /// Prefer a type with this many drawers
    #[arg(long, value_name = "N")]
    pub drawers: Option<u8>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct FallbackResponse {
    family: Family,
    dimensions: Dimensions,
    current: Option<String>,
    replacement: Option<String>,
    changed: bool,
}

impl FallbackArgs {
    /// Execute the fallback command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let family = self.piece.family(&config);
        let dims = self.piece.column(&config);

        let (current, replacement) = if family.uses_templates() {
            if self.configuration_type.is_some() {
                return Err(CliError::validation(format!(
                    "{family} uses templates; pass --template instead of --type"
                )));
            }
            let replacement =
                find_fallback_template(self.template.as_deref(), family, dims.width, dims.height);
            (self.template.clone(), replacement.map(|t| t.id.clone()))
        } else {
            if self.template.is_some() {
                return Err(CliError::validation(format!(
                    "{family} uses configuration types; pass --type instead of --template"
                )));
            }
            let start = self.configuration_type.unwrap_or(ConfigurationType::ALL[0]);
            let replacement = find_nearest(start, &dims, family, self.drawers);
            (
                self.configuration_type.map(|ty| ty.to_string()),
                replacement.map(|ty| ty.to_string()),
            )
        };

        let response = FallbackResponse {
            family,
            dimensions: dims,
            changed: current != replacement,
            current,
            replacement,
        };

        if wants_json(self.json, &config) {
            print_json(&response)?;
        } else {
            match (&response.replacement, response.changed) {
                (Some(selection), false) => println!("✓ {selection} still fits"),
                (Some(selection), true) => println!("→ {selection}"),
                (None, _) => println!("✗ Nothing fits {family} at these dimensions"),
            }
        }

        if response.replacement.is_none() {
            return Err(CliError::validation("No configuration fits"));
        }

        Ok(())
    }
}
