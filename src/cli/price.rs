//! Price command.

use crate::catalog::{catalog, template_extra_cost};
use crate::cli::common::{load_config, print_json, wants_json, CliError, CliResult, PieceArgs};
use crate::models::{Family, OuterDimensions};
use crate::services::column_layout::calculate_column_layout;
use crate::services::pricing::price;
use clap::Args;
use serde::Serialize;

/// Compute the price of a piece
#[derive(Debug, Clone, Args)]
pub struct PriceArgs {
    /// Piece family and outer dimensions
    #[command(flatten)]
    pub piece: PieceArgs,

    /// Column count (defaults to the family's column layout)
    #[arg(long, value_name = "N")]
    pub columns: Option<usize>,

    /// Template id per column, for template surcharges (repeatable)
    #[arg(long = "template", value_name = "ID")]
    pub templates: Vec<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct PriceResponse {
    family: Family,
    dimensions: OuterDimensions,
    columns: usize,
    extra_cost: f64,
    price: i64,
}

impl PriceArgs {
    /// Execute the price command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let family = self.piece.family(&config);
        let outer = self.piece.outer(&config);

        if let Some(unknown) = self.templates.iter().find(|id| !catalog().contains(id)) {
            return Err(CliError::validation(format!("Unknown template '{unknown}'")));
        }

        let columns = self
            .columns
            .unwrap_or_else(|| calculate_column_layout(family, outer.width, None).column_count);
        let extra_cost = template_extra_cost(self.templates.iter().map(String::as_str));

        let response = PriceResponse {
            family,
            dimensions: outer,
            columns,
            extra_cost,
            price: price(outer.width, outer.height, outer.depth, columns, extra_cost, family),
        };

        if wants_json(self.json, &config) {
            return print_json(&response);
        }

        println!(
            "{} {} x {} x {} cm, {} column(s): {}",
            family, outer.width, outer.height, outer.depth, columns, response.price
        );
        if extra_cost > 0.0 {
            println!("  includes {extra_cost} in template surcharges before markup");
        }

        Ok(())
    }
}
