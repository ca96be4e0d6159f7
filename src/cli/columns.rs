//! Column layout command.

use crate::cli::common::{load_config, print_json, wants_json, CliResult, PieceArgs};
use crate::models::{ColumnKind, ColumnLayout, Family};
use crate::services::column_layout::{calculate_column_layout, valid_column_counts};
use clap::Args;
use serde::Serialize;

/// Split a piece's width into columns
#[derive(Debug, Clone, Args)]
pub struct ColumnsArgs {
    /// Piece family and dimensions
    #[command(flatten)]
    pub piece: PieceArgs,

    /// Column count before the width change (stand, TV stand, bedside)
    #[arg(long, value_name = "N")]
    pub previous: Option<usize>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ColumnsResponse {
    family: Family,
    width: f64,
    #[serde(flatten)]
    layout: ColumnLayout,
    #[serde(skip_serializing_if = "Option::is_none")]
    valid_counts: Option<Vec<usize>>,
}

impl ColumnsArgs {
    /// Execute the columns command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let family = self.piece.family(&config);
        let width = self.piece.outer(&config).width;

        let layout = calculate_column_layout(family, width, self.previous);
        let response = ColumnsResponse {
            family,
            width,
            valid_counts: (!family.uses_templates()).then(|| valid_column_counts(family, width)),
            layout,
        };

        if wants_json(self.json, &config) {
            return print_json(&response);
        }

        println!(
            "{} at {} cm: {} column(s)",
            response.family, response.width, response.layout.column_count
        );
        for (idx, ((width, position), kind)) in response
            .layout
            .column_widths_cm
            .iter()
            .zip(&response.layout.column_positions_cm)
            .zip(&response.layout.column_kinds)
            .enumerate()
        {
            let kind = match kind {
                ColumnKind::Narrow => "narrow",
                ColumnKind::Wide => "wide",
                ColumnKind::Standard => "standard",
            };
            println!("  {}: {width:.1} cm at x={position:.1} ({kind})", idx + 1);
        }
        if let Some(counts) = &response.valid_counts {
            let counts: Vec<String> = counts.iter().map(ToString::to_string).collect();
            println!("Allowed column counts: {}", counts.join(", "));
        }

        Ok(())
    }
}
