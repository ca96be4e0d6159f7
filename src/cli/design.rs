//! Full design pipeline command.

use crate::cli::common::{load_config, print_json, wants_json, CliError, CliResult, PieceArgs};
use crate::models::{ColumnKind, Design};
use crate::parser::{decode_with_report, load_design, save_design};
use crate::services::design::{compute, compute_from_url, DesignOutcome};
use clap::Args;
use std::path::PathBuf;

/// Run the full pipeline: columns, zones, price and URL
#[derive(Debug, Clone, Args)]
pub struct DesignArgs {
    /// Design file (JSON) to compute
    #[arg(long, value_name = "FILE", conflicts_with = "url")]
    pub file: Option<PathBuf>,

    /// Piece family and outer dimensions (ignored with --file)
    #[command(flatten)]
    pub piece: PieceArgs,

    /// Column string to seed a template design, e.g. `F1S,SO:0`
    #[arg(long, value_name = "STRING")]
    pub url: Option<String>,

    /// Write the synchronized design to this file
    #[arg(long, value_name = "FILE")]
    pub save: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl DesignArgs {
    /// Execute the design command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        let outcome = if let Some(path) = &self.file {
            let design = load_design(path).map_err(|e| CliError::io(format!("{e:#}")))?;
            compute(&design)
        } else {
            let design = Design::new(self.piece.family(&config), self.piece.outer(&config));
            design
                .validate()
                .map_err(|e| CliError::validation(format!("{e:#}")))?;

            match &self.url {
                Some(encoded) => {
                    if !design.family.uses_templates() {
                        return Err(CliError::validation(format!(
                            "{} does not use templates; --url needs a wardrobe, rack or bookcase",
                            design.family
                        )));
                    }
                    for code in decode_with_report(encoded).unknown_codes {
                        eprintln!("⚠ Unknown code '{code}' replaced with the default template");
                    }
                    compute_from_url(design.family, design.dimensions, encoded)
                }
                None => compute(&design),
            }
        };

        if let Some(path) = &self.save {
            let mut design = Design::new(outcome.family, outcome.dimensions);
            design.columns.clone_from(&outcome.columns);
            save_design(&design, path).map_err(|e| CliError::io(format!("{e:#}")))?;
        }

        if wants_json(self.json, &config) {
            print_json(&outcome)?;
        } else {
            print_human(&outcome);
        }

        if let Some(path) = &self.save {
            eprintln!("✓ Saved design to {}", path.display());
        }

        Ok(())
    }
}

fn print_human(outcome: &DesignOutcome) {
    let dims = &outcome.dimensions;
    println!(
        "{} {} x {} x {} cm (plinth {} cm), column height {} cm",
        outcome.family,
        dims.width,
        dims.height,
        dims.depth,
        dims.plinth_height,
        outcome.column_height_cm
    );

    for (idx, column) in outcome.columns.iter().enumerate() {
        let width = outcome
            .layout
            .column_widths_cm
            .get(idx)
            .copied()
            .unwrap_or_default();
        let kind = match outcome.layout.column_kinds.get(idx) {
            Some(ColumnKind::Narrow) => " narrow",
            _ => "",
        };
        let selection = column
            .template_id
            .clone()
            .or_else(|| column.configuration_type.map(|ty| ty.to_string()))
            .unwrap_or_else(|| "-".to_string());
        let side = column
            .door_opening_side
            .map(|side| format!(", opens {side}"))
            .unwrap_or_default();
        let hinges = outcome
            .hinge_counts
            .get(idx)
            .copied()
            .flatten()
            .map(|n| format!(", {n} hinges"))
            .unwrap_or_default();
        let marker = if outcome.degraded_columns.contains(&idx) {
            "⚠"
        } else {
            "✓"
        };
        println!("{marker} {}: {selection} ({width} cm{kind}{side}{hinges})", idx + 1);

        let zones: Vec<String> = column
            .zones
            .iter()
            .map(|zone| format!("{} {}", zone.kind, zone.height_cm))
            .collect();
        if !zones.is_empty() {
            println!("    {}", zones.join(" / "));
        }
    }

    println!("Price: {}", outcome.price);
    if let Some(url) = &outcome.url {
        println!("URL: {url}");
    }
}
