//! Zone resolution command.

use crate::catalog::catalog;
use crate::cli::common::{load_config, print_json, wants_json, CliError, CliResult};
use crate::models::ZoneKind;
use crate::services::zones::{resolve_zones, ZoneStack};
use clap::Args;
use serde::Serialize;

/// Resolve a template's zones against a column height
#[derive(Debug, Clone, Args)]
pub struct ZonesArgs {
    /// Template id (see `templates`)
    #[arg(short, long, value_name = "ID")]
    pub template: String,

    /// Available column height in cm (defaults to the configured height minus plinth)
    #[arg(long, value_name = "CM", allow_negative_numbers = true)]
    pub height: Option<i32>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ZonesResponse<'a> {
    template_id: &'a str,
    available_height_cm: i32,
    degraded: bool,
    #[serde(flatten)]
    stack: ZoneStack,
}

impl ZonesArgs {
    /// Execute the zones command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let template = catalog().get(&self.template).ok_or_else(|| {
            CliError::validation(format!(
                "Unknown template '{}'. Run 'templates' to list them",
                self.template
            ))
        })?;

        let height = self
            .height
            .unwrap_or_else(|| config.defaults.dimensions().column_height());
        let stack = resolve_zones(template, height);

        let response = ZonesResponse {
            template_id: &template.id,
            available_height_cm: height,
            degraded: stack.is_degraded(),
            stack,
        };

        if wants_json(self.json, &config) {
            return print_json(&response);
        }

        println!("{} ({}) at {height} cm, top to bottom:", template.name, template.id);
        for (idx, zone) in response.stack.zones.iter().enumerate().rev() {
            let door = if response.stack.door_zone_indices.contains(&idx) {
                " [door]"
            } else {
                ""
            };
            let detail = match zone.kind {
                ZoneKind::Shelves => format!(
                    ", {} shelves, {:.1} cm apart",
                    zone.shelf_count.unwrap_or(0),
                    zone.shelf_spacing_cm.unwrap_or(0.0)
                ),
                ZoneKind::Drawers => {
                    let fronts: Vec<String> = zone
                        .drawer_heights_cm
                        .iter()
                        .flatten()
                        .map(|h| format!("{h:.1}"))
                        .collect();
                    format!(", drawers [{}] cm", fronts.join(", "))
                }
                ZoneKind::Hanging | ZoneKind::Empty => String::new(),
            };
            println!("  {:<8} {:>4} cm{detail}{door}", zone.kind.to_string(), zone.height_cm);
        }

        if response.degraded {
            println!(
                "⚠ Door zones are {} cm short of their minimum height",
                response.stack.unmet_door_deficit_cm
            );
        }

        Ok(())
    }
}
