//! Template catalog listing.

use crate::catalog::catalog;
use crate::cli::common::{load_config, parse_family, print_json, wants_json, CliResult};
use crate::models::{Family, Template};
use crate::parser::url::code_for;
use clap::Args;
use serde::Serialize;

/// List the built-in zone templates
#[derive(Debug, Clone, Args)]
pub struct TemplatesArgs {
    /// Only list templates offered for this family
    #[arg(short, long, value_name = "FAMILY", value_parser = parse_family)]
    pub family: Option<Family>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct TemplateItem<'a> {
    id: &'a str,
    name: &'a str,
    code: Option<&'static str>,
    families: &'a [Family],
    zones: usize,
    has_doors: bool,
    min_width: f64,
    max_width: Option<f64>,
    min_height: f64,
    max_height: Option<f64>,
    extra_cost: f64,
}

impl<'a> From<&'a Template> for TemplateItem<'a> {
    fn from(template: &'a Template) -> Self {
        Self {
            id: &template.id,
            name: &template.name,
            code: code_for(&template.id),
            families: &template.families,
            zones: template.zones.len(),
            has_doors: template.has_doors(),
            min_width: template.min_width,
            max_width: template.max_width,
            min_height: template.min_height,
            max_height: template.max_height,
            extra_cost: template.extra_cost,
        }
    }
}

#[derive(Debug, Serialize)]
struct TemplatesResponse<'a> {
    catalog_version: &'a str,
    templates: Vec<TemplateItem<'a>>,
    count: usize,
}

impl TemplatesArgs {
    /// Execute the templates command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let catalog = catalog();
        let templates: Vec<TemplateItem> = catalog
            .all()
            .iter()
            .filter(|t| self.family.is_none_or(|family| t.applies_to(family)))
            .map(TemplateItem::from)
            .collect();

        let response = TemplatesResponse {
            catalog_version: catalog.version(),
            count: templates.len(),
            templates,
        };

        if wants_json(self.json, &config) {
            return print_json(&response);
        }

        for item in &response.templates {
            let width = match item.max_width {
                Some(max) => format!("{}-{max}", item.min_width),
                None => format!("{}+", item.min_width),
            };
            println!(
                "{:<24} {:<4} width {:<9} height {}+ cm, +{}",
                item.id,
                item.code.unwrap_or("-"),
                width,
                item.min_height,
                item.extra_cost
            );
        }
        println!(
            "{} template(s), catalog version {}",
            response.count, response.catalog_version
        );

        Ok(())
    }
}
