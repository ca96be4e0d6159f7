//! Built-in zone template catalog.
//!
//! The catalog is embedded in the binary at compile time and parsed once on
//! first access. Catalog order is significant: template fallback picks the
//! first fitting template of a family.

use crate::models::{Family, Template};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Catalog file schema.
#[derive(Debug, Deserialize)]
struct TemplateFile {
    version: String,
    templates: Vec<Template>,
}

/// Zone templates with lookup by id.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    version: String,
    templates: Vec<Template>,
    lookup: HashMap<String, usize>,
}

impl TemplateCatalog {
    /// Parses the embedded `templates.json`.
    pub fn load() -> Result<Self> {
        Self::from_json(include_str!("templates.json"))
            .context("Failed to parse embedded templates.json")
    }

    /// Parses a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: TemplateFile = serde_json::from_str(json)?;
        Ok(Self {
            version: file.version,
            ..Self::from_templates(file.templates)
        })
    }

    /// Builds an unversioned catalog from templates in the given order.
    #[must_use]
    pub fn from_templates(templates: Vec<Template>) -> Self {
        let lookup = templates
            .iter()
            .enumerate()
            .map(|(idx, template)| (template.id.clone(), idx))
            .collect();

        Self {
            version: String::new(),
            templates,
            lookup,
        }
    }

    /// Catalog file version; empty when built in code.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Gets a template by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Template> {
        self.lookup.get(id).map(|&idx| &self.templates[idx])
    }

    /// Returns true if a template with this id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.lookup.contains_key(id)
    }

    /// All templates in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Template] {
        &self.templates
    }

    /// Templates offered for a family, in catalog order.
    pub fn for_family(&self, family: Family) -> impl Iterator<Item = &Template> {
        self.templates
            .iter()
            .filter(move |template| template.applies_to(family))
    }

    /// Number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns true if the catalog holds no templates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Returns the shared built-in catalog.
///
/// A catalog that fails to parse is logged and replaced by an empty one, so
/// lookups degrade to "unknown template" instead of aborting.
pub fn catalog() -> &'static TemplateCatalog {
    static CATALOG: OnceLock<TemplateCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        TemplateCatalog::load().unwrap_or_else(|e| {
            tracing::error!("{e:#}");
            TemplateCatalog::default()
        })
    })
}

/// Sums the extra cost of the given template ids; unknown ids cost nothing.
#[must_use]
pub fn template_extra_cost<'a>(ids: impl IntoIterator<Item = &'a str>) -> f64 {
    let catalog = catalog();
    ids.into_iter()
        .filter_map(|id| catalog.get(id))
        .map(|template| template.extra_cost)
        .sum()
}
