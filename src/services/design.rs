//! The full edit pipeline: dimensions to layout, zones, price and URL.

use crate::catalog::{catalog, template_extra_cost};
use crate::models::{ColumnConfiguration, ColumnLayout, Design, Family, OuterDimensions};
use crate::parser::url;
use crate::services::column_layout::calculate_column_layout;
use crate::services::pricing::price;
use crate::services::sync::{reflow_zones, synchronize};
use crate::services::zones::resolve_zones;
use serde::Serialize;

/// Everything the renderer and price display need for one design.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignOutcome {
    /// Product family
    pub family: Family,
    /// Outer dimensions the outcome was computed for
    pub dimensions: OuterDimensions,
    /// Column split
    pub layout: ColumnLayout,
    /// Interior height of every column
    pub column_height_cm: i32,
    /// Synchronized columns with resolved zones
    pub columns: Vec<ColumnConfiguration>,
    /// Hinges per column for configuration-type columns with doors
    pub hinge_counts: Vec<Option<u8>>,
    /// Columns whose door zones are below their minimum height
    pub degraded_columns: Vec<usize>,
    /// Sum of template extra costs
    pub extra_cost: f64,
    /// Displayed price
    pub price: i64,
    /// Shareable column string (template families only)
    pub url: Option<String>,
}

/// Runs the pipeline for a design.
///
/// 1. column layout (previous column count kept where the family allows)
/// 2. column synchronization against the layout
/// 3. zone resolution for every template column
/// 4. price and URL
#[must_use]
pub fn compute(design: &Design) -> DesignOutcome {
    let family = design.family;
    let dims = design.dimensions;
    let previous_count = (!design.columns.is_empty()).then_some(design.columns.len());

    let layout = calculate_column_layout(family, dims.width, previous_count);
    let column_height = dims.column_height();

    let synced = synchronize(&design.columns, family, &layout, column_height, dims.depth)
        .into_columns(&design.columns);
    let columns = reflow_zones(&synced, column_height);

    let degraded_columns = columns
        .iter()
        .enumerate()
        .filter_map(|(idx, column)| {
            let template = catalog().get(column.template_id.as_deref()?)?;
            resolve_zones(template, column_height)
                .is_degraded()
                .then_some(idx)
        })
        .collect();

    let hinge_counts = columns
        .iter()
        .map(|column| {
            column
                .configuration_type
                .and_then(|ty| ty.hinges_for_height(f64::from(column_height)))
        })
        .collect();

    let extra_cost = template_extra_cost(columns.iter().filter_map(|c| c.template_id.as_deref()));
    let price = price(
        dims.width,
        dims.height,
        dims.depth,
        layout.column_count,
        extra_cost,
        family,
    );

    let url = family.uses_templates().then(|| {
        let selections: Vec<_> = columns
            .iter()
            .filter_map(ColumnConfiguration::selection)
            .collect();
        url::encode(&selections)
    });

    DesignOutcome {
        family,
        dimensions: dims,
        layout,
        column_height_cm: column_height,
        columns,
        hinge_counts,
        degraded_columns,
        extra_cost,
        price,
        url,
    }
}

/// Builds a template design from a URL string, then runs the pipeline.
///
/// Decoded columns seed the session; columns beyond the layout's count are
/// dropped and missing ones get the family default.
#[must_use]
pub fn compute_from_url(family: Family, dimensions: OuterDimensions, encoded: &str) -> DesignOutcome {
    let mut design = Design::new(family, dimensions);
    design.columns = url::decode(encoded)
        .into_iter()
        .map(|selection| ColumnConfiguration {
            has_door: Some(selection.has_door),
            ..ColumnConfiguration::with_template(selection.template_id)
        })
        .collect();
    compute(&design)
}
