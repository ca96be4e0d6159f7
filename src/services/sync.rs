//! Keeps every column's configuration valid after a dimension or column-count
//! change.
//!
//! Synchronization is a fold over the columns, left to right. The fold
//! carries the drawer count of the last column that has drawers, so a column
//! that must be replaced prefers a type whose drawer fronts line up with its
//! neighbours.

use crate::catalog::catalog;
use crate::models::{
    ColumnConfiguration, ColumnLayout, ConfigurationType, Dimensions, DoorSide, Family,
};
use crate::services::fallback::{find_fallback_template, find_nearest};
use crate::services::zones::resolve_zones;
use tracing::debug;

/// Result of a synchronization pass.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    /// The synchronized list equals the current one; the caller keeps it.
    Unchanged,
    /// The new column list.
    Updated {
        /// Columns after synchronization
        columns: Vec<ColumnConfiguration>,
        /// Indices of columns whose type or template was replaced or added
        /// (empty when only sides, heights or the column count changed)
        replaced: Vec<usize>,
    },
}

impl SyncOutcome {
    /// Returns true if the caller has to store a new list.
    #[must_use]
    pub const fn is_updated(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }

    /// Resolves the outcome against the list it was computed from.
    #[must_use]
    pub fn into_columns(self, current: &[ColumnConfiguration]) -> Vec<ColumnConfiguration> {
        match self {
            Self::Unchanged => current.to_vec(),
            Self::Updated { columns, .. } => columns,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct FoldState {
    preferred_drawers: Option<u8>,
}

/// Synchronizes columns against a new layout.
///
/// - columns past the new count are dropped, missing ones are seeded with
///   the family default
/// - valid selections are kept
/// - invalid selections are replaced (configuration types via
///   [`find_nearest`], templates via [`find_fallback_template`])
/// - columns with doors and no opening side get the position default
///
/// Returns [`SyncOutcome::Unchanged`] only if the synchronized list equals
/// the input, so a filled-in door side or a new column height is an update
/// even when no selection was replaced.
#[must_use]
pub fn synchronize(
    columns: &[ColumnConfiguration],
    family: Family,
    layout: &ColumnLayout,
    column_height: i32,
    depth: f64,
) -> SyncOutcome {
    let mut state = FoldState::default();
    let mut replaced = Vec::new();
    let mut synced = Vec::with_capacity(layout.column_count);

    for (idx, &width) in layout.column_widths_cm.iter().enumerate() {
        let dims = Dimensions::new(width, f64::from(column_height), depth);
        let current = columns.get(idx).cloned().unwrap_or_default();

        let (mut column, changed) = if family.uses_templates() {
            sync_template_column(current, family, &dims, column_height)
        } else {
            sync_type_column(current, family, &dims, column_height, &mut state)
        };

        if changed || idx >= columns.len() {
            debug!(
                column = idx,
                family = %family,
                template = ?column.template_id,
                configuration_type = ?column.configuration_type,
                "column configuration replaced"
            );
            replaced.push(idx);
        }

        apply_default_side(&mut column, idx);
        synced.push(column);
    }

    if synced.as_slice() == columns {
        return SyncOutcome::Unchanged;
    }

    SyncOutcome::Updated {
        columns: synced,
        replaced,
    }
}

fn sync_type_column(
    mut column: ColumnConfiguration,
    family: Family,
    dims: &Dimensions,
    column_height: i32,
    state: &mut FoldState,
) -> (ColumnConfiguration, bool) {
    let current = column.configuration_type;
    let own_drawers = current
        .map(|ty| ty.metadata().drawer_count)
        .filter(|&count| count > 0);
    let preferred = own_drawers.or(state.preferred_drawers);

    let start = current.unwrap_or(ConfigurationType::ALL[0]);
    let resolved = find_nearest(start, dims, family, preferred);
    let changed = resolved != current;

    if changed {
        column.configuration_type = resolved;
        column.template_id = None;
        column.zones.clear();
    }
    column.total_height_cm = column_height;

    if let Some(ty) = resolved {
        let metadata = ty.metadata();
        if metadata.drawer_count > 0 {
            state.preferred_drawers = Some(metadata.drawer_count);
        }
        if !metadata.has_doors {
            column.door_opening_side = None;
        }
    }

    (column, changed)
}

fn sync_template_column(
    mut column: ColumnConfiguration,
    family: Family,
    dims: &Dimensions,
    column_height: i32,
) -> (ColumnConfiguration, bool) {
    let current = column.template_id.as_deref();
    let Some(template) = find_fallback_template(current, family, dims.width, dims.height) else {
        return (column, false);
    };

    if current == Some(template.id.as_str()) {
        return (column, false);
    }

    let stack = resolve_zones(template, column_height);
    column.template_id = Some(template.id.clone());
    column.configuration_type = None;
    column.zones = stack.zones;
    column.total_height_cm = column_height;
    if template.has_doors() {
        column.has_door = Some(column.has_door.unwrap_or(true));
    } else {
        column.has_door = None;
        column.door_opening_side = None;
    }

    (column, true)
}

fn column_has_doors(column: &ColumnConfiguration) -> bool {
    if let Some(ty) = column.configuration_type {
        return ty.metadata().has_doors;
    }
    column
        .template_id
        .as_deref()
        .and_then(|id| catalog().get(id))
        .is_some_and(|template| template.has_doors())
}

fn apply_default_side(column: &mut ColumnConfiguration, idx: usize) {
    if column.door_opening_side.is_none() && column_has_doors(column) {
        column.door_opening_side = Some(DoorSide::default_for_position(idx));
    }
}

/// Re-resolves the zones of every template column for a new column height.
///
/// Templates, door flags and opening sides are left alone. Columns with an
/// unknown template or a configuration type only get the new height.
#[must_use]
pub fn reflow_zones(columns: &[ColumnConfiguration], column_height: i32) -> Vec<ColumnConfiguration> {
    columns
        .iter()
        .map(|column| {
            let mut column = column.clone();
            if let Some(template) = column.template_id.as_deref().and_then(|id| catalog().get(id)) {
                column.zones = resolve_zones(template, column_height).zones;
            }
            column.total_height_cm = column_height;
            column
        })
        .collect()
}
