//! Column layout and per-column configuration state.

use crate::models::{ConfigurationType, Zone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width class of a column, used by wardrobe banding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Narrow column (shelves or a single short rail)
    Narrow,
    /// Wide column (full hanging)
    Wide,
    /// Column of a family without width classes
    Standard,
}

/// Split of a piece's width into vertical columns.
///
/// Positions are column centres, measured from the piece centre (0).
///
/// # Invariants
///
/// - `column_widths_cm.len() == column_positions_cm.len() == column_count`
/// - the widths sum to the requested total width
/// - positions are strictly increasing for positive widths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnLayout {
    /// Number of columns
    pub column_count: usize,
    /// Width of each column, left to right
    pub column_widths_cm: Vec<f64>,
    /// Centre X of each column, left to right
    pub column_positions_cm: Vec<f64>,
    /// Width class of each column
    pub column_kinds: Vec<ColumnKind>,
}

impl ColumnLayout {
    /// Builds a layout from column widths, placing columns side by side and
    /// centring the whole row about 0.
    #[must_use]
    pub fn from_widths(widths: Vec<f64>, kinds: Vec<ColumnKind>) -> Self {
        let total: f64 = widths.iter().sum();
        let mut left_edge = -total / 2.0;
        let mut positions = Vec::with_capacity(widths.len());

        for width in &widths {
            positions.push(left_edge + width / 2.0);
            left_edge += width;
        }

        Self {
            column_count: widths.len(),
            column_widths_cm: widths,
            column_positions_cm: positions,
            column_kinds: kinds,
        }
    }

    /// Sum of all column widths.
    #[must_use]
    pub fn total_width(&self) -> f64 {
        self.column_widths_cm.iter().sum()
    }
}

/// Side a door swings open towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoorSide {
    /// Opens to the left
    Left,
    /// Opens to the right
    Right,
}

impl DoorSide {
    /// Default opening side for a column position: the first column opens
    /// left, every other column opens right.
    #[must_use]
    pub const fn default_for_position(index: usize) -> Self {
        if index == 0 {
            Self::Left
        } else {
            Self::Right
        }
    }
}

impl fmt::Display for DoorSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

impl FromStr for DoorSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            _ => Err(format!("Unknown door side '{s}'. Expected: left, right")),
        }
    }
}

/// Persisted state of one column in an editing session.
///
/// Template-based families set `template_id`; the stand, TV stand and
/// bedside families set `configuration_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ColumnConfiguration {
    /// Selected template (template-based families)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Selected configuration type (legacy families)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration_type: Option<ConfigurationType>,
    /// Resolved zones, bottom to top
    #[serde(default)]
    pub zones: Vec<Zone>,
    /// Height the zones were resolved against
    #[serde(default)]
    pub total_height_cm: i32,
    /// Door opening side, if the column has a door
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub door_opening_side: Option<DoorSide>,
    /// Whether the door is shown closed; `None` means the column has no door
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_door: Option<bool>,
}

impl ColumnConfiguration {
    /// Creates a column using a template.
    pub fn with_template(template_id: impl Into<String>) -> Self {
        Self {
            template_id: Some(template_id.into()),
            ..Self::default()
        }
    }

    /// Creates a column using a configuration type.
    #[must_use]
    pub fn with_type(configuration_type: ConfigurationType) -> Self {
        Self {
            configuration_type: Some(configuration_type),
            ..Self::default()
        }
    }

    /// Sets the door opening side.
    #[must_use]
    pub fn opening(mut self, side: DoorSide) -> Self {
        self.door_opening_side = Some(side);
        self
    }

    /// URL-shareable part of the column; `None` for configuration-type columns.
    #[must_use]
    pub fn selection(&self) -> Option<ColumnSelection> {
        self.template_id.as_ref().map(|id| ColumnSelection {
            template_id: id.clone(),
            has_door: self.has_door.unwrap_or(true),
        })
    }
}

/// The part of a column that is shared through URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSelection {
    /// Template id
    pub template_id: String,
    /// Door closed (`true`) or explicitly opened (`false`)
    pub has_door: bool,
}

impl ColumnSelection {
    /// Creates a new selection.
    pub fn new(template_id: impl Into<String>, has_door: bool) -> Self {
        Self {
            template_id: template_id.into(),
            has_door,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_widths_centres_columns() {
        let layout = ColumnLayout::from_widths(
            vec![90.0, 90.0],
            vec![ColumnKind::Wide, ColumnKind::Wide],
        );
        assert_eq!(layout.column_count, 2);
        assert_eq!(layout.column_positions_cm, vec![-45.0, 45.0]);
        assert_eq!(layout.total_width(), 180.0);
    }

    #[test]
    fn test_from_widths_uneven_split() {
        let layout = ColumnLayout::from_widths(
            vec![100.0, 50.0],
            vec![ColumnKind::Wide, ColumnKind::Narrow],
        );
        assert_eq!(layout.column_positions_cm, vec![-25.0, 50.0]);
    }

    #[test]
    fn test_default_door_side() {
        assert_eq!(DoorSide::default_for_position(0), DoorSide::Left);
        assert_eq!(DoorSide::default_for_position(1), DoorSide::Right);
        assert_eq!(DoorSide::default_for_position(4), DoorSide::Right);
    }

    #[test]
    fn test_selection_from_column_defaults_to_closed() {
        let column = ColumnConfiguration::with_template("SHELVES_ONLY");
        assert_eq!(
            column.selection(),
            Some(ColumnSelection::new("SHELVES_ONLY", true))
        );

        let legacy = ColumnConfiguration::with_type(ConfigurationType::TwoDrawers);
        assert_eq!(legacy.selection(), None);
    }
}
