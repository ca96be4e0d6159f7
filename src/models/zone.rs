//! Zone archetypes (proportional template entries) and resolved zones.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Function of a horizontal band inside a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneKind {
    /// Hanging rail
    Hanging,
    /// Stack of shelves
    Shelves,
    /// Stack of drawers
    Drawers,
    /// Open space with no fittings
    Empty,
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hanging => write!(f, "hanging"),
            Self::Shelves => write!(f, "shelves"),
            Self::Drawers => write!(f, "drawers"),
            Self::Empty => write!(f, "empty"),
        }
    }
}

/// One entry of a template: a zone kind and its share of the column height.
///
/// `height_proportion` is a percentage; the proportions of one template are
/// expected to sum to 100. Spacing and drawer bounds fall back to the
/// family's zone rules when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneArchetype {
    /// Zone function
    pub kind: ZoneKind,
    /// Share of the available column height, in percent
    pub height_proportion: f64,
    /// Minimum usable height; overrides the door-zone default for door zones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height_cm: Option<i32>,
    /// Smallest allowed gap between shelves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shelf_spacing_min: Option<f64>,
    /// Largest allowed gap between shelves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shelf_spacing_max: Option<f64>,
    /// Preferred gap between shelves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shelf_spacing_optimal: Option<f64>,
    /// Smallest allowed drawer front
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawer_height_min: Option<f64>,
    /// Largest allowed drawer front
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawer_height_max: Option<f64>,
    /// Preferred drawer front height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawer_height_optimal: Option<f64>,
}

impl ZoneArchetype {
    /// Creates an archetype with no explicit bounds.
    #[must_use]
    pub const fn new(kind: ZoneKind, height_proportion: f64) -> Self {
        Self {
            kind,
            height_proportion,
            min_height_cm: None,
            shelf_spacing_min: None,
            shelf_spacing_max: None,
            shelf_spacing_optimal: None,
            drawer_height_min: None,
            drawer_height_max: None,
            drawer_height_optimal: None,
        }
    }

    /// Sets the minimum usable height.
    #[must_use]
    pub const fn with_min_height(mut self, min_height_cm: i32) -> Self {
        self.min_height_cm = Some(min_height_cm);
        self
    }

    /// Sets shelf spacing bounds (min, optimal, max).
    #[must_use]
    pub const fn with_shelf_spacing(mut self, min: f64, optimal: f64, max: f64) -> Self {
        self.shelf_spacing_min = Some(min);
        self.shelf_spacing_optimal = Some(optimal);
        self.shelf_spacing_max = Some(max);
        self
    }

    /// Sets drawer height bounds (min, optimal, max).
    #[must_use]
    pub const fn with_drawer_height(mut self, min: f64, optimal: f64, max: f64) -> Self {
        self.drawer_height_min = Some(min);
        self.drawer_height_optimal = Some(optimal);
        self.drawer_height_max = Some(max);
        self
    }
}

/// A zone after its proportion has been turned into absolute centimetres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Zone function
    pub kind: ZoneKind,
    /// Resolved height in whole centimetres
    pub height_cm: i32,
    /// Interior shelves (shelf zones only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shelf_count: Option<u32>,
    /// Clear gap between shelves (shelf zones only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shelf_spacing_cm: Option<f64>,
    /// Drawers in the stack (drawer zones only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawer_count: Option<u32>,
    /// Front height of each drawer, bottom first (drawer zones only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawer_heights_cm: Option<Vec<f64>>,
}

impl Zone {
    /// Creates a zone with only a kind and a height.
    #[must_use]
    pub const fn plain(kind: ZoneKind, height_cm: i32) -> Self {
        Self {
            kind,
            height_cm,
            shelf_count: None,
            shelf_spacing_cm: None,
            drawer_count: None,
            drawer_heights_cm: None,
        }
    }
}
