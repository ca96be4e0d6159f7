//! Named proportional zone layouts for template-based families.

use crate::models::{Family, ZoneArchetype};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How the door over a group of zones is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoorStyle {
    /// One leaf
    Single,
    /// Two leaves meeting in the middle
    Split,
}

/// A door covering one or more zones of a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorSpec {
    /// Indices into the template's zone list
    pub zone_indices: Vec<usize>,
    /// Leaf style
    pub door_style: DoorStyle,
}

/// A reusable column layout expressed in height proportions.
///
/// # Validation
///
/// - zone proportions should sum to 100 (checked with a warning at resolve time)
/// - door zone indices should reference existing zones
/// - `min_width <= max_width` and `min_height <= max_height` when the maxima are set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Stable identifier, also the key of the URL code table
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Families offering this template; the first one supplies the zone rules
    pub families: Vec<Family>,
    /// Zones from bottom to top
    pub zones: Vec<ZoneArchetype>,
    /// Doors over groups of zones
    #[serde(default)]
    pub doors: Vec<DoorSpec>,
    /// Narrowest column this template fits
    pub min_width: f64,
    /// Widest column this template fits
    #[serde(default)]
    pub max_width: Option<f64>,
    /// Lowest column this template fits
    pub min_height: f64,
    /// Tallest column this template fits
    #[serde(default)]
    pub max_height: Option<f64>,
    /// Surcharge added to the piece price per column using this template
    #[serde(default)]
    pub extra_cost: f64,
}

impl Template {
    /// Returns true if the template fits a column of the given size.
    #[must_use]
    pub fn fits(&self, width: f64, height: f64) -> bool {
        width >= self.min_width
            && self.max_width.is_none_or(|max| width <= max)
            && height >= self.min_height
            && self.max_height.is_none_or(|max| height <= max)
    }

    /// Returns true if the template is offered for the family.
    #[must_use]
    pub fn applies_to(&self, family: Family) -> bool {
        self.families.contains(&family)
    }

    /// Family whose zone rules drive resolution.
    #[must_use]
    pub fn primary_family(&self) -> Family {
        self.families.first().copied().unwrap_or(Family::Wardrobe)
    }

    /// Returns true if at least one door is declared.
    #[must_use]
    pub fn has_doors(&self) -> bool {
        !self.doors.is_empty()
    }

    /// Indices of every zone covered by at least one door.
    ///
    /// Indices past the end of the zone list are dropped.
    #[must_use]
    pub fn door_zone_indices(&self) -> BTreeSet<usize> {
        self.doors
            .iter()
            .flat_map(|door| door.zone_indices.iter().copied())
            .filter(|&idx| idx < self.zones.len())
            .collect()
    }

    /// Sum of all zone proportions.
    #[must_use]
    pub fn proportion_sum(&self) -> f64 {
        self.zones.iter().map(|zone| zone.height_proportion).sum()
    }
}
