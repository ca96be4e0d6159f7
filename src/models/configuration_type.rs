//! Closed set of column archetypes used by the stand, TV stand and bedside
//! families, together with their static metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A column's internal layout archetype.
///
/// The declaration order matters: fallback resolution scans
/// [`ConfigurationType::ALL`] front to back and picks the first valid entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigurationType {
    /// One full-height drawer
    OneDrawer,
    /// Two stacked drawers
    TwoDrawers,
    /// Three stacked drawers
    ThreeDrawers,
    /// Four stacked drawers
    FourDrawers,
    /// Single door with one shelf behind it
    SingleDoorOneShelf,
    /// Single door with two shelves behind it
    SingleDoorTwoShelves,
    /// Single door with three shelves behind it
    SingleDoorThreeShelves,
    /// Split (double) doors with one shelf behind them
    SplitDoorOneShelf,
    /// Split (double) doors with two shelves behind them
    SplitDoorTwoShelves,
    /// Split (double) doors with three shelves behind them
    SplitDoorThreeShelves,
}

/// Where the hinges of a door configuration are mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HingePlacement {
    /// All hinges on one vertical edge, opposite the opening side
    OppositeOpeningSide,
    /// Hinges on both outer edges (one door per edge)
    BothOuterEdges,
}

/// Static facts about a [`ConfigurationType`].
///
/// Invariants: a configuration without doors always has drawers, and a
/// configuration with doors always defines hinge count and placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfigurationMetadata {
    /// Column contains drawers
    pub has_drawers: bool,
    /// Column is closed by at least one door
    pub has_doors: bool,
    /// Number of door leaves (0, 1 or 2)
    pub door_count: u8,
    /// Shelves behind the door(s)
    pub shelf_count: u8,
    /// Drawers stacked in the column
    pub drawer_count: u8,
    /// Hinges for a standard-height column, if the type has doors
    pub hinge_count: Option<u8>,
    /// Hinge mounting rule, if the type has doors
    pub hinge_placement: Option<HingePlacement>,
}

impl ConfigurationMetadata {
    const fn drawers(count: u8) -> Self {
        Self {
            has_drawers: true,
            has_doors: false,
            door_count: 0,
            shelf_count: 0,
            drawer_count: count,
            hinge_count: None,
            hinge_placement: None,
        }
    }

    const fn single_door(shelves: u8) -> Self {
        Self {
            has_drawers: false,
            has_doors: true,
            door_count: 1,
            shelf_count: shelves,
            drawer_count: 0,
            hinge_count: Some(2),
            hinge_placement: Some(HingePlacement::OppositeOpeningSide),
        }
    }

    const fn split_door(shelves: u8) -> Self {
        Self {
            has_drawers: false,
            has_doors: true,
            door_count: 2,
            shelf_count: shelves,
            drawer_count: 0,
            hinge_count: Some(4),
            hinge_placement: Some(HingePlacement::BothOuterEdges),
        }
    }
}

impl ConfigurationType {
    /// Every configuration type in declaration order.
    pub const ALL: [Self; 10] = [
        Self::OneDrawer,
        Self::TwoDrawers,
        Self::ThreeDrawers,
        Self::FourDrawers,
        Self::SingleDoorOneShelf,
        Self::SingleDoorTwoShelves,
        Self::SingleDoorThreeShelves,
        Self::SplitDoorOneShelf,
        Self::SplitDoorTwoShelves,
        Self::SplitDoorThreeShelves,
    ];

    /// Returns the static metadata record for this type.
    #[must_use]
    pub const fn metadata(self) -> ConfigurationMetadata {
        match self {
            Self::OneDrawer => ConfigurationMetadata::drawers(1),
            Self::TwoDrawers => ConfigurationMetadata::drawers(2),
            Self::ThreeDrawers => ConfigurationMetadata::drawers(3),
            Self::FourDrawers => ConfigurationMetadata::drawers(4),
            Self::SingleDoorOneShelf => ConfigurationMetadata::single_door(1),
            Self::SingleDoorTwoShelves => ConfigurationMetadata::single_door(2),
            Self::SingleDoorThreeShelves => ConfigurationMetadata::single_door(3),
            Self::SplitDoorOneShelf => ConfigurationMetadata::split_door(1),
            Self::SplitDoorTwoShelves => ConfigurationMetadata::split_door(2),
            Self::SplitDoorThreeShelves => ConfigurationMetadata::split_door(3),
        }
    }

    /// Stable identifier used in design files and CLI flags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneDrawer => "ONE_DRAWER",
            Self::TwoDrawers => "TWO_DRAWERS",
            Self::ThreeDrawers => "THREE_DRAWERS",
            Self::FourDrawers => "FOUR_DRAWERS",
            Self::SingleDoorOneShelf => "SINGLE_DOOR_ONE_SHELF",
            Self::SingleDoorTwoShelves => "SINGLE_DOOR_TWO_SHELVES",
            Self::SingleDoorThreeShelves => "SINGLE_DOOR_THREE_SHELVES",
            Self::SplitDoorOneShelf => "SPLIT_DOOR_ONE_SHELF",
            Self::SplitDoorTwoShelves => "SPLIT_DOOR_TWO_SHELVES",
            Self::SplitDoorThreeShelves => "SPLIT_DOOR_THREE_SHELVES",
        }
    }

    /// Hinges needed per column for a door of the given height.
    ///
    /// Each leaf gets 2 hinges up to 100 cm, 3 up to 160 cm and 4 above.
    /// Drawer-only types return `None`.
    #[must_use]
    pub fn hinges_for_height(self, door_height_cm: f64) -> Option<u8> {
        let meta = self.metadata();
        if !meta.has_doors {
            return None;
        }

        let per_leaf = if door_height_cm <= 100.0 {
            2
        } else if door_height_cm <= 160.0 {
            3
        } else {
            4
        };

        Some(per_leaf * meta.door_count)
    }
}

impl fmt::Display for ConfigurationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConfigurationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == normalized)
            .ok_or_else(|| format!("Unknown configuration type '{s}'"))
    }
}
