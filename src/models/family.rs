//! Furniture product families.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A furniture product category with its own constraint table, column
/// banding rules and price coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    /// Generic low stand / sideboard
    #[default]
    Stand,
    /// TV stand (never offers split doors)
    TvStand,
    /// Bedside table
    Bedside,
    /// Full-height wardrobe built from zone templates
    Wardrobe,
    /// Open rack built from zone templates
    Rack,
    /// Bookcase, shares the rack templates and banding
    Bookcase,
}

impl Family {
    /// All families in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Stand,
        Self::TvStand,
        Self::Bedside,
        Self::Wardrobe,
        Self::Rack,
        Self::Bookcase,
    ];

    /// Returns true if columns of this family are described by zone templates
    /// rather than by a [`ConfigurationType`](crate::models::ConfigurationType).
    #[must_use]
    pub const fn uses_templates(self) -> bool {
        matches!(self, Self::Wardrobe | Self::Rack | Self::Bookcase)
    }

    /// Stable identifier used in config files, JSON output and CLI flags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stand => "stand",
            Self::TvStand => "tv_stand",
            Self::Bedside => "bedside",
            Self::Wardrobe => "wardrobe",
            Self::Rack => "rack",
            Self::Bookcase => "bookcase",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Family {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "stand" => Ok(Self::Stand),
            "tv_stand" | "tv" => Ok(Self::TvStand),
            "bedside" => Ok(Self::Bedside),
            "wardrobe" => Ok(Self::Wardrobe),
            "rack" => Ok(Self::Rack),
            "bookcase" => Ok(Self::Bookcase),
            _ => Err(format!(
                "Unknown family '{s}'. Expected one of: stand, tv_stand, bedside, wardrobe, rack, bookcase"
            )),
        }
    }
}
