//! Outer and per-column dimensions in centimetres.

use serde::{Deserialize, Serialize};

/// Width, height and depth of a column (or of a whole piece) in centimetres.
///
/// Values are not sanitized; negative or zero inputs are accepted and every
/// engine function stays total for them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Dimensions {
    /// Width in cm
    pub width: f64,
    /// Height in cm
    pub height: f64,
    /// Depth in cm
    pub depth: f64,
}

impl Dimensions {
    /// Creates a new set of dimensions.
    #[must_use]
    pub const fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Returns a copy with a different width.
    #[must_use]
    pub const fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }
}

/// Outer dimensions of a whole piece as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OuterDimensions {
    /// Total width in cm
    pub width: f64,
    /// Total height in cm, plinth included
    pub height: f64,
    /// Depth in cm
    pub depth: f64,
    /// Plinth (base) height in cm
    #[serde(default)]
    pub plinth_height: f64,
}

impl OuterDimensions {
    /// Height available to the column interiors (outer height minus plinth),
    /// rounded to whole centimetres.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn column_height(&self) -> i32 {
        (self.height - self.plinth_height).round() as i32
    }

    /// Dimensions of one column of the given width.
    #[must_use]
    pub fn column(&self, column_width: f64) -> Dimensions {
        Dimensions::new(column_width, f64::from(self.column_height()), self.depth)
    }
}
