//! Editing-session snapshot stored in design files.

use crate::models::{ColumnConfiguration, Family, OuterDimensions};
use serde::{Deserialize, Serialize};

/// A complete piece: family, outer dimensions and the current columns.
///
/// # Validation
///
/// - `width`, `height` and `depth` should be positive
/// - `plinth_height` should be smaller than `height`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Design {
    /// Product family
    pub family: Family,
    /// Outer dimensions
    #[serde(flatten)]
    pub dimensions: OuterDimensions,
    /// Columns as last persisted (may be empty for a fresh design)
    #[serde(default)]
    pub columns: Vec<ColumnConfiguration>,
}

impl Design {
    /// Creates a design with no columns yet.
    #[must_use]
    pub const fn new(family: Family, dimensions: OuterDimensions) -> Self {
        Self {
            family,
            dimensions,
            columns: Vec::new(),
        }
    }

    /// Checks the dimension rules listed on the type.
    pub fn validate(&self) -> anyhow::Result<()> {
        let dims = &self.dimensions;
        if dims.width <= 0.0 || dims.height <= 0.0 || dims.depth <= 0.0 {
            anyhow::bail!(
                "Design dimensions must be positive (got {}x{}x{})",
                dims.width,
                dims.height,
                dims.depth
            );
        }

        if dims.plinth_height < 0.0 || dims.plinth_height >= dims.height {
            anyhow::bail!(
                "Plinth height {} must be between 0 and the outer height {}",
                dims.plinth_height,
                dims.height
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: f64, height: f64, plinth_height: f64) -> OuterDimensions {
        OuterDimensions {
            width,
            height,
            depth: 60.0,
            plinth_height,
        }
    }

    #[test]
    fn test_validate_accepts_regular_design() {
        assert!(Design::new(Family::Wardrobe, dims(180.0, 236.0, 10.0))
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_plinth() {
        let result = Design::new(Family::Wardrobe, dims(180.0, 236.0, 236.0)).validate();
        assert!(result.unwrap_err().to_string().contains("Plinth"));
    }

    #[test]
    fn test_validate_rejects_zero_width() {
        assert!(Design::new(Family::Rack, dims(0.0, 100.0, 0.0))
            .validate()
            .is_err());
    }

    #[test]
    fn test_design_json_is_flat() {
        let json = serde_json::json!({
            "family": "rack",
            "width": 120.0,
            "height": 180.0,
            "depth": 35.0,
            "columns": [{ "template_id": "RACK_OPEN" }]
        });
        let design: Design = serde_json::from_value(json).unwrap();
        assert_eq!(design.family, Family::Rack);
        assert_eq!(design.dimensions.plinth_height, 0.0);
        assert_eq!(design.columns.len(), 1);
    }
}
