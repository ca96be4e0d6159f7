//! Design file reading and writing.
//!
//! A design file is the JSON form of [`Design`]:
//!
//! ```json
//! {
//!   "family": "wardrobe",
//!   "width": 180.0,
//!   "height": 236.0,
//!   "depth": 60.0,
//!   "plinth_height": 10.0,
//!   "columns": [
//!     { "template_id": "FULL_HANGING_WITH_1_SHELF", "has_door": true },
//!     { "template_id": "SHELVES_ONLY", "has_door": false }
//!   ]
//! }
//! ```

use crate::models::Design;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parses a design from JSON text and validates its dimensions.
pub fn parse_design(json: &str) -> Result<Design> {
    let design: Design = serde_json::from_str(json).context("Invalid design JSON")?;
    design.validate()?;
    Ok(design)
}

/// Loads and validates a design file.
pub fn load_design(path: &Path) -> Result<Design> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read design file: {}", path.display()))?;

    parse_design(&content).with_context(|| format!("Failed to load design: {}", path.display()))
}

/// Saves a design using temp file + rename.
pub fn save_design(design: &Design, path: &Path) -> Result<()> {
    design.validate()?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(design).context("Failed to serialize design")?;

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write temp design file: {}", temp_path.display()))?;

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp design file to: {}", path.display()))?;

    Ok(())
}
