//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use shelfwright::config::CONFIG_DIR_ENV;
use shelfwright::models::{ColumnConfiguration, Design, Family, OuterDimensions};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the shelfwright binary
pub fn shelfwright_bin() -> &'static str {
    env!("CARGO_BIN_EXE_shelfwright")
}

/// Creates a Command whose config directory is `config_dir`.
/// Share the directory between commands of one test to keep saved config.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(shelfwright_bin());
    cmd.env(CONFIG_DIR_ENV, config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs a command against a fresh, empty config directory.
pub fn run(args: &[&str]) -> Output {
    let config_dir = TempDir::new().expect("Failed to create temp dir");
    isolated_command(args, config_dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Runs a command and parses its stdout as JSON.
pub fn run_json(args: &[&str]) -> (Option<i32>, serde_json::Value) {
    let output = run(args);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value = serde_json::from_str(&stdout).unwrap_or_else(|e| {
        panic!(
            "Should parse JSON output: {e}\nstdout: {stdout}\nstderr: {}",
            String::from_utf8_lossy(&output.stderr)
        )
    });
    (output.status.code(), value)
}

/// Outer dimensions with a plinth.
pub fn outer(width: f64, height: f64, depth: f64, plinth_height: f64) -> OuterDimensions {
    OuterDimensions {
        width,
        height,
        depth,
        plinth_height,
    }
}

/// A two-column wardrobe with a hanging and a shelves column.
pub fn test_design_wardrobe() -> Design {
    let mut design = Design::new(Family::Wardrobe, outer(180.0, 236.0, 60.0, 10.0));
    design.columns = vec![
        ColumnConfiguration::with_template("FULL_HANGING_WITH_1_SHELF"),
        ColumnConfiguration {
            has_door: Some(false),
            ..ColumnConfiguration::with_template("SHELVES_ONLY")
        },
    ];
    design
}

/// A fresh stand with no columns yet.
pub fn test_design_stand() -> Design {
    Design::new(Family::Stand, outer(120.0, 60.0, 40.0, 0.0))
}

/// Writes a design to a temp file. Keep the `TempDir` alive while the file
/// is in use.
pub fn create_temp_design_file(design: &Design) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("design.json");
    let json = serde_json::to_string_pretty(design).expect("Failed to serialize design");
    fs::write(&path, json).expect("Failed to write design file");
    (path, temp_dir)
}
