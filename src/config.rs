//! Configuration management for the CLI.
//!
//! This module handles loading, validating, and saving user configuration
//! in TOML format with platform-specific directory resolution.

use crate::constants::APP_DATA_DIR;
use crate::models::{Family, OuterDimensions};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that replaces the platform config directory.
pub const CONFIG_DIR_ENV: &str = "SHELFWRIGHT_CONFIG_DIR";

/// Default piece used when CLI flags are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Product family
    pub family: Family,
    /// Outer width in cm
    pub width: f64,
    /// Outer height in cm
    pub height: f64,
    /// Depth in cm
    pub depth: f64,
    /// Plinth height in cm
    pub plinth_height: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            family: Family::default(),
            width: 120.0,
            height: 80.0,
            depth: 40.0,
            plinth_height: 0.0,
        }
    }
}

impl DefaultsConfig {
    /// Outer dimensions described by the defaults.
    #[must_use]
    pub const fn dimensions(&self) -> OuterDimensions {
        OuterDimensions {
            width: self.width,
            height: self.height,
            depth: self.depth,
            plinth_height: self.plinth_height,
        }
    }
}

/// Output preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Emit JSON even without `--json`
    pub json: bool,
}

/// User configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Shelfwright/config.toml`
/// - macOS: `~/Library/Application Support/Shelfwright/config.toml`
/// - Windows: `%APPDATA%\Shelfwright\config.toml`
///
/// `SHELFWRIGHT_CONFIG_DIR` overrides the directory.
///
/// # Validation
///
/// - `width`, `height` and `depth` must be positive
/// - `plinth_height` must be at least 0 and smaller than `height`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Default piece
    pub defaults: DefaultsConfig,
    /// Output preferences
    pub output: OutputConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// - Linux: `~/.config/Shelfwright/`
    /// - macOS: `~/Library/Application Support/Shelfwright/`
    /// - Windows: `%APPDATA%\Shelfwright\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific file.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");
        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write temp config file: {}", temp_path.display()))?;

        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename temp config file to: {}", path.display()))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let d = &self.defaults;
        for (name, value) in [("width", d.width), ("height", d.height), ("depth", d.depth)] {
            if !(value.is_finite() && value > 0.0) {
                anyhow::bail!("defaults.{name} must be a positive number (got {value})");
            }
        }

        if !(d.plinth_height >= 0.0 && d.plinth_height < d.height) {
            anyhow::bail!(
                "defaults.plinth_height must be between 0 and defaults.height (got {})",
                d.plinth_height
            );
        }

        Ok(())
    }

    /// Sets a value by its dotted key, e.g. `defaults.width`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let number = || -> Result<f64> {
            value
                .trim()
                .parse()
                .with_context(|| format!("{key} expects a number, got '{value}'"))
        };

        match key {
            "defaults.family" => {
                self.defaults.family = value.parse().map_err(anyhow::Error::msg)?;
            }
            "defaults.width" => self.defaults.width = number()?,
            "defaults.height" => self.defaults.height = number()?,
            "defaults.depth" => self.defaults.depth = number()?,
            "defaults.plinth_height" => self.defaults.plinth_height = number()?,
            "output.json" => {
                self.output.json = value
                    .trim()
                    .parse()
                    .with_context(|| format!("{key} expects true or false, got '{value}'"))?;
            }
            _ => anyhow::bail!(
                "Unknown config key '{key}'. Expected one of: {}",
                Self::KEYS.join(", ")
            ),
        }

        self.validate()
    }

    /// Keys accepted by [`Config::set`].
    pub const KEYS: &'static [&'static str] = &[
        "defaults.family",
        "defaults.width",
        "defaults.height",
        "defaults.depth",
        "defaults.plinth_height",
        "output.json",
    ];
}
