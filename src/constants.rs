//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the config directory name.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Shelfwright";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "shelfwright";

/// Directory name under the platform config directory.
pub const APP_DATA_DIR: &str = "Shelfwright";
