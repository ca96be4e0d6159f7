//! Parsing and serialization for the crate's text formats.
//!
//! This module handles the compact URL form of column selections and the
//! JSON design files used by the CLI.

pub mod design_file;
pub mod url;

// Re-export commonly used functions
pub use design_file::{load_design, parse_design, save_design};
pub use url::{decode, decode_with_report, encode, DecodeReport};
