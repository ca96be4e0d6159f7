//! CLI command handlers for Shelfwright.
//!
//! Every command is a thin wrapper over the pure engines in
//! [`crate::services`]: it reads flags and configuration defaults, runs one
//! engine, and prints the result as text or JSON.

pub mod columns;
pub mod common;
pub mod config;
pub mod design;
pub mod fallback;
pub mod price;
pub mod templates;
pub mod url;
pub mod validate;
pub mod zones;

// Re-export types used by main.rs and tests
pub use columns::ColumnsArgs;
pub use common::{CliError, CliResult, ExitCode, PieceArgs};
pub use config::ConfigArgs;
pub use design::DesignArgs;
pub use fallback::FallbackArgs;
pub use price::PriceArgs;
pub use templates::TemplatesArgs;
pub use url::UrlArgs;
pub use validate::ValidateArgs;
pub use zones::ZonesArgs;
