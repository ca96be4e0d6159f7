//! Data models for furniture pieces, columns, zones and templates.
//!
//! This module contains the plain data structures shared by the engines.
//! Models carry no business logic beyond small helpers and are designed to
//! be serialized for the renderer, the CLI and design files.

pub mod column;
pub mod configuration_type;
pub mod design;
pub mod dimensions;
pub mod family;
pub mod template;
pub mod zone;

// Re-export all model types
pub use column::{ColumnConfiguration, ColumnKind, ColumnLayout, ColumnSelection, DoorSide};
pub use configuration_type::{ConfigurationMetadata, ConfigurationType, HingePlacement};
pub use design::Design;
pub use dimensions::{Dimensions, OuterDimensions};
pub use family::Family;
pub use template::{DoorSpec, DoorStyle, Template};
pub use zone::{Zone, ZoneArchetype, ZoneKind};
