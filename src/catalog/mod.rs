//! Static catalog data: constraint tables and zone templates.
//!
//! Everything in here is read-only and known at build time.

pub mod constraints;
pub mod templates;

pub use constraints::{ConstraintRecord, CustomPredicate};
pub use templates::{catalog, template_extra_cost, TemplateCatalog};
