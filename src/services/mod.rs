//! Service layer: the pure layout engines.
//!
//! Every function in this module is a pure transformation of its inputs. No
//! service keeps state between calls, so any of them can be called from any
//! thread at any rate.

pub mod column_layout;
pub mod design;
pub mod fallback;
pub mod pricing;
pub mod sync;
pub mod validator;
pub mod zones;

// Re-export commonly used types and functions
pub use column_layout::{calculate_column_layout, choose_column_count, valid_column_counts};
pub use design::{compute, DesignOutcome};
pub use fallback::{find_fallback_template, find_nearest};
pub use pricing::{price, PriceTable};
pub use sync::{reflow_zones, synchronize, SyncOutcome};
pub use validator::{check, is_valid, valid_types, ConstraintViolation};
pub use zones::{resolve_zones, ZoneRules, ZoneStack};
