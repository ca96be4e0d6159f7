//! Configuration-type validity against a family's constraint table.

use crate::catalog::constraints::{self, ConstraintRecord};
use crate::models::{ConfigurationType, Dimensions, Family};
use std::fmt;

/// Which dimension a bound applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Column width
    Width,
    /// Column height
    Height,
    /// Column depth
    Depth,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width => write!(f, "width"),
            Self::Height => write!(f, "height"),
            Self::Depth => write!(f, "depth"),
        }
    }
}

/// First rule a configuration type failed.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintViolation {
    /// The family never offers split doors
    SplitDoorsNotOffered {
        /// Family that rejected the type
        family: Family,
    },
    /// A dimension is below its minimum
    BelowMinimum {
        /// Offending dimension
        axis: Axis,
        /// Required minimum
        min: f64,
        /// Actual value
        actual: f64,
    },
    /// A dimension is above its maximum
    AboveMaximum {
        /// Offending dimension
        axis: Axis,
        /// Allowed maximum
        max: f64,
        /// Actual value
        actual: f64,
    },
    /// A custom predicate returned false
    Predicate {
        /// Predicate name
        name: &'static str,
    },
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SplitDoorsNotOffered { family } => {
                write!(f, "{family} does not offer split doors")
            }
            Self::BelowMinimum { axis, min, actual } => {
                write!(f, "{axis} {actual} cm is below the minimum of {min} cm")
            }
            Self::AboveMaximum { axis, max, actual } => {
                write!(f, "{axis} {actual} cm is above the maximum of {max} cm")
            }
            Self::Predicate { name } => write!(f, "rule '{name}' is not satisfied"),
        }
    }
}

/// Checks a configuration type against the family rules and reports the
/// first failing bound.
///
/// Order of checks:
/// 1. TV stands reject every split-door type outright
/// 2. no record for `(family, type)` means valid
/// 3. width, height and depth bounds (min before max)
/// 4. the record's custom predicate
pub fn check(
    configuration_type: ConfigurationType,
    family: Family,
    dims: &Dimensions,
) -> Result<(), ConstraintViolation> {
    if family == Family::TvStand && configuration_type.metadata().door_count == 2 {
        return Err(ConstraintViolation::SplitDoorsNotOffered { family });
    }

    let Some(record) = constraints::lookup(family, configuration_type) else {
        return Ok(());
    };

    check_record(record, dims)
}

/// Returns true if the configuration type is allowed for the dimensions.
#[must_use]
pub fn is_valid(configuration_type: ConfigurationType, family: Family, dims: &Dimensions) -> bool {
    match check(configuration_type, family, dims) {
        Ok(()) => true,
        Err(violation) => {
            tracing::debug!(
                family = %family,
                configuration_type = %configuration_type,
                "{violation}"
            );
            false
        }
    }
}

/// All configuration types valid for the dimensions, in declaration order.
#[must_use]
pub fn valid_types(family: Family, dims: &Dimensions) -> Vec<ConfigurationType> {
    ConfigurationType::ALL
        .into_iter()
        .filter(|&ty| check(ty, family, dims).is_ok())
        .collect()
}

fn check_record(record: &ConstraintRecord, dims: &Dimensions) -> Result<(), ConstraintViolation> {
    let bounds = [
        (Axis::Width, dims.width, record.min_width, record.max_width),
        (Axis::Height, dims.height, record.min_height, record.max_height),
        (Axis::Depth, dims.depth, record.min_depth, record.max_depth),
    ];

    for (axis, actual, min, max) in bounds {
        if let Some(min) = min {
            if actual < min {
                return Err(ConstraintViolation::BelowMinimum { axis, min, actual });
            }
        }
        if let Some(max) = max {
            if actual > max {
                return Err(ConstraintViolation::AboveMaximum { axis, max, actual });
            }
        }
    }

    if let Some(predicate) = record.predicate {
        if !(predicate.check)(dims) {
            return Err(ConstraintViolation::Predicate {
                name: predicate.name,
            });
        }
    }

    Ok(())
}
