//! Per-family constraint tables for configuration types.
//!
//! Each family owns one table. A configuration type without a record in the
//! family's table is always valid, so adding a new type never blocks the
//! configurator until someone writes its limits down.

use crate::models::{ConfigurationType, Dimensions, Family};

use ConfigurationType as T;

/// Named extra rule evaluated after the numeric bounds.
#[derive(Clone, Copy)]
pub struct CustomPredicate {
    /// Short identifier used in diagnostics
    pub name: &'static str,
    /// Returns true when the dimensions are acceptable
    pub check: fn(&Dimensions) -> bool,
}

impl std::fmt::Debug for CustomPredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CustomPredicate").field(&self.name).finish()
    }
}

/// Limits of one configuration type within one family.
///
/// All bounds are optional and inclusive.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintRecord {
    /// Type the record applies to
    pub configuration_type: ConfigurationType,
    /// Narrowest allowed column
    pub min_width: Option<f64>,
    /// Widest allowed column
    pub max_width: Option<f64>,
    /// Lowest allowed column
    pub min_height: Option<f64>,
    /// Tallest allowed column
    pub max_height: Option<f64>,
    /// Shallowest allowed column
    pub min_depth: Option<f64>,
    /// Deepest allowed column
    pub max_depth: Option<f64>,
    /// Additional rule
    pub predicate: Option<CustomPredicate>,
}

impl ConstraintRecord {
    const fn new(configuration_type: ConfigurationType) -> Self {
        Self {
            configuration_type,
            min_width: None,
            max_width: None,
            min_height: None,
            max_height: None,
            min_depth: None,
            max_depth: None,
            predicate: None,
        }
    }

    const fn min_width(mut self, value: f64) -> Self {
        self.min_width = Some(value);
        self
    }

    const fn max_width(mut self, value: f64) -> Self {
        self.max_width = Some(value);
        self
    }

    const fn min_height(mut self, value: f64) -> Self {
        self.min_height = Some(value);
        self
    }

    const fn max_height(mut self, value: f64) -> Self {
        self.max_height = Some(value);
        self
    }

    const fn min_depth(mut self, value: f64) -> Self {
        self.min_depth = Some(value);
        self
    }

    const fn max_depth(mut self, value: f64) -> Self {
        self.max_depth = Some(value);
        self
    }

    const fn predicate(mut self, name: &'static str, check: fn(&Dimensions) -> bool) -> Self {
        self.predicate = Some(CustomPredicate { name, check });
        self
    }
}

// Fronts wider than five times their height jam on the runners.
fn four_drawer_fronts_proportional(dims: &Dimensions) -> bool {
    dims.width <= (dims.height / 4.0) * 5.0
}

fn three_shelves_leave_clearance(dims: &Dimensions) -> bool {
    dims.height / 4.0 >= 18.0
}

fn split_door_leaves_not_too_narrow(dims: &Dimensions) -> bool {
    dims.width / 2.0 >= 25.0
}

const STAND: &[ConstraintRecord] = &[
    ConstraintRecord::new(T::OneDrawer).max_height(45.0).min_depth(30.0),
    ConstraintRecord::new(T::TwoDrawers)
        .min_height(30.0)
        .max_height(70.0)
        .min_depth(30.0),
    ConstraintRecord::new(T::ThreeDrawers)
        .min_height(45.0)
        .max_height(90.0)
        .min_depth(30.0),
    ConstraintRecord::new(T::FourDrawers)
        .min_height(60.0)
        .max_width(80.0)
        .min_depth(30.0)
        .predicate("four_drawer_fronts_proportional", four_drawer_fronts_proportional),
    ConstraintRecord::new(T::SingleDoorOneShelf)
        .max_width(60.0)
        .max_height(60.0),
    ConstraintRecord::new(T::SingleDoorTwoShelves)
        .max_width(60.0)
        .min_height(50.0),
    ConstraintRecord::new(T::SingleDoorThreeShelves)
        .max_width(60.0)
        .min_height(75.0)
        .predicate("three_shelves_leave_clearance", three_shelves_leave_clearance),
    ConstraintRecord::new(T::SplitDoorOneShelf)
        .min_width(60.0)
        .max_height(60.0),
    ConstraintRecord::new(T::SplitDoorTwoShelves)
        .min_width(60.0)
        .min_height(50.0),
    ConstraintRecord::new(T::SplitDoorThreeShelves)
        .min_width(60.0)
        .min_height(75.0)
        .predicate("three_shelves_leave_clearance", three_shelves_leave_clearance),
];

// Split doors are rejected for TV stands before this table is consulted.
const TV_STAND: &[ConstraintRecord] = &[
    ConstraintRecord::new(T::OneDrawer).max_height(35.0),
    ConstraintRecord::new(T::TwoDrawers)
        .min_height(30.0)
        .max_height(60.0),
    ConstraintRecord::new(T::ThreeDrawers).min_height(50.0),
    ConstraintRecord::new(T::FourDrawers).min_height(70.0),
    ConstraintRecord::new(T::SingleDoorOneShelf).max_width(70.0),
    ConstraintRecord::new(T::SingleDoorTwoShelves)
        .max_width(70.0)
        .min_height(45.0),
    ConstraintRecord::new(T::SingleDoorThreeShelves)
        .max_width(70.0)
        .min_height(70.0),
];

const BEDSIDE: &[ConstraintRecord] = &[
    ConstraintRecord::new(T::OneDrawer).min_depth(25.0),
    ConstraintRecord::new(T::TwoDrawers)
        .min_height(35.0)
        .min_depth(25.0),
    ConstraintRecord::new(T::ThreeDrawers)
        .min_height(50.0)
        .min_depth(25.0),
    ConstraintRecord::new(T::FourDrawers)
        .min_height(65.0)
        .max_width(60.0)
        .min_depth(25.0),
    ConstraintRecord::new(T::SingleDoorOneShelf).max_width(55.0),
    ConstraintRecord::new(T::SingleDoorTwoShelves)
        .max_width(55.0)
        .min_height(45.0),
    ConstraintRecord::new(T::SingleDoorThreeShelves)
        .max_width(55.0)
        .min_height(65.0),
    ConstraintRecord::new(T::SplitDoorOneShelf)
        .min_width(50.0)
        .predicate("split_door_leaves_not_too_narrow", split_door_leaves_not_too_narrow),
    ConstraintRecord::new(T::SplitDoorTwoShelves)
        .min_width(50.0)
        .min_height(45.0),
    ConstraintRecord::new(T::SplitDoorThreeShelves)
        .min_width(50.0)
        .min_height(65.0),
];

const WARDROBE: &[ConstraintRecord] = &[
    ConstraintRecord::new(T::OneDrawer)
        .min_width(40.0)
        .max_width(100.0),
    ConstraintRecord::new(T::TwoDrawers)
        .min_width(40.0)
        .max_width(100.0),
    ConstraintRecord::new(T::ThreeDrawers)
        .min_width(40.0)
        .max_width(100.0),
    ConstraintRecord::new(T::FourDrawers)
        .min_width(40.0)
        .max_width(100.0),
    ConstraintRecord::new(T::SingleDoorOneShelf).max_width(60.0),
    ConstraintRecord::new(T::SingleDoorTwoShelves).max_width(60.0),
    ConstraintRecord::new(T::SingleDoorThreeShelves).max_width(60.0),
    ConstraintRecord::new(T::SplitDoorOneShelf).min_width(60.0),
    ConstraintRecord::new(T::SplitDoorTwoShelves).min_width(60.0),
    ConstraintRecord::new(T::SplitDoorThreeShelves).min_width(60.0),
];

const RACK: &[ConstraintRecord] = &[
    ConstraintRecord::new(T::OneDrawer)
        .min_width(40.0)
        .max_width(80.0)
        .min_depth(30.0)
        .max_depth(60.0),
    ConstraintRecord::new(T::TwoDrawers)
        .min_width(40.0)
        .max_width(80.0)
        .min_depth(30.0)
        .max_depth(60.0),
    ConstraintRecord::new(T::SplitDoorOneShelf).min_width(50.0),
    ConstraintRecord::new(T::SplitDoorTwoShelves).min_width(50.0),
    ConstraintRecord::new(T::SplitDoorThreeShelves).min_width(50.0),
];

// Bookcases accept every configuration.
const BOOKCASE: &[ConstraintRecord] = &[];

/// Returns the constraint table of a family.
#[must_use]
pub const fn table_for(family: Family) -> &'static [ConstraintRecord] {
    match family {
        Family::Stand => STAND,
        Family::TvStand => TV_STAND,
        Family::Bedside => BEDSIDE,
        Family::Wardrobe => WARDROBE,
        Family::Rack => RACK,
        Family::Bookcase => BOOKCASE,
    }
}

/// Looks up the record for `(family, configuration_type)`.
#[must_use]
pub fn lookup(
    family: Family,
    configuration_type: ConfigurationType,
) -> Option<&'static ConstraintRecord> {
    table_for(family)
        .iter()
        .find(|record| record.configuration_type == configuration_type)
}
