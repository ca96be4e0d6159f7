//! Price calculation from final geometry.

use crate::models::Family;
use serde::Serialize;

/// Pricing coefficients of one family.
///
/// ```text
/// price = round((base
///              + width * width_rate
///              + (height - height_threshold) * height_rate
///              + (depth - depth_threshold) * depth_rate
///              + extra_cost_sum
///              + fittings_per_column * columns) * markup)
/// ```
///
/// Heights and depths below their threshold lower the price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceTable {
    /// Fixed carcass cost
    pub base: f64,
    /// Cost per cm of width
    pub width_rate: f64,
    /// Height included in the base price
    pub height_threshold: f64,
    /// Cost per cm of height above the threshold
    pub height_rate: f64,
    /// Depth included in the base price
    pub depth_threshold: f64,
    /// Cost per cm of depth above the threshold
    pub depth_rate: f64,
    /// Hinges, runners and rails per column
    pub fittings_per_column: f64,
    /// Final multiplier
    pub markup: f64,
}

const WARDROBE: PriceTable = PriceTable {
    base: 450.0,
    width_rate: 9.5,
    height_threshold: 200.0,
    height_rate: 4.0,
    depth_threshold: 60.0,
    depth_rate: 6.0,
    fittings_per_column: 85.0,
    markup: 1.35,
};

const RACK: PriceTable = PriceTable {
    base: 180.0,
    width_rate: 4.2,
    height_threshold: 100.0,
    height_rate: 2.1,
    depth_threshold: 30.0,
    depth_rate: 3.5,
    fittings_per_column: 25.0,
    markup: 1.3,
};

const BOOKCASE: PriceTable = PriceTable {
    base: 160.0,
    width_rate: 3.9,
    height_threshold: 100.0,
    height_rate: 2.0,
    depth_threshold: 30.0,
    depth_rate: 3.0,
    fittings_per_column: 20.0,
    markup: 1.3,
};

const STAND: PriceTable = PriceTable {
    base: 260.0,
    width_rate: 5.5,
    height_threshold: 50.0,
    height_rate: 3.2,
    depth_threshold: 40.0,
    depth_rate: 4.0,
    fittings_per_column: 45.0,
    markup: 1.4,
};

const TV_STAND: PriceTable = PriceTable {
    base: 240.0,
    width_rate: 5.0,
    height_threshold: 40.0,
    height_rate: 3.0,
    depth_threshold: 40.0,
    depth_rate: 3.8,
    fittings_per_column: 40.0,
    markup: 1.4,
};

const BEDSIDE: PriceTable = PriceTable {
    base: 150.0,
    width_rate: 4.0,
    height_threshold: 45.0,
    height_rate: 2.5,
    depth_threshold: 35.0,
    depth_rate: 2.5,
    fittings_per_column: 30.0,
    markup: 1.4,
};

impl PriceTable {
    /// Coefficients of a family.
    #[must_use]
    pub const fn for_family(family: Family) -> Self {
        match family {
            Family::Wardrobe => WARDROBE,
            Family::Rack => RACK,
            Family::Bookcase => BOOKCASE,
            Family::Stand => STAND,
            Family::TvStand => TV_STAND,
            Family::Bedside => BEDSIDE,
        }
    }
}

/// Computes the displayed price of a piece.
///
/// Non-finite inputs count as zero and a negative total is clamped to zero,
/// so the function is total and never returns a negative price.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn price(
    width: f64,
    height: f64,
    depth: f64,
    columns: usize,
    extra_cost_sum: f64,
    family: Family,
) -> i64 {
    let table = PriceTable::for_family(family);
    let columns = u32::try_from(columns).unwrap_or(u32::MAX);

    let finite = |value: f64| if value.is_finite() { value } else { 0.0 };

    let subtotal = table.base
        + finite(width) * table.width_rate
        + (finite(height) - table.height_threshold) * table.height_rate
        + (finite(depth) - table.depth_threshold) * table.depth_rate
        + finite(extra_cost_sum)
        + table.fittings_per_column * f64::from(columns);

    let total = (subtotal * table.markup).round();
    if total.is_finite() {
        total.max(0.0) as i64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wardrobe_reference_price() {
        // (450 + 180*9.5 + 36*4 + 0 + 15 + 2*85) * 1.35
        //   = (450 + 1710 + 144 + 15 + 170) * 1.35 = 2489 * 1.35 = 3360.15
        assert_eq!(price(180.0, 236.0, 60.0, 2, 15.0, Family::Wardrobe), 3360);
    }

    #[test]
    fn test_below_thresholds_lowers_price() {
        // (180 + 420 + 0 + 0 + 50) * 1.3 = 845
        assert_eq!(price(100.0, 100.0, 30.0, 2, 0.0, Family::Rack), 845);
        // 20 cm lower and 5 cm shallower: -(42 + 17.5) * 1.3 = -77.35
        assert_eq!(price(100.0, 80.0, 25.0, 2, 0.0, Family::Rack), 768);
    }

    #[test]
    fn test_price_is_monotonic_in_each_dimension() {
        for family in Family::ALL {
            let mut value = 0.0;
            while value <= 320.0 {
                let next = value + 0.5;
                assert!(
                    price(value, 150.0, 45.0, 2, 0.0, family)
                        <= price(next, 150.0, 45.0, 2, 0.0, family),
                    "{family} width {value}"
                );
                assert!(
                    price(120.0, value, 45.0, 2, 0.0, family)
                        <= price(120.0, next, 45.0, 2, 0.0, family),
                    "{family} height {value}"
                );
                assert!(
                    price(120.0, 150.0, value, 2, 0.0, family)
                        <= price(120.0, 150.0, next, 2, 0.0, family),
                    "{family} depth {value}"
                );
                value = next;
            }
        }
    }

    #[test]
    fn test_extras_and_columns_add_cost() {
        let plain = price(120.0, 180.0, 40.0, 1, 0.0, Family::Bookcase);
        assert!(price(120.0, 180.0, 40.0, 2, 0.0, Family::Bookcase) > plain);
        assert!(price(120.0, 180.0, 40.0, 1, 60.0, Family::Bookcase) > plain);
    }

    #[test]
    fn test_degenerate_inputs_are_total() {
        for family in Family::ALL {
            assert!(price(-100.0, -100.0, -100.0, 0, -50.0, family) >= 0);
            assert_eq!(
                price(f64::NAN, 100.0, 40.0, 1, 0.0, family),
                price(0.0, 100.0, 40.0, 1, 0.0, family)
            );
        }
    }
}
