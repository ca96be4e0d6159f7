//! Width-banded column splitting for every family.
//!
//! Wardrobes and racks map a width band to a fixed split. Stands, TV stands
//! and bedside tables map a width band to the set of column counts that are
//! allowed; the caller keeps whichever allowed count is closest to what it
//! had before.

use crate::models::{ColumnKind, ColumnLayout, Family};
use tracing::warn;

/// Width band of a configuration-type family and the column counts it allows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountBand {
    /// Lowest width of the band (inclusive)
    pub min_width: f64,
    /// Highest width of the band (inclusive)
    pub max_width: f64,
    /// Column counts allowed inside the band
    pub counts: &'static [usize],
}

const fn band(min_width: f64, max_width: f64, counts: &'static [usize]) -> CountBand {
    CountBand {
        min_width,
        max_width,
        counts,
    }
}

const STAND_BANDS: &[CountBand] = &[
    band(50.0, 84.0, &[1]),
    band(85.0, 104.0, &[1, 2]),
    band(105.0, 149.0, &[2]),
    band(150.0, 205.0, &[2, 3]),
    band(206.0, 270.0, &[3]),
];

const TV_STAND_BANDS: &[CountBand] = &[
    band(80.0, 119.0, &[1, 2]),
    band(120.0, 159.0, &[2]),
    band(160.0, 209.0, &[2, 3]),
    band(210.0, 300.0, &[3, 4]),
];

const BEDSIDE_BANDS: &[CountBand] = &[band(35.0, 59.0, &[1]), band(60.0, 80.0, &[1, 2])];

/// Count bands of a configuration-type family; empty for template families.
#[must_use]
pub const fn count_bands(family: Family) -> &'static [CountBand] {
    match family {
        Family::Stand => STAND_BANDS,
        Family::TvStand => TV_STAND_BANDS,
        Family::Bedside => BEDSIDE_BANDS,
        Family::Wardrobe | Family::Rack | Family::Bookcase => &[],
    }
}

/// Splits a wardrobe into columns.
///
/// | width (cm) | columns                                  |
/// |------------|------------------------------------------|
/// | 40–60      | 1 narrow                                 |
/// | 61–100     | 1 wide                                   |
/// | 101–120    | 2 narrow, equal                          |
/// | 121–150    | 1 wide (2/3) + 1 narrow (1/3)            |
/// | 151–200    | 2 wide, equal                            |
/// | ≥ 201      | 2 wide (2/5 each) + 1 narrow (1/5)       |
///
/// Anything below 40 cm becomes one full-width column.
#[must_use]
pub fn wardrobe_layout(width: f64) -> ColumnLayout {
    use ColumnKind::{Narrow, Wide};

    let (fractions, kinds) = if width < 40.0 {
        return single_column(width, Narrow);
    } else if width <= 60.0 {
        (vec![1.0], vec![Narrow])
    } else if width <= 100.0 {
        (vec![1.0], vec![Wide])
    } else if width <= 120.0 {
        (vec![0.5, 0.5], vec![Narrow, Narrow])
    } else if width <= 150.0 {
        (vec![2.0 / 3.0, 1.0 / 3.0], vec![Wide, Narrow])
    } else if width <= 200.0 {
        (vec![0.5, 0.5], vec![Wide, Wide])
    } else {
        (vec![0.4, 0.4, 0.2], vec![Wide, Wide, Narrow])
    };

    split_by_fractions(width, fractions, kinds)
}

/// Splits a rack or bookcase into equal columns.
///
/// 40–80 cm gives 1 column, 81–160 cm gives 2 and 161–250 cm gives 3.
/// Widths outside 40–250 cm fall back to one column and log a warning.
#[must_use]
pub fn rack_layout(width: f64) -> ColumnLayout {
    let count = if (40.0..=80.0).contains(&width) {
        1
    } else if width > 80.0 && width <= 160.0 {
        2
    } else if width > 160.0 && width <= 250.0 {
        3
    } else {
        warn!(width, "rack width outside 40-250 cm, using a single column");
        return single_column(width, ColumnKind::Standard);
    };

    equal_split(width, count)
}

/// Column counts allowed at `width` for a configuration-type family.
///
/// Widths outside every band (and template families) allow one column only.
#[must_use]
pub fn valid_column_counts(family: Family, width: f64) -> Vec<usize> {
    count_bands(family)
        .iter()
        .find(|band| width >= band.min_width && width <= band.max_width)
        .map_or_else(|| vec![1], |band| band.counts.to_vec())
}

/// Picks the allowed column count closest to `previous`; ties go to the
/// lower count. Without a previous count the lowest allowed count wins.
#[must_use]
pub fn choose_column_count(family: Family, width: f64, previous: Option<usize>) -> usize {
    let counts = valid_column_counts(family, width);
    let target = previous.unwrap_or(0);

    counts
        .iter()
        .copied()
        .min_by_key(|&count| (count.abs_diff(target), count))
        .unwrap_or(1)
}

/// Splits a stand, TV stand or bedside table into `count` equal columns.
#[must_use]
pub fn stand_layout(width: f64, count: usize) -> ColumnLayout {
    equal_split(width, count.max(1))
}

/// Computes the column layout of any family.
///
/// `previous_count` only matters for families with count bands.
#[must_use]
pub fn calculate_column_layout(
    family: Family,
    width: f64,
    previous_count: Option<usize>,
) -> ColumnLayout {
    match family {
        Family::Wardrobe => wardrobe_layout(width),
        Family::Rack | Family::Bookcase => rack_layout(width),
        Family::Stand | Family::TvStand | Family::Bedside => {
            stand_layout(width, choose_column_count(family, width, previous_count))
        }
    }
}

fn single_column(width: f64, kind: ColumnKind) -> ColumnLayout {
    ColumnLayout::from_widths(vec![width], vec![kind])
}

#[allow(clippy::cast_precision_loss)]
fn equal_split(width: f64, count: usize) -> ColumnLayout {
    let column_width = width / count as f64;
    ColumnLayout::from_widths(
        vec![column_width; count],
        vec![ColumnKind::Standard; count],
    )
}

fn split_by_fractions(width: f64, fractions: Vec<f64>, kinds: Vec<ColumnKind>) -> ColumnLayout {
    let mut widths: Vec<f64> = fractions.iter().map(|fraction| width * fraction).collect();

    // Last column takes the floating-point remainder so the sum is exact.
    if let Some((last, rest)) = widths.split_last_mut() {
        *last = width - rest.iter().sum::<f64>();
    }

    ColumnLayout::from_widths(widths, kinds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_widths_sum(layout: &ColumnLayout, width: f64) {
        assert!(
            (layout.total_width() - width).abs() <= 1.0,
            "widths {:?} do not sum to {width}",
            layout.column_widths_cm
        );
    }

    fn assert_strictly_increasing(layout: &ColumnLayout) {
        for pair in layout.column_positions_cm.windows(2) {
            assert!(pair[0] < pair[1], "{:?}", layout.column_positions_cm);
        }
    }

    #[test]
    fn test_wardrobe_180_is_two_equal_wide_columns() {
        let layout = wardrobe_layout(180.0);
        assert_eq!(layout.column_count, 2);
        assert_eq!(layout.column_widths_cm, vec![90.0, 90.0]);
        assert_eq!(layout.column_positions_cm, vec![-45.0, 45.0]);
        assert_eq!(layout.column_kinds, vec![ColumnKind::Wide, ColumnKind::Wide]);
    }

    #[test]
    fn test_wardrobe_bands() {
        let cases: &[(f64, usize, &[ColumnKind])] = &[
            (50.0, 1, &[ColumnKind::Narrow]),
            (60.0, 1, &[ColumnKind::Narrow]),
            (61.0, 1, &[ColumnKind::Wide]),
            (110.0, 2, &[ColumnKind::Narrow, ColumnKind::Narrow]),
            (150.0, 2, &[ColumnKind::Wide, ColumnKind::Narrow]),
            (151.0, 2, &[ColumnKind::Wide, ColumnKind::Wide]),
            (
                250.0,
                3,
                &[ColumnKind::Wide, ColumnKind::Wide, ColumnKind::Narrow],
            ),
        ];

        for (width, count, kinds) in cases {
            let layout = wardrobe_layout(*width);
            assert_eq!(layout.column_count, *count, "width {width}");
            assert_eq!(layout.column_kinds, kinds.to_vec(), "width {width}");
            assert_widths_sum(&layout, *width);
            assert_strictly_increasing(&layout);
        }
    }

    #[test]
    fn test_wardrobe_ratio_splits() {
        let layout = wardrobe_layout(135.0);
        assert!((layout.column_widths_cm[0] - 90.0).abs() < 1e-9);
        assert!((layout.column_widths_cm[1] - 45.0).abs() < 1e-9);

        let layout = wardrobe_layout(250.0);
        assert!((layout.column_widths_cm[0] - 100.0).abs() < 1e-9);
        assert!((layout.column_widths_cm[2] - 50.0).abs() < 1e-9);
        assert!((layout.column_positions_cm[0] + 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_wardrobe_below_range_is_single_column() {
        let layout = wardrobe_layout(25.0);
        assert_eq!(layout.column_count, 1);
        assert_eq!(layout.column_widths_cm, vec![25.0]);
        assert_eq!(layout.column_positions_cm, vec![0.0]);
    }

    #[test]
    fn test_rack_bands() {
        assert_eq!(rack_layout(80.0).column_count, 1);
        assert_eq!(rack_layout(81.0).column_count, 2);
        assert_eq!(rack_layout(160.0).column_count, 2);
        assert_eq!(rack_layout(161.0).column_count, 3);
        assert_eq!(rack_layout(250.0).column_count, 3);

        let layout = rack_layout(240.0);
        assert_eq!(layout.column_widths_cm, vec![80.0, 80.0, 80.0]);
        assert_eq!(layout.column_positions_cm, vec![-80.0, 0.0, 80.0]);
    }

    #[test]
    fn test_rack_out_of_range_falls_back_to_one_column() {
        for width in [0.0, -20.0, 39.0, 251.0, 1000.0] {
            let layout = rack_layout(width);
            assert_eq!(layout.column_count, 1);
            assert_eq!(layout.column_widths_cm, vec![width]);
        }
    }

    #[test]
    fn test_every_band_reconstructs_width() {
        let mut width = 30.0;
        while width <= 320.0 {
            for family in Family::ALL {
                let layout = calculate_column_layout(family, width, None);
                assert_widths_sum(&layout, width);
                assert_strictly_increasing(&layout);
                assert_eq!(layout.column_widths_cm.len(), layout.column_count);
                assert_eq!(layout.column_positions_cm.len(), layout.column_count);
            }
            width += 0.5;
        }
    }

    #[test]
    fn test_stand_valid_counts() {
        assert_eq!(valid_column_counts(Family::Stand, 60.0), vec![1]);
        assert_eq!(valid_column_counts(Family::Stand, 90.0), vec![1, 2]);
        assert_eq!(valid_column_counts(Family::Stand, 120.0), vec![2]);
        assert_eq!(valid_column_counts(Family::Stand, 180.0), vec![2, 3]);
        assert_eq!(valid_column_counts(Family::Stand, 230.0), vec![3]);
        assert_eq!(valid_column_counts(Family::Stand, 300.0), vec![1]);
        assert_eq!(valid_column_counts(Family::Wardrobe, 180.0), vec![1]);
    }

    #[test]
    fn test_choose_column_count_prefers_previous() {
        assert_eq!(choose_column_count(Family::Stand, 180.0, Some(3)), 3);
        assert_eq!(choose_column_count(Family::Stand, 180.0, Some(2)), 2);
        // 1 is not allowed; 2 is closest.
        assert_eq!(choose_column_count(Family::Stand, 180.0, Some(1)), 2);
        assert_eq!(choose_column_count(Family::Stand, 230.0, Some(1)), 3);
        assert_eq!(choose_column_count(Family::Stand, 180.0, None), 2);
    }

    #[test]
    fn test_choose_column_count_clamps_to_band() {
        // TV stand 210-300 allows 3 and 4.
        assert_eq!(choose_column_count(Family::TvStand, 250.0, Some(5)), 4);
        assert_eq!(choose_column_count(Family::TvStand, 250.0, Some(2)), 3);
        // Bedside 60-80 allows 1 and 2; previous 0 sits closer to 1.
        assert_eq!(choose_column_count(Family::Bedside, 70.0, Some(0)), 1);
    }

    #[test]
    fn test_stand_layout_equal_split() {
        let layout = calculate_column_layout(Family::Stand, 180.0, Some(3));
        assert_eq!(layout.column_count, 3);
        assert_eq!(layout.column_widths_cm, vec![60.0, 60.0, 60.0]);
        assert_eq!(layout.column_positions_cm, vec![-60.0, 0.0, 60.0]);
    }
}
