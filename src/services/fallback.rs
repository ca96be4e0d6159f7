//! Replacement selection when a column's configuration stops being valid.
//!
//! Both resolvers are stable: a selection that is still allowed is returned
//! unchanged. Otherwise the first allowed candidate in declared order wins.

use crate::catalog::catalog;
use crate::models::{ConfigurationType, Dimensions, Family, Template};
use crate::services::validator::is_valid;

/// Finds a valid configuration type for the column dimensions.
///
/// 1. `current` is kept if it is still valid
/// 2. with `preferred_drawers`, the first valid type with that drawer count
/// 3. the first valid type in declaration order
///
/// Returns `None` if nothing validates.
#[must_use]
pub fn find_nearest(
    current: ConfigurationType,
    dims: &Dimensions,
    family: Family,
    preferred_drawers: Option<u8>,
) -> Option<ConfigurationType> {
    if is_valid(current, family, dims) {
        return Some(current);
    }

    if let Some(drawers) = preferred_drawers {
        let same_drawers = ConfigurationType::ALL.into_iter().find(|&ty| {
            ty.metadata().drawer_count == drawers && is_valid(ty, family, dims)
        });
        if same_drawers.is_some() {
            return same_drawers;
        }
    }

    ConfigurationType::ALL
        .into_iter()
        .find(|&ty| is_valid(ty, family, dims))
}

/// Finds a template that fits a column of a template-based family.
///
/// Keeps `current` when it exists, belongs to the family and fits; otherwise
/// returns the first fitting template of the family in catalog order.
#[must_use]
pub fn find_fallback_template(
    current: Option<&str>,
    family: Family,
    width: f64,
    height: f64,
) -> Option<&'static Template> {
    let catalog = catalog();

    if let Some(template) = current.and_then(|id| catalog.get(id)) {
        if template.applies_to(family) && template.fits(width, height) {
            return Some(template);
        }
    }

    catalog
        .for_family(family)
        .find(|template| template.fits(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ConfigurationType as T;

    #[test]
    fn test_valid_type_is_kept() {
        let dims = Dimensions::new(50.0, 40.0, 40.0);
        assert!(is_valid(T::TwoDrawers, Family::Stand, &dims));
        assert_eq!(
            find_nearest(T::TwoDrawers, &dims, Family::Stand, Some(4)),
            Some(T::TwoDrawers)
        );
    }

    #[test]
    fn test_first_valid_in_declared_order() {
        // 50 cm wide rules out split doors; 70 cm high rules out one drawer.
        let dims = Dimensions::new(50.0, 70.0, 40.0);
        assert_eq!(
            find_nearest(T::SplitDoorOneShelf, &dims, Family::Stand, None),
            Some(T::TwoDrawers)
        );
    }

    #[test]
    fn test_preferred_drawer_count_wins_over_order() {
        let dims = Dimensions::new(50.0, 70.0, 40.0);
        assert_eq!(
            find_nearest(T::SplitDoorOneShelf, &dims, Family::Stand, Some(3)),
            Some(T::ThreeDrawers)
        );
    }

    #[test]
    fn test_unavailable_preference_falls_back_to_order() {
        // 40 cm high: three drawers need 45 cm.
        let dims = Dimensions::new(50.0, 40.0, 40.0);
        assert_eq!(
            find_nearest(T::SplitDoorTwoShelves, &dims, Family::Stand, Some(3)),
            Some(T::OneDrawer)
        );
    }

    #[test]
    fn test_degenerate_dimensions_yield_valid_or_none() {
        let dims = Dimensions::new(-1.0, -1.0, -1.0);
        for family in Family::ALL {
            for ty in ConfigurationType::ALL {
                if let Some(found) = find_nearest(ty, &dims, family, Some(2)) {
                    assert!(is_valid(found, family, &dims));
                }
            }
        }
    }

    #[test]
    fn test_find_nearest_is_idempotent() {
        let dims = Dimensions::new(55.0, 80.0, 35.0);
        for family in Family::ALL {
            for ty in ConfigurationType::ALL {
                if let Some(found) = find_nearest(ty, &dims, family, None) {
                    assert_eq!(find_nearest(found, &dims, family, None), Some(found));
                }
            }
        }
    }

    #[test]
    fn test_fitting_template_is_kept() {
        let template = find_fallback_template(
            Some("FULL_HANGING_WITH_1_SHELF"),
            Family::Wardrobe,
            90.0,
            226.0,
        );
        assert_eq!(template.map(|t| t.id.as_str()), Some("FULL_HANGING_WITH_1_SHELF"));
    }

    #[test]
    fn test_template_too_tall_falls_back_in_catalog_order() {
        // DOUBLE_HANGING needs 190 cm; at 150 cm FULL_HANGING is the first fit.
        let template =
            find_fallback_template(Some("DOUBLE_HANGING"), Family::Wardrobe, 80.0, 150.0);
        assert_eq!(template.map(|t| t.id.as_str()), Some("FULL_HANGING"));
    }

    #[test]
    fn test_template_of_other_family_is_replaced() {
        let template = find_fallback_template(Some("FULL_HANGING"), Family::Rack, 60.0, 180.0);
        assert_eq!(template.map(|t| t.id.as_str()), Some("SHELVES_ONLY"));
    }

    #[test]
    fn test_unknown_template_is_replaced() {
        let template = find_fallback_template(Some("NOPE"), Family::Bookcase, 60.0, 180.0);
        assert!(template.is_some_and(|t| t.applies_to(Family::Bookcase)));
    }

    #[test]
    fn test_no_fitting_template() {
        assert!(find_fallback_template(None, Family::Wardrobe, 10.0, 10.0).is_none());
        assert!(find_fallback_template(None, Family::Stand, 80.0, 80.0).is_none());
    }
}
