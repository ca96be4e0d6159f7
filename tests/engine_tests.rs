//! Library-level tests of the full pipeline across families and sizes.

use shelfwright::catalog::catalog;
use shelfwright::models::{ColumnConfiguration, ColumnSelection, Design, Family};
use shelfwright::parser::{decode, encode, load_design, parse_design, save_design};
use shelfwright::services::{compute, is_valid, resolve_zones};
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_every_family_produces_a_consistent_outcome() {
    for family in Family::ALL {
        for width in [30.0, 45.0, 80.0, 120.0, 180.0, 240.0, 320.0] {
            for height in [40.0, 90.0, 150.0, 236.0] {
                let design = Design::new(family, outer(width, height, 40.0, 5.0));
                let outcome = compute(&design);

                assert_eq!(outcome.columns.len(), outcome.layout.column_count);
                let total: f64 = outcome.layout.column_widths_cm.iter().sum();
                assert!((total - width).abs() < 1e-6, "{family} {width}: {total}");
                assert!(outcome.price >= 0);
                assert_eq!(outcome.url.is_some(), family.uses_templates());

                for (idx, column) in outcome.columns.iter().enumerate() {
                    if let Some(ty) = column.configuration_type {
                        let dims = design
                            .dimensions
                            .column(outcome.layout.column_widths_cm[idx]);
                        assert!(is_valid(ty, family, &dims), "{family} {width}x{height} {ty}");
                    }
                    if !column.zones.is_empty() {
                        let sum: i64 = column.zones.iter().map(|z| i64::from(z.height_cm)).sum();
                        assert_eq!(sum, i64::from(outcome.column_height_cm));
                    }
                }
            }
        }
    }
}

#[test]
fn test_recompute_is_stable() {
    let first = compute(&test_design_wardrobe());

    let mut design = test_design_wardrobe();
    design.columns.clone_from(&first.columns);
    let second = compute(&design);

    assert_eq!(first, second);
}

#[test]
fn test_shrinking_replaces_templates_that_no_longer_fit() {
    let mut design = Design::new(Family::Wardrobe, outer(90.0, 240.0, 60.0, 0.0));
    design.columns = vec![ColumnConfiguration::with_template("HANGING_SHELVES_DRAWERS")];
    assert_eq!(
        compute(&design).columns[0].template_id.as_deref(),
        Some("HANGING_SHELVES_DRAWERS")
    );

    // 170 cm is below the 200 cm this template needs.
    design.dimensions.height = 170.0;
    let outcome = compute(&design);
    let id = outcome.columns[0].template_id.as_deref().expect("template column");
    assert_ne!(id, "HANGING_SHELVES_DRAWERS");
    assert!(catalog().get(id).is_some_and(|t| t.fits(90.0, 170.0)));
}

#[test]
fn test_catalog_zones_fill_any_height() {
    for template in catalog().all() {
        for height in (40..=300).step_by(7) {
            let stack = resolve_zones(template, height);
            assert_eq!(stack.total_height(), i64::from(height), "{} at {height}", template.id);
            assert!(stack.zones.iter().all(|z| z.height_cm >= 0), "{} at {height}", template.id);
        }
    }
}

#[test]
fn test_every_catalog_template_has_a_url_code() {
    let selections: Vec<_> = catalog()
        .all()
        .iter()
        .map(|t| ColumnSelection::new(t.id.clone(), true))
        .collect();

    let encoded = encode(&selections);
    assert!(!encoded.contains("SO,SO"), "{encoded}");
    assert_eq!(decode(&encoded), selections);
}

#[test]
fn test_design_file_survives_save_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("wardrobe.json");
    let outcome = compute(&test_design_wardrobe());

    let mut design = test_design_wardrobe();
    design.columns = outcome.columns;
    save_design(&design, &path).unwrap();

    let loaded = load_design(&path).unwrap();
    assert_eq!(loaded, design);
    assert_eq!(compute(&loaded).price, 3360);
}

#[test]
fn test_parse_design_accepts_minimal_json() {
    let design = parse_design(r#"{"family": "rack", "width": 160, "height": 180, "depth": 35}"#)
        .expect("minimal design should parse");

    assert_eq!(design.dimensions.plinth_height, 0.0);
    let outcome = compute(&design);
    assert_eq!(outcome.layout.column_count, 2);
    assert_eq!(outcome.url.as_deref(), Some("SO,SO"));
}
