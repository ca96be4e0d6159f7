//! End-to-end tests for `shelfwright zones` and `shelfwright templates`.

mod fixtures;
use fixtures::*;

fn heights(result: &serde_json::Value) -> Vec<i64> {
    result["zones"]
        .as_array()
        .expect("zones should be an array")
        .iter()
        .map(|zone| zone["height_cm"].as_i64().expect("height should be an integer"))
        .collect()
}

#[test]
fn test_zones_fill_the_column() {
    for height in [150, 226, 251] {
        let height_arg = height.to_string();
        let (code, result) = run_json(&[
            "zones",
            "-t",
            "HANGING_SHELVES_DRAWERS",
            "--height",
            &height_arg,
            "--json",
        ]);

        assert_eq!(code, Some(0));
        assert_eq!(result["template_id"], "HANGING_SHELVES_DRAWERS");
        assert_eq!(result["available_height_cm"], height);
        assert_eq!(heights(&result).iter().sum::<i64>(), i64::from(height));
    }
}

#[test]
fn test_zones_detail_shelves_and_drawers() {
    let (_, result) = run_json(&["zones", "-t", "SHELVES_WITH_DRAWERS", "--height", "226", "--json"]);

    assert_eq!(heights(&result), vec![68, 158]);
    assert_eq!(result["degraded"], false);

    let drawers = &result["zones"][0];
    assert_eq!(drawers["kind"], "drawers");
    let fronts = drawers["drawer_heights_cm"].as_array().expect("drawer fronts");
    assert!(!fronts.is_empty());

    let shelves = &result["zones"][1];
    assert_eq!(shelves["kind"], "shelves");
    assert!(shelves["shelf_count"].as_u64().is_some());
    assert_eq!(result["door_zone_indices"], serde_json::json!([1]));
}

#[test]
fn test_zones_degraded_when_too_short() {
    // Both zones are behind the door and need 120 cm together.
    let (code, result) = run_json(&["zones", "-t", "FULL_HANGING", "--height", "100", "--json"]);

    assert_eq!(code, Some(0), "Best-effort stacks still succeed");
    assert_eq!(result["degraded"], true);
    assert_eq!(result["unmet_door_deficit_cm"], 20);
    assert_eq!(heights(&result), vec![85, 15]);
}

#[test]
fn test_zones_degraded_human_warning() {
    let output = run(&["zones", "-t", "FULL_HANGING", "--height", "100"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("⚠"), "stdout: {stdout}");
    assert!(stdout.contains("20 cm short"), "stdout: {stdout}");
}

#[test]
fn test_zones_unknown_template() {
    let output = run(&["zones", "-t", "NOT_A_TEMPLATE", "--height", "200"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("NOT_A_TEMPLATE"));
}

#[test]
fn test_templates_list_all() {
    let (code, result) = run_json(&["templates", "--json"]);

    assert_eq!(code, Some(0));
    assert_eq!(result["count"], 12);
    assert_eq!(result["catalog_version"], "1.0");
    assert_eq!(result["templates"][0]["id"], "FULL_HANGING");
    assert_eq!(result["templates"][0]["code"], "FH");
}

#[test]
fn test_templates_filter_by_family() {
    let (_, result) = run_json(&["templates", "--family", "rack", "--json"]);

    assert_eq!(result["count"], 6);
    let templates = result["templates"].as_array().expect("templates array");
    assert!(templates.iter().all(|t| t["families"]
        .as_array()
        .is_some_and(|families| families.contains(&serde_json::json!("rack")))));
    assert!(templates.iter().any(|t| t["id"] == "SHELVES_ONLY"));
}

#[test]
fn test_zones_extreme_negative_height() {
    let (code, result) = run_json(&[
        "zones",
        "-t",
        "FULL_HANGING",
        "--height",
        "-2147483648",
        "--json",
    ]);

    assert_eq!(code, Some(0));
    assert_eq!(result["degraded"], true);
    assert_eq!(heights(&result).iter().sum::<i64>(), i64::from(i32::MIN));
}
