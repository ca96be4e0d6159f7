//! End-to-end tests for `shelfwright columns`.

mod fixtures;
use fixtures::*;

#[test]
fn test_columns_wardrobe_json() {
    let (code, result) = run_json(&["columns", "-f", "wardrobe", "-w", "180", "--json"]);

    assert_eq!(code, Some(0));
    assert_eq!(result["family"], "wardrobe");
    assert_eq!(result["column_count"], 2);
    assert_eq!(result["column_widths_cm"], serde_json::json!([90.0, 90.0]));
    assert_eq!(result["column_positions_cm"], serde_json::json!([-45.0, 45.0]));
    assert_eq!(result["column_kinds"], serde_json::json!(["wide", "wide"]));
    assert!(
        result.get("valid_counts").is_none(),
        "Template families have no count choice"
    );
}

#[test]
fn test_columns_rack_three_equal() {
    let (code, result) = run_json(&["columns", "--family", "rack", "--width", "240", "--json"]);

    assert_eq!(code, Some(0));
    assert_eq!(result["column_count"], 3);
    assert_eq!(result["column_widths_cm"], serde_json::json!([80.0, 80.0, 80.0]));
    assert_eq!(result["column_positions_cm"], serde_json::json!([-80.0, 0.0, 80.0]));
}

#[test]
fn test_columns_stand_keeps_previous_count() {
    let (code, result) = run_json(&[
        "columns", "-f", "stand", "-w", "180", "--previous", "3", "--json",
    ]);

    assert_eq!(code, Some(0));
    assert_eq!(result["column_count"], 3);
    assert_eq!(result["valid_counts"], serde_json::json!([2, 3]));
}

#[test]
fn test_columns_stand_previous_out_of_band() {
    let (_, result) = run_json(&[
        "columns", "-f", "stand", "-w", "180", "--previous", "1", "--json",
    ]);
    assert_eq!(result["column_count"], 2);
}

#[test]
fn test_columns_human_output() {
    let output = run(&["columns", "-f", "wardrobe", "-w", "180"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 column(s)"), "stdout: {stdout}");
    assert!(stdout.contains("90.0 cm"), "stdout: {stdout}");
}

#[test]
fn test_columns_unknown_family_is_usage_error() {
    let output = run(&["columns", "-f", "sofa", "-w", "180"]);

    assert_eq!(output.status.code(), Some(2), "clap usage errors exit with 2");
    assert!(String::from_utf8_lossy(&output.stderr).contains("sofa"));
}
