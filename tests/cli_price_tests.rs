//! End-to-end tests for `shelfwright price`.

mod fixtures;
use fixtures::*;

#[test]
fn test_price_wardrobe_with_templates() {
    let (code, result) = run_json(&[
        "price",
        "-f",
        "wardrobe",
        "-w",
        "180",
        "--height",
        "236",
        "-d",
        "60",
        "--template",
        "FULL_HANGING_WITH_1_SHELF",
        "--template",
        "SHELVES_ONLY",
        "--json",
    ]);

    assert_eq!(code, Some(0));
    assert_eq!(result["columns"], 2, "Column count comes from the layout");
    assert_eq!(result["extra_cost"], 15.0);
    assert_eq!(result["price"], 3360);
}

#[test]
fn test_price_rack_below_thresholds() {
    let (_, result) = run_json(&[
        "price", "-f", "rack", "-w", "100", "--height", "100", "-d", "30", "--json",
    ]);
    assert_eq!(result["columns"], 2);
    assert_eq!(result["price"], 845);

    let (_, lower) = run_json(&[
        "price", "-f", "rack", "-w", "100", "--height", "80", "-d", "25", "--columns", "2",
        "--json",
    ]);
    assert_eq!(lower["price"], 768);
}

#[test]
fn test_price_degenerate_dimensions_clamp_to_zero() {
    let (code, result) = run_json(&[
        "price", "-f", "bedside", "-w", "-100", "--height", "-100", "-d", "-100", "--columns",
        "0", "--json",
    ]);

    assert_eq!(code, Some(0));
    assert!(result["price"].as_i64().is_some_and(|p| p >= 0));
}

#[test]
fn test_price_unknown_template() {
    let output = run(&["price", "-f", "wardrobe", "-w", "180", "--template", "NOPE"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown template 'NOPE'"));
}

#[test]
fn test_price_human_output() {
    let output = run(&[
        "price", "-f", "rack", "-w", "100", "--height", "100", "-d", "30",
    ]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(": 845"), "stdout: {stdout}");
}
