//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

const MARKET_ANALYSIS: &str = "\
Thanks for the details, here is the estimate.

**1. Estimated Price Range**
- Private-party offers should land around $15,000 - $18,000.

**Key Pricing Factors**
- Location: Urban areas command a premium
- Mileage: Slightly above average for the model year

**Market Trends**
- Compact sedans remain in popular with commuters across most regions.
";

const COMPARISON: &str = "\
**1. Performance**
Honda Civic 2020: 2.0L engine with 158 hp
- Civic is quicker from a standstill
Winner: Honda Civic

**Final Recommendation**
The Civic suits drivers who value performance.
";

fn write_json(dir: &TempDir, name: &str, value: &Value) -> String {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string(value).expect("json")).expect("write input");
    path.to_str().expect("utf8 path").to_string()
}

fn market_file(dir: &TempDir) -> String {
    write_json(
        dir,
        "market.json",
        &json!({
            "market_analysis": MARKET_ANALYSIS,
            "estimated_price": "['₹28,00,000', '₹26,00,000', '₹30,00,000']",
            "factors": {"mileage_impact": "High mileage reduces value"}
        }),
    )
}

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("report-format"))
}

#[test]
fn test_cli_version() {
    cmd().arg("--version").assert().success().stdout(predicate::str::contains("report-format"));
}

#[test]
fn test_cli_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("market"))
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("factors"))
        .stdout(predicate::str::contains("price"));
}

#[test]
fn test_market_text_output() {
    let dir = TempDir::new().expect("tmp");
    let input = market_file(&dir);

    cmd()
        .current_dir(dir.path())
        .args(["market", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("Price range: ₹26,00,000 - ₹30,00,000"))
        .stdout(predicate::str::contains("Estimated Price Range"))
        .stdout(predicate::str::contains("  • Compact sedans remain popular with commuters"))
        .stdout(predicate::str::contains("Mileage: High mileage reduces value"))
        .stdout(predicate::str::contains("Urban areas command a premium").not());
}

#[test]
fn test_market_json_output() {
    let dir = TempDir::new().expect("tmp");
    let input = market_file(&dir);

    let output = cmd()
        .current_dir(dir.path())
        .args(["market", &input, "--format", "json"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let parsed: Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(parsed["price"]["min"], json!("₹26,00,000"));
    assert_eq!(parsed["price"]["source"], json!("array_string"));
    assert_eq!(parsed["sections"][1]["title"], json!("Market Trends"));
    assert_eq!(parsed["sections"][1]["content"][0]["tag"], json!("bullet"));
    assert_eq!(parsed["factors"], json!([{"name": "Mileage", "description": "High mileage reduces value"}]));
}

#[test]
fn test_factors_from_text_block_via_stdin() {
    let dir = TempDir::new().expect("tmp");
    let body = json!({"market_analysis": MARKET_ANALYSIS}).to_string();

    cmd()
        .current_dir(dir.path())
        .args(["factors", "-"])
        .write_stdin(body)
        .assert()
        .success()
        .stdout("Location: Urban areas command a premium\nMileage: Slightly above average for the model year\n");
}

#[test]
fn test_price_placeholder() {
    let dir = TempDir::new().expect("tmp");
    let input = write_json(&dir, "empty.json", &json!({"estimated_price": "Price not available"}));

    cmd()
        .current_dir(dir.path())
        .args(["price", &input])
        .assert()
        .success()
        .stdout("Price range: Price not available\n");
}

#[test]
fn test_price_numeric_bounds_json() {
    let dir = TempDir::new().expect("tmp");
    let input =
        write_json(&dir, "range.json", &json!({"price_range": {"min": 15000, "max": 18000}}));

    let output = cmd()
        .current_dir(dir.path())
        .args(["price", &input, "-f", "json"])
        .output()
        .expect("run");
    let parsed: Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(parsed, json!({"min": "$15,000", "max": "$18,000", "source": "numeric_bounds"}));
}

#[test]
fn test_config_file_changes_placeholder() {
    let dir = TempDir::new().expect("tmp");
    let input = write_json(&dir, "empty.json", &json!({}));
    fs::write(dir.path().join("report-format.toml"), "price_placeholder = 'Range not available'\n")
        .expect("write config");

    cmd()
        .current_dir(dir.path())
        .args(["price", &input])
        .assert()
        .success()
        .stdout("Price range: Range not available\n");
}

#[test]
fn test_compare_with_entities() {
    let dir = TempDir::new().expect("tmp");
    let input = write_json(&dir, "compare.json", &json!({"comparison": COMPARISON}));

    cmd()
        .current_dir(dir.path())
        .args(["compare", &input, "--entity", "Honda Civic,Toyota Corolla"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Performance\n  ## Honda Civic 2020: 2.0L engine with 158 hp"))
        .stdout(predicate::str::contains("  • Civic is quicker from a standstill"))
        .stdout(predicate::str::contains("  ## Winner: Honda Civic"))
        .stdout(predicate::str::contains(
            "Recommendation\nThe Civic suits drivers who value performance.",
        ));
}

#[test]
fn test_invalid_json_fails() {
    let dir = TempDir::new().expect("tmp");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{not json").expect("write");

    cmd()
        .current_dir(dir.path())
        .args(["market", path.to_str().expect("utf8 path")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid JSON"));
}

#[test]
fn test_missing_input_file_fails() {
    let dir = TempDir::new().expect("tmp");
    cmd()
        .current_dir(dir.path())
        .args(["market", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed reading input file"));
}
