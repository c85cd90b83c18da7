//! End-to-end tests for the `summerlin` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn summerlin() -> Command {
    Command::cargo_bin("summerlin").unwrap()
}

fn json_output(args: &[&str]) -> Value {
    let output = summerlin().args(args).output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_mortgage_defaults_table() {
    summerlin()
        .arg("mortgage")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mortgage Estimate"))
        .stdout(predicate::str::contains("$5,056.54"))
        .stdout(predicate::str::contains("$800,000"));
}

#[test]
fn test_mortgage_minimal() {
    // 5,056.54 + 666.67 + 200.00 + 300.00
    summerlin()
        .args(["--format", "minimal", "mortgage"])
        .assert()
        .success()
        .stdout("$6,223.21\n");
}

#[test]
fn test_mortgage_json() {
    let json = json_output(&["--format", "json", "mortgage", "--home-price", "500000", "--down-percent", "10"]);
    assert_eq!(json["loan_amount"].as_f64().unwrap(), 450000.0);
    assert_eq!(json["schedule"].as_array().unwrap().len(), 30);
}

#[test]
fn test_mortgage_rejects_down_payment_above_price() {
    summerlin()
        .args(["mortgage", "--home-price", "300000", "--down-payment", "400000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("down_payment"));
}

#[test]
fn test_mortgage_down_flags_conflict() {
    summerlin()
        .args(["mortgage", "--down-payment", "100000", "--down-percent", "10"])
        .assert()
        .failure();
}

#[test]
fn test_schedule_yearly_csv() {
    let output = summerlin()
        .args(["--format", "csv", "schedule", "--loan-amount", "800000", "--term", "15"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "year,principal_paid,interest_paid,remaining_balance");
    assert_eq!(lines.len(), 16);
}

#[test]
fn test_schedule_monthly_json() {
    let json = json_output(&[
        "--format", "json", "schedule", "--loan-amount", "120000", "--rate", "0", "--term", "10", "--monthly",
    ]);
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 120);
    assert_eq!(rows[0]["payment"].as_f64().unwrap(), 1000.0);
}

#[test]
fn test_schedule_rejects_zero_term() {
    summerlin()
        .args(["schedule", "--loan-amount", "100000", "--term", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("term"));
}

#[test]
fn test_listings_table() {
    summerlin()
        .args(["listings", "--village", "The Ridges"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Luxury Estate in The Ridges"))
        .stdout(predicate::str::contains("$2,495,000"))
        .stdout(predicate::str::contains("Modern Villa").not());
}

#[test]
fn test_listings_minimal_count() {
    summerlin()
        .args(["--format", "minimal", "listings", "--min-beds", "5"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_listings_json_sorted() {
    let json = json_output(&["--format", "json", "listings", "--feature", "views"]);
    let listings = json.as_array().unwrap();
    let prices: Vec<u64> = listings.iter().map(|l| l["price"].as_u64().unwrap()).collect();
    assert!(prices.windows(2).all(|w| w[0] >= w[1]));
    assert!(!listings.is_empty());
}

#[test]
fn test_listings_bad_type() {
    summerlin()
        .args(["listings", "--type", "castle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("castle"));
}

#[test]
fn test_listings_available_only() {
    summerlin()
        .args(["--format", "minimal", "listings", "--available"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_listings_minimal_no_match() {
    summerlin()
        .args(["--format", "minimal", "listings", "--village", "Nowhere"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_mortgage_flags_nonstandard_term() {
    summerlin()
        .args(["mortgage", "--term", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("25 years (non-standard)"));
}
