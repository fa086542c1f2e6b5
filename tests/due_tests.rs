//! Integration tests for the due command

use predicates::prelude::*;

mod common;
use common::sitelog_cmd;

#[test]
fn test_due_single_date() {
    sitelog_cmd()
        .arg("due")
        .arg("2025-09-01")
        .arg("--today")
        .arg("2025-08-30")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("high"));
}

#[test]
fn test_due_sorts_mixed_tiers_high_first() {
    let output = sitelog_cmd()
        .arg("due")
        .arg("2025-09-20")
        .arg("2025-08-31")
        .arg("2025-09-05")
        .arg("--today")
        .arg("2025-08-30")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].starts_with("high"));
    assert!(lines[0].contains("2025-08-31"));
    assert!(lines[1].starts_with("medium"));
    assert!(lines[1].contains("2025-09-05"));
    assert!(lines[2].starts_with("low"));
    assert!(lines[2].contains("2025-09-20"));
}

#[test]
fn test_due_overdue_is_high() {
    sitelog_cmd()
        .arg("due")
        .arg("2025-08-01")
        .arg("--today")
        .arg("2025-08-30")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("high"));
}

#[test]
fn test_due_undated_item_is_low() {
    sitelog_cmd()
        .arg("due")
        .arg("-")
        .arg("--label")
        .arg("order rebar")
        .arg("--today")
        .arg("2025-08-30")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("low"))
        .stdout(predicate::str::contains("order rebar"));
}

#[test]
fn test_due_labels_pair_with_dates() {
    sitelog_cmd()
        .arg("due")
        .arg("2025-08-31")
        .arg("--label")
        .arg("scaffold inspection")
        .arg("--today")
        .arg("2025-08-30")
        .assert()
        .success()
        .stdout(predicate::str::contains("scaffold inspection"));
}

#[test]
fn test_due_invalid_date_fails_with_exit_code_2() {
    sitelog_cmd()
        .arg("due")
        .arg("31-08-2025")
        .arg("--today")
        .arg("2025-08-30")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid date"))
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn test_due_invalid_today_fails() {
    sitelog_cmd()
        .arg("due")
        .arg("2025-08-31")
        .arg("--today")
        .arg("someday")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_due_requires_at_least_one_date() {
    sitelog_cmd().arg("due").assert().failure();
}
