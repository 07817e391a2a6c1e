use assert_cmd::Command;
use predicates::prelude::*;

fn dayspan() -> Command {
    Command::cargo_bin("dayspan").unwrap()
}

#[test]
fn today_prints_a_calendar_date() {
    dayspan()
        .args(["today", "--timezone", "UTC"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d{4}-\d{2}-\d{2}\n$").unwrap());
}

#[test]
fn navigate_next_crosses_month_boundary() {
    dayspan()
        .args(["navigate", "2025-08-31", "next", "--timezone", "UTC"])
        .assert()
        .success()
        .stdout("2025-09-01\n");
}

#[test]
fn navigate_prev_crosses_year_boundary() {
    dayspan()
        .args(["navigate", "2026-01-01", "prev", "--timezone", "UTC"])
        .assert()
        .success()
        .stdout("2025-12-31\n");
}

#[test]
fn navigate_rejects_malformed_date() {
    dayspan()
        .args(["navigate", "not-a-date", "next", "--timezone", "UTC"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn navigate_rejects_unknown_direction() {
    dayspan()
        .args(["navigate", "2025-09-02", "sideways", "--timezone", "UTC"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid direction"));
}

#[test]
fn navigate_rejects_unknown_timezone() {
    dayspan()
        .args(["navigate", "2025-09-02", "next", "--timezone", "Not/AZone"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timezone"));
}

#[test]
fn week_prints_range_and_formatted_text() {
    dayspan()
        .args(["week", "2025-09-03", "--timezone", "America/New_York"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-09-01 - 2025-09-07"))
        .stdout(predicate::str::contains("September 1 - September 7, 2025"));
}

#[test]
fn month_prints_first_and_last_day() {
    dayspan()
        .args(["month", "2024", "2", "--timezone", "UTC"])
        .assert()
        .success()
        .stdout("2024-02-01 - 2024-02-29\n");
}

#[test]
fn grid_emits_42_json_cells() {
    let assert = dayspan()
        .args(["grid", "2025", "9", "--timezone", "UTC"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let cells: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let cells = cells.as_array().unwrap();
    assert_eq!(cells.len(), 42);
    assert_eq!(cells[0]["date"], "2025-08-31");
    assert_eq!(cells[0]["is_current_month"], false);
    assert_eq!(cells[0]["day_of_week"], 0);
    assert_eq!(cells[1]["date"], "2025-09-01");
    assert_eq!(cells[1]["is_current_month"], true);
}

#[test]
fn format_long_and_short_styles() {
    dayspan()
        .args(["format", "2025-09-02", "--timezone", "UTC"])
        .assert()
        .success()
        .stdout("Tuesday, September 2, 2025\n");
    dayspan()
        .args(["format", "2025-09-02", "--style", "short", "--timezone", "UTC"])
        .assert()
        .success()
        .stdout("9/2/2025\n");
}
