//! E2E tests for the read commands: `sv stats`, `sv list`, `sv show`, `sv find`.
//!
//! Each test writes a small data file into a temp project and runs the
//! binary against it, checking JSON payloads and human output.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Test harness helpers
// ---------------------------------------------------------------------------

const FIXTURE: &str = r#"[
  {"projectId": "a1", "ProjectName": "Alpha Pavilion", "StartDate": "2025-01-10", "EndDate": "2025-01-12", "Status": "Pending", "Venue": "ExCeL London", "VenueCity": "London", "VenueCountry": "UK"},
  {"projectId": "b2", "ProjectName": "Beta Booth", "StartDate": "2025-02-01", "EndDate": "2025-02-03", "Status": "Design Submitted", "Venue": "World Expo Center", "VenueCity": "Dubai", "TotalSqMtr": 48},
  {"projectId": "c3", "ProjectName": "Gamma Stand", "StartDate": "2025-03-15", "EndDate": "2025-03-18", "Status": "Admin Approved", "Venue": "RAI Amsterdam"},
  {"projectId": "d4", "ProjectName": "Delta Stand", "StartDate": "2025-04-02", "EndDate": "2025-04-04", "Status": "Project Confirmed", "Venue": "Messe Berlin"},
  {"projectId": "e5", "ProjectName": "Epsilon Stand", "StartDate": "2025-05-20", "EndDate": "2025-05-22", "Status": "On Hold", "Venue": "Fira Barcelona"}
]"#;

fn sv_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sv"));
    cmd.current_dir(dir);
    cmd.env("STANDVIEW_LOG", "error");
    cmd.env("XDG_CONFIG_HOME", dir.join(".user-config"));
    cmd.env("HOME", dir);
    cmd.env_remove("STANDVIEW_DATA");
    cmd.env_remove("FORMAT");
    cmd
}

fn project_with(data: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(dir.path().join("data/projects.json"), data).unwrap();
    dir
}

fn run_json(dir: &Path, args: &[&str]) -> Value {
    let output = sv_cmd(dir)
        .args(args)
        .args(["--format", "json"])
        .output()
        .expect("sv should not crash");
    assert!(
        output.status.success(),
        "sv {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("valid JSON")
}

fn ids(value: &Value) -> Vec<String> {
    value["projects"]
        .as_array()
        .expect("projects array")
        .iter()
        .map(|p| p["projectId"].as_str().unwrap_or_default().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// sv stats
// ---------------------------------------------------------------------------

#[test]
fn stats_json_counts_buckets() {
    let dir = project_with(FIXTURE);
    let stats = run_json(dir.path(), &["stats"]);

    assert_eq!(stats["total"], 5);
    assert_eq!(stats["pending"], 1);
    assert_eq!(stats["approved"], 1);
    assert_eq!(stats["submitted"], 1);
    assert_eq!(stats["confirmed"], 1);
    assert_eq!(stats["ongoing"], 2);
    assert_eq!(stats["unknown"], 1);
    assert_eq!(stats["load"]["state"], "ready");

    let breakdown = stats["breakdown"].as_array().unwrap();
    assert_eq!(breakdown.len(), 4);
    assert_eq!(breakdown[0]["status"], "Pending");
    let pending_pct = breakdown[0]["percent"].as_f64().unwrap();
    assert!((pending_pct - 20.0).abs() < 1e-9);
}

#[test]
fn stats_missing_data_file_degrades_to_zero() {
    let dir = TempDir::new().unwrap();
    let stats = run_json(dir.path(), &["stats"]);
    assert_eq!(stats["total"], 0);
    assert_eq!(stats["load"]["state"], "failed");
    assert!(stats["load"]["reason"].as_str().unwrap().contains("projects.json"));

    sv_cmd(dir.path())
        .args(["stats", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total\t0"))
        .stderr(predicate::str::contains("warning: failed to read project data"));
}

#[test]
fn stats_malformed_data_file_degrades_to_zero() {
    let dir = project_with("{\"not\": \"an array\"");
    let stats = run_json(dir.path(), &["stats"]);
    assert_eq!(stats["total"], 0);
    assert_eq!(stats["load"]["state"], "failed");
}

// ---------------------------------------------------------------------------
// sv list
// ---------------------------------------------------------------------------

#[test]
fn list_blank_query_returns_everything_in_order() {
    let dir = project_with(FIXTURE);
    let list = run_json(dir.path(), &["list"]);
    assert_eq!(ids(&list), ["a1", "b2", "c3", "d4", "e5"]);
    assert_eq!(list["filtered_total"], 5);
    assert_eq!(list["total_pages"], 1);
    assert_eq!(list["nav"]["show_controls"], false);
    assert_eq!(list["summary"], "Showing 5 of 5 entries");
}

#[test]
fn list_query_matches_venue_case_insensitively() {
    let dir = project_with(FIXTURE);
    let list = run_json(dir.path(), &["list", "EXPO"]);
    assert_eq!(ids(&list), ["b2"]);
}

#[test]
fn list_query_matches_dates() {
    let dir = project_with(FIXTURE);
    let list = run_json(dir.path(), &["list", "2025-03"]);
    assert_eq!(ids(&list), ["c3"]);
}

#[test]
fn list_paginates_and_clamps() {
    let dir = project_with(FIXTURE);

    let page2 = run_json(dir.path(), &["list", "--page-size", "2", "--page", "2"]);
    assert_eq!(ids(&page2), ["c3", "d4"]);
    assert_eq!(page2["total_pages"], 3);
    assert_eq!(page2["nav"]["prev"], 1);
    assert_eq!(page2["nav"]["next"], 3);

    let stranded = run_json(dir.path(), &["list", "--page-size", "2", "--page", "9"]);
    assert_eq!(stranded["page"], 3);
    assert_eq!(ids(&stranded), ["e5"]);
}

#[test]
fn list_uses_configured_page_size() {
    let dir = project_with(FIXTURE);
    std::fs::create_dir_all(dir.path().join(".standview")).unwrap();
    std::fs::write(
        dir.path().join(".standview/config.toml"),
        "[listing]\npage_size = 3\n",
    )
    .unwrap();

    let list = run_json(dir.path(), &["list"]);
    assert_eq!(list["page_size"], 3);
    assert_eq!(list["total_pages"], 2);
}

#[test]
fn list_no_match_human_output() {
    let dir = project_with(FIXTURE);
    sv_cmd(dir.path())
        .args(["list", "zzz", "--format", "pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects found."));
}

#[test]
fn list_reads_data_flag_over_default() {
    let dir = project_with("[]");
    std::fs::write(dir.path().join("other.json"), FIXTURE).unwrap();
    let list = run_json(dir.path(), &["list", "--data", "other.json"]);
    assert_eq!(list["filtered_total"], 5);
}

#[test]
fn list_reads_env_data_path() {
    let dir = project_with("[]");
    std::fs::write(dir.path().join("env.json"), FIXTURE).unwrap();
    let output = sv_cmd(dir.path())
        .env("STANDVIEW_DATA", "env.json")
        .args(["list", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let list: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(list["filtered_total"], 5);
}

// ---------------------------------------------------------------------------
// sv show
// ---------------------------------------------------------------------------

#[test]
fn show_found_project() {
    let dir = project_with(FIXTURE);
    let show = run_json(dir.path(), &["show", "b2"]);
    assert_eq!(show["project"]["ProjectName"], "Beta Booth");
    assert_eq!(show["project"]["TotalSqMtr"], "48");
    assert_eq!(show["status_slug"], "design-submitted");
}

#[test]
fn show_unknown_status_uses_default_slug() {
    let dir = project_with(FIXTURE);
    let show = run_json(dir.path(), &["show", "e5"]);
    assert_eq!(show["status_slug"], "default");
}

#[test]
fn show_missing_project_fails_with_code() {
    let dir = project_with(FIXTURE);
    let output = sv_cmd(dir.path())
        .args(["show", "zz9", "--format", "json"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("\"error_code\": \"E2001\""), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn show_reports_load_failure_not_missing_record() {
    let dir = TempDir::new().unwrap();
    let output = sv_cmd(dir.path())
        .args(["show", "a1", "--format", "json"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("\"error_code\": \"E1101\""), "stderr: {stderr}");
    assert!(!stderr.contains("E2001"), "stderr: {stderr}");
}

#[test]
fn show_json_carries_load_state() {
    let dir = project_with(FIXTURE);
    let show = run_json(dir.path(), &["show", "a1"]);
    assert_eq!(show["load"]["state"], "ready");
}

#[test]
fn show_is_exact_match() {
    let dir = project_with(FIXTURE);
    sv_cmd(dir.path())
        .args(["show", "B2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("project 'B2' not found"));
}

#[test]
fn show_with_quick_search_suggestions() {
    let dir = project_with(FIXTURE);
    let show = run_json(dir.path(), &["show", "a1", "--search", "stand"]);
    let names: Vec<&str> = show["suggestions"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|s| s["name"].as_str())
        .collect();
    assert_eq!(names, ["Gamma Stand", "Delta Stand", "Epsilon Stand"]);
}

// ---------------------------------------------------------------------------
// sv find
// ---------------------------------------------------------------------------

#[test]
fn find_matches_names_only() {
    let dir = project_with(FIXTURE);
    let find = run_json(dir.path(), &["find", "booth"]);
    assert_eq!(find["count"], 1);
    assert_eq!(find["suggestions"][0]["id"], "b2");

    let by_venue = run_json(dir.path(), &["find", "expo"]);
    assert_eq!(by_venue["count"], 0);
}

#[test]
fn find_blank_query_suggests_nothing() {
    let dir = project_with(FIXTURE);
    let find = run_json(dir.path(), &["find", "   "]);
    assert_eq!(find["count"], 0);
}

#[test]
fn find_text_output_is_tab_separated() {
    let dir = project_with(FIXTURE);
    sv_cmd(dir.path())
        .args(["find", "stand", "-n", "1", "--format", "text"])
        .assert()
        .success()
        .stdout("c3\tGamma Stand\n");
}

#[test]
fn find_reports_failed_load_in_json() {
    let dir = TempDir::new().unwrap();
    let find = run_json(dir.path(), &["find", "stand"]);
    assert_eq!(find["count"], 0);
    assert_eq!(find["load"]["state"], "failed");
    assert!(find["load"]["reason"].as_str().unwrap().contains("projects.json"));

    let ok = run_json(project_with(FIXTURE).path(), &["find", "stand"]);
    assert_eq!(ok["load"]["state"], "ready");
}

// ---------------------------------------------------------------------------
// text output keeps raw statuses
// ---------------------------------------------------------------------------

#[test]
fn text_output_shows_unknown_status_verbatim() {
    let dir = project_with(FIXTURE);
    sv_cmd(dir.path())
        .args(["show", "e5", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("status\tOn Hold\n"))
        .stdout(predicate::str::contains("status_slug\tdefault\n"));

    sv_cmd(dir.path())
        .args(["list", "epsilon", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("e5\tEpsilon Stand\tOn Hold\t"));
}

// ---------------------------------------------------------------------------
// config and completions
// ---------------------------------------------------------------------------

#[test]
fn invalid_project_config_is_reported() {
    let dir = project_with(FIXTURE);
    std::fs::create_dir_all(dir.path().join(".standview")).unwrap();
    std::fs::write(dir.path().join(".standview/config.toml"), "[listing\n").unwrap();

    sv_cmd(dir.path())
        .args(["stats", "--format", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn config_field_aliases_are_accepted() {
    let dir = project_with(FIXTURE);
    std::fs::create_dir_all(dir.path().join(".standview")).unwrap();
    std::fs::write(
        dir.path().join(".standview/config.toml"),
        "[listing]\nfields = [\"city\"]\n",
    )
    .unwrap();

    let list = run_json(dir.path(), &["list", "dubai"]);
    assert_eq!(ids(&list), ["b2"]);
    let by_name = run_json(dir.path(), &["list", "booth"]);
    assert_eq!(by_name["filtered_total"], 0);
}

#[test]
fn unknown_config_field_is_invalid_field_error() {
    let dir = project_with(FIXTURE);
    std::fs::create_dir_all(dir.path().join(".standview")).unwrap();
    std::fs::write(
        dir.path().join(".standview/config.toml"),
        "[quick_search]\nfields = [\"logo\"]\n",
    )
    .unwrap();

    let output = sv_cmd(dir.path())
        .args(["find", "stand", "--format", "json"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("\"error_code\": \"E2002\""), "stderr: {stderr}");
    assert!(stderr.contains("logo"), "stderr: {stderr}");
}

#[test]
fn completions_generate_for_bash() {
    let dir = TempDir::new().unwrap();
    sv_cmd(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sv"));
}
