//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `campaign-report` binary to verify that
//! argument parsing, help text, output files and error handling work end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("campaign-report").unwrap()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("trend"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("campaign-report"));
}

#[test]
fn config_prints_default_template() {
    cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"search_order\""))
        .stdout(predicate::str::contains("\"product_hero\""))
        .stdout(predicate::str::contains("\"asset_dir\""));
}

// ---------------------------------------------------------------------------
// Render
// ---------------------------------------------------------------------------

#[test]
fn render_writes_html_with_missing_image_warnings() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.html");

    cmd()
        .current_dir(dir.path())
        .args(["render", "-o", out.to_str().unwrap()])
        .assert()
        .success();

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("7. 結論"));
    assert!(html.contains("找不到圖片"));
}

#[test]
fn render_single_section_with_tabs_layout() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("authority.html");

    cmd()
        .current_dir(dir.path())
        .args([
            "render",
            "--layout",
            "tabs",
            "--section",
            "5",
            "-o",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("use 'site'"));

    let html = std::fs::read_to_string(&out).unwrap();
    assert_eq!(html.matches("<section ").count(), 1);
    assert!(html.contains("id=\"authority\""));
    assert!(!html.contains("href=\"key-wins.html\""));
}

#[test]
fn render_rejects_unknown_layout() {
    cmd()
        .args(["render", "--layout", "grid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("grid"));
}

#[test]
fn render_rejects_unknown_section() {
    cmd()
        .args(["render", "--section", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn render_rejects_non_html_output() {
    let dir = tempfile::tempdir().unwrap();
    cmd()
        .current_dir(dir.path())
        .args(["render", "-o", "report.txt"])
        .assert()
        .failure();
}

#[test]
fn render_nonexistent_config_errors() {
    cmd()
        .args(["render", "/nonexistent/report.json"])
        .assert()
        .failure();
}

#[test]
fn site_writes_section_pages() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("site");

    cmd()
        .current_dir(dir.path())
        .args(["site", "--layout", "sidebar", "-d", out.to_str().unwrap()])
        .assert()
        .success();

    assert!(out.join("index.html").is_file());
    assert!(out.join("conclusion.html").is_file());
    let index = std::fs::read_to_string(out.join("index.html")).unwrap();
    assert!(index.contains("href=\"conclusion.html\""));
}

// ---------------------------------------------------------------------------
// Resolve
// ---------------------------------------------------------------------------

#[test]
fn resolve_found_asset_prints_path() {
    let dir = tempfile::tempdir().unwrap();
    let images = dir.path().join("images");
    std::fs::create_dir_all(&images).unwrap();
    std::fs::write(images.join("截圖 2025-12-05 晚上11.40.59.png"), b"png").unwrap();

    cmd()
        .current_dir(dir.path())
        .args(["resolve", "product_hero"])
        .assert()
        .success()
        .stdout(predicate::str::contains("images/截圖 2025-12-05 晚上11.40.59.png"));
}

#[test]
fn resolve_missing_asset_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();

    cmd()
        .current_dir(dir.path())
        .args(["resolve", "google_ads", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"missing\""))
        .stdout(predicate::str::contains("截圖 2025-12-05 晚上11.41.27.jpg"));
}

#[test]
fn resolve_all_lists_catalog() {
    let dir = tempfile::tempdir().unwrap();

    cmd()
        .current_dir(dir.path())
        .args(["resolve", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("group_buy\tNOT FOUND"))
        .stdout(predicate::str::contains("product_hero\tNOT FOUND"));
}

#[test]
fn resolve_requires_a_name() {
    cmd().arg("resolve").assert().failure();
}

// ---------------------------------------------------------------------------
// Trend
// ---------------------------------------------------------------------------

#[test]
fn trend_prints_csv() {
    cmd()
        .arg("trend")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("month,DK,Vanger,林果\n"))
        .stdout(predicate::str::contains("2023-07,750,35,55"));
}

#[test]
fn trend_json_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("trend.json");

    cmd()
        .args(["trend", "--json", "-o", out.to_str().unwrap()])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["labels"].as_array().unwrap().len(), 8);
    assert_eq!(json["series"].as_array().unwrap().len(), 3);
}
