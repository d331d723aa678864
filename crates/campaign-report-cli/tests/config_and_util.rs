//! Integration tests for CLI config parsing, trend export and util helpers.

use std::io::Write;

use clap::{Arg, ArgAction, Command};

use campaign_report::navigation::LayoutKind;
use campaign_report::trend::build_trend_dataset;
use campaign_report_cli::report::input::config_from_arguments;
use campaign_report_cli::report::resolve::{catalog_keys, resolve_assets};
use campaign_report_cli::report::trend::trend_csv_bytes;
use campaign_report_cli::util::{validate_html_file, write_bytes_to_file};

fn render_command() -> Command {
    Command::new("render")
        .arg(Arg::new("config").value_parser(clap::value_parser!(std::path::PathBuf)))
        .arg(Arg::new("output_file").short('o'))
        .arg(
            Arg::new("layout")
                .short('l')
                .value_parser(|s: &str| s.parse::<LayoutKind>()),
        )
        .arg(Arg::new("no_embed").long("no-embed").action(ArgAction::SetTrue))
}

// ---------------------------------------------------------------------------
// validate_html_file
// ---------------------------------------------------------------------------

#[test]
fn validate_html_extensions() {
    assert!(validate_html_file("report.html").is_ok());
    assert!(validate_html_file("out/REPORT.HTM").is_ok());
    assert!(validate_html_file("report.csv").is_err());
    assert!(validate_html_file("report").is_err());
}

#[test]
fn write_bytes_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("trend.csv");
    write_bytes_to_file(&path, b"month\n").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "month\n");
}

// ---------------------------------------------------------------------------
// config_from_arguments
// ---------------------------------------------------------------------------

#[test]
fn no_config_uses_defaults() {
    let matches = render_command().get_matches_from(["render"]);
    let config = config_from_arguments(None, &matches).unwrap();
    assert_eq!(config.layout, LayoutKind::Scroll);
    assert!(config.embed_images);
    assert_eq!(config.assets.len(), 9);
}

#[test]
fn invalid_field_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        r#"{{ "layout": "carousel", "embed_images": false, "asset_dir": "shots" }}"#
    )
    .unwrap();

    let matches = render_command().get_matches_from(["render"]);
    let config = config_from_arguments(Some(&path), &matches).unwrap();
    assert_eq!(config.layout, LayoutKind::Scroll);
    assert!(!config.embed_images);
    assert_eq!(config.asset_dir, std::path::PathBuf::from("shots"));
}

#[test]
fn cli_overrides_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    std::fs::write(&path, r#"{ "layout": "cards" }"#).unwrap();

    let matches = render_command().get_matches_from([
        "render",
        "-l",
        "sidebar",
        "-o",
        "out/review.html",
        "--no-embed",
    ]);
    let config = config_from_arguments(Some(&path), &matches).unwrap();
    assert_eq!(config.layout, LayoutKind::Sidebar);
    assert_eq!(config.output_file, std::path::PathBuf::from("out/review.html"));
    assert!(!config.embed_images);
}

#[test]
fn malformed_config_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    std::fs::write(&path, "not json").unwrap();

    let matches = render_command().get_matches_from(["render"]);
    assert!(config_from_arguments(Some(&path), &matches).is_err());
}

// ---------------------------------------------------------------------------
// resolve / trend helpers
// ---------------------------------------------------------------------------

#[test]
fn resolve_reports_candidates_in_search_order() {
    let matches = render_command().get_matches_from(["render"]);
    let config = config_from_arguments(None, &matches).unwrap();

    let reports = resolve_assets(&config, &["not-in-catalog.png".to_string()]);
    assert_eq!(reports.len(), 1);
    assert!(!reports[0].resolved.is_found());
    assert_eq!(
        reports[0].candidates,
        vec!["images/not-in-catalog.png".to_string(), "not-in-catalog.png".to_string()]
    );
    assert_eq!(catalog_keys(&config).len(), 9);
}

#[test]
fn trend_csv_has_header_and_eight_rows() {
    let bytes = trend_csv_bytes(&build_trend_dataset()).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "month,DK,Vanger,林果");
    assert_eq!(lines[1], "2022-08,10,50,80");
}
