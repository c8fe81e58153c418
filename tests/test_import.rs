mod common;

use booktriage::{json, utils, BoundaryReport};
use predicates::str;
use tempfile::tempdir;

#[test]
fn test_import() {
    let source = common::test_data("bookmarks_chrome.html");
    let temp_dir = tempdir().unwrap();
    let temp_path = temp_dir.path();
    assert!(temp_path.exists(), "Missing path: {}", temp_path.display());

    println!("Execute 'booktriage import {source}'");
    let mut cmd = common::booktriage(temp_path);
    cmd.args(["import", &source]);
    // Info messages are logged to stderr.
    cmd.assert()
        .success()
        .stderr(str::contains("Imported 8 bookmarks: 4 keepers, 4 to categorize"));

    let report_path = temp_path.join("bookmarks.json");
    assert!(
        report_path.exists(),
        "Missing path: {}",
        report_path.display()
    );

    let report = utils::read_file(&report_path).unwrap();
    let res = json::deserialize::<BoundaryReport>(&report);
    assert!(res.is_ok());

    let report = res.unwrap();
    assert!(report.boundary_found);
    assert_eq!(report.bookmarks.len(), 8);
    assert_eq!(report.keeper_count, 4);
    assert_eq!(report.to_categorize_count, 4);
}

#[test]
fn test_import_line_strategy() {
    let source = common::test_data("bookmarks_chrome.html");
    let temp_dir = tempdir().unwrap();
    let temp_path = temp_dir.path();
    let output_path = temp_path.join("report.json");

    println!("Execute 'booktriage import {source} --strategy line --output report.json'");
    let mut cmd = common::booktriage(temp_path);
    cmd.args([
        "import",
        &source,
        "--strategy",
        "line",
        "--output",
        &output_path.display().to_string(),
    ]);
    cmd.assert()
        .success()
        .stderr(str::contains("4 keepers"));

    assert!(output_path.exists());
    assert!(!temp_path.join("bookmarks.json").exists());
}

#[test]
fn test_import_custom_marker() {
    let source = common::test_data("bookmarks_nested.html");
    let temp_dir = tempdir().unwrap();
    let temp_path = temp_dir.path();

    println!("Execute 'booktriage import {source} --marker-url https://example.com/work --marker-folder work'");
    let mut cmd = common::booktriage(temp_path);
    cmd.args([
        "import",
        &source,
        "--marker-url",
        "https://example.com/work",
        "--marker-folder",
        "work",
    ]);
    cmd.assert()
        .success()
        .stderr(str::contains("Imported 5 bookmarks: 3 keepers, 2 to categorize"));
}

#[test]
fn test_import_missing_marker() {
    let source = common::test_data("bookmarks_nested.html");
    let temp_dir = tempdir().unwrap();
    let temp_path = temp_dir.path();

    println!("Execute 'booktriage import {source} --dry-run'");
    let mut cmd = common::booktriage(temp_path);
    cmd.args(["import", &source, "--dry-run"]);
    cmd.assert()
        .success()
        .stderr(str::contains("Missing last keeper"))
        .stderr(str::contains("0 keepers, 5 to categorize"));

    assert!(!temp_path.join("bookmarks.json").exists());
}

#[test]
fn test_import_missing_source() {
    let temp_dir = tempdir().unwrap();
    let temp_path = temp_dir.path();

    let mut cmd = common::booktriage(temp_path);
    cmd.args(["import", "missing.html"]);
    cmd.assert()
        .failure()
        .stderr(str::contains("Can't open file at missing.html"));
}
