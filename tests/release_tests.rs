//! End-to-end tests for `update-flatpak-release`.

mod common;

use common::*;

use predicates::prelude::*;
use std::fs;

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[test]
fn test_updates_manifest_and_appstream() {
    let temp = create_release_dir();
    let dir = temp.path();

    run_release(dir, &[MANIFEST_NAME, APPSTREAM_NAME, "1.1.0", "def456"])
        .success()
        .stdout(predicate::str::contains(
            "Updated XIVLauncher.Core tag to 1.1.0 and commit to def456",
        ))
        .stdout(predicate::str::contains(format!(
            "Recorded release 1.1.0 dated {} in {}",
            today(),
            APPSTREAM_NAME
        )));

    let doc = read_yaml(&manifest_path(dir));
    assert_eq!(doc["modules"][2]["sources"][0]["tag"].as_str(), Some("1.1.0"));
    assert_eq!(doc["modules"][2]["sources"][0]["commit"].as_str(), Some("def456"));

    let xml = fs::read_to_string(appstream_path(dir)).unwrap();
    assert!(xml.contains(&format!(
        r#"<release version="1.1.0" date="{}"/>"#,
        today()
    )));
    assert!(xml.contains(r#"<release version="0.9" date="2022-06-01"/>"#));
}

#[test]
fn test_appstream_starts_with_declaration() {
    let temp = create_release_dir();
    let dir = temp.path();
    fs::write(
        appstream_path(dir),
        "<component>\n  <releases>\n    <release version=\"1.0\" date=\"2023-01-01\"/>\n  </releases>\n</component>\n",
    )
    .unwrap();

    run_release(dir, &[MANIFEST_NAME, APPSTREAM_NAME, "1.1.0", "def456"]).success();

    let xml = fs::read_to_string(appstream_path(dir)).unwrap();
    assert_eq!(
        xml.lines().next(),
        Some(r#"<?xml version="1.0" encoding="UTF-8"?>"#)
    );
}

#[test]
fn test_explicit_date() {
    let temp = create_release_dir();
    let dir = temp.path();

    run_release(
        dir,
        &[
            MANIFEST_NAME,
            APPSTREAM_NAME,
            "1.1.0",
            "def456",
            "--date",
            "2024-03-09",
        ],
    )
    .success()
    .stdout(predicate::str::contains("2024-03-09"));

    let xml = fs::read_to_string(appstream_path(dir)).unwrap();
    assert!(xml.contains(r#"<release version="1.1.0" date="2024-03-09"/>"#));
}

#[test]
fn test_missing_releases_leaves_both_files() {
    let temp = create_release_dir();
    let dir = temp.path();
    let appstream = "<?xml version=\"1.0\"?>\n<component><id>x</id></component>\n";
    fs::write(appstream_path(dir), appstream).unwrap();

    run_release(dir, &[MANIFEST_NAME, APPSTREAM_NAME, "1.1.0", "def456"])
        .failure()
        .code(1)
        .stdout(predicate::str::contains("No <releases> element"));

    assert_eq!(fs::read_to_string(manifest_path(dir)).unwrap(), MANIFEST);
    assert_eq!(fs::read_to_string(appstream_path(dir)).unwrap(), appstream);
}

#[test]
fn test_manifest_not_found_leaves_appstream() {
    let temp = create_release_dir();
    let dir = temp.path();

    run_release(
        dir,
        &[
            MANIFEST_NAME,
            APPSTREAM_NAME,
            "1.1.0",
            "def456",
            "--module",
            "missing",
        ],
    )
    .failure()
    .code(1);

    assert_eq!(fs::read_to_string(appstream_path(dir)).unwrap(), APPSTREAM);
    assert_eq!(fs::read_to_string(manifest_path(dir)).unwrap(), MANIFEST);
}

#[test]
fn test_truncated_appstream_leaves_both_files() {
    let temp = create_release_dir();
    let dir = temp.path();
    let appstream = "<component><releases><release version=\"1.0\" date=\"2023-01-01\"/>";
    fs::write(appstream_path(dir), appstream).unwrap();

    run_release(dir, &[MANIFEST_NAME, APPSTREAM_NAME, "1.1.0", "def456"])
        .failure()
        .code(1)
        .stdout(predicate::str::contains("invalid input: XML error"));

    assert_eq!(fs::read_to_string(manifest_path(dir)).unwrap(), MANIFEST);
    assert_eq!(fs::read_to_string(appstream_path(dir)).unwrap(), appstream);
}

#[test]
fn test_dry_run_does_not_modify() {
    let temp = create_release_dir();
    let dir = temp.path();

    run_release(
        dir,
        &[MANIFEST_NAME, APPSTREAM_NAME, "1.1.0", "def456", "--dry-run"],
    )
    .success()
    .stdout(predicate::str::contains("2 files will be modified"));

    assert_eq!(fs::read_to_string(manifest_path(dir)).unwrap(), MANIFEST);
    assert_eq!(fs::read_to_string(appstream_path(dir)).unwrap(), APPSTREAM);
}
