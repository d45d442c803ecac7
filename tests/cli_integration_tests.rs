//! Binary-level CLI tests
//!
//! These tests run the compiled `taskbump` binary and verify exit codes,
//! usage output, and that files on disk change (or don't) accordingly.

mod common;

use assert_cmd::Command;
use common::{create_extension, read_json, snapshot, task_version};
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn taskbump() -> Command {
    let mut cmd = Command::cargo_bin("taskbump").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_exits_zero_and_touches_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let mut files = create_extension(temp_dir.path());
    files.push(temp_dir.path().join("vss-extension.json"));
    let before = snapshot(&files);

    for flag in ["--help", "-h"] {
        taskbump()
            .current_dir(temp_dir.path())
            .args([flag, "--version", "2.4.0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("X.Y.Z"));
    }

    assert_eq!(snapshot(&files), before);
}

#[test]
fn test_missing_version_prints_usage_and_exits_one() {
    let temp_dir = TempDir::new().unwrap();

    taskbump()
        .current_dir(temp_dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--version"));
}

#[test]
fn test_bare_or_empty_version_prints_usage_and_exits_one() {
    let temp_dir = TempDir::new().unwrap();
    let mut files = create_extension(temp_dir.path());
    files.push(temp_dir.path().join("vss-extension.json"));
    let before = snapshot(&files);

    for args in [vec!["-v"], vec!["--version"], vec!["--version="]] {
        taskbump()
            .current_dir(temp_dir.path())
            .args(&args)
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Usage"));
    }

    assert_eq!(snapshot(&files), before);
}

#[test]
fn test_bump_in_current_directory() {
    let temp_dir = TempDir::new().unwrap();
    let tasks = create_extension(temp_dir.path());

    taskbump()
        .current_dir(temp_dir.path())
        .args(["-v", "2.4.0", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Updating version of task ArtifactoryMaven, version: ArtifactoryMavenV2 to X.4.0",
        ))
        .stdout(predicate::str::contains(
            "Updating version of vss-extension.json to 2.4.0",
        ));

    let manifest = read_json(&temp_dir.path().join("vss-extension.json"));
    assert_eq!(manifest["version"], "2.4.0");
    let (major, minor, patch) = task_version(&tasks[3]);
    assert_eq!(major, Value::from(3));
    assert_eq!(minor, Value::from(4));
    assert_eq!(patch, Value::from(0));
}

#[test]
fn test_policy_violation_exits_two() {
    let temp_dir = TempDir::new().unwrap();
    create_extension(temp_dir.path());

    taskbump()
        .current_dir(temp_dir.path())
        .args(["--version", "2.4.1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Error: Input version must be bigger than current version",
        ));

    taskbump()
        .current_dir(temp_dir.path())
        .args(["--version", "3.4.0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Major version"));

    let manifest = read_json(&temp_dir.path().join("vss-extension.json"));
    assert_eq!(manifest["version"], "2.3.5");
}

#[test]
fn test_bad_format_exits_two() {
    let temp_dir = TempDir::new().unwrap();
    create_extension(temp_dir.path());

    taskbump()
        .current_dir(temp_dir.path())
        .args(["-v", "2.4"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("X.Y.Z"));
}

#[test]
fn test_root_flag_and_dry_run() {
    let temp_dir = TempDir::new().unwrap();
    let mut files = create_extension(temp_dir.path());
    files.push(temp_dir.path().join("vss-extension.json"));
    let before = snapshot(&files);

    taskbump()
        .arg("--root")
        .arg(temp_dir.path())
        .args(["-v", "2.3.6", "--dry-run", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would update version of task ArtifactoryNpm to X.3.6"))
        .stdout(predicate::str::contains("Dry run:"));

    assert_eq!(snapshot(&files), before);
}

#[test]
fn test_manifest_and_tasks_dir_overrides() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let ext = root.join("extension");
    fs::create_dir_all(&ext).unwrap();
    common::write_manifest(&ext, "1.2.3");
    let task = root.join("build").join("Only").join("task.json");
    common::write_task(&task, 5, 2, 3);

    taskbump()
        .current_dir(root)
        .args([
            "-v",
            "1.3.0",
            "--manifest",
            "extension/vss-extension.json",
            "--tasks-dir",
            "build",
        ])
        .assert()
        .success();

    assert_eq!(read_json(&ext.join("vss-extension.json"))["version"], "1.3.0");
    let (major, minor, patch) = task_version(&task);
    assert_eq!(major, Value::from(5));
    assert_eq!(minor, Value::from(3));
    assert_eq!(patch, Value::from(0));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    taskbump()
        .args(["--bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bogus"));
}
