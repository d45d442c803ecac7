//! Test utilities for taskbump integration tests

#![allow(dead_code)]

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Writes a `vss-extension.json` with the given version into `root`
pub fn write_manifest(root: &Path, version: &str) -> PathBuf {
    let path = root.join("vss-extension.json");
    let content = format!(
        r#"{{
    "manifestVersion": 1,
    "id": "jfrog-artifactory-vsts-extension",
    "name": "JFrog",
    "version": "{}",
    "publisher": "JFrog",
    "files": [
        {{
            "path": "tasks"
        }}
    ]
}}
"#,
        version
    );
    fs::write(&path, content).unwrap();
    path
}

/// Writes a task descriptor at `path` with the given version fields
pub fn write_task(path: &Path, major: u64, minor: u64, patch: u64) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let content = format!(
        r#"{{
    "id": "00000000-0000-0000-0000-000000000000",
    "name": "{}",
    "version": {{
        "Major": {},
        "Minor": {},
        "Patch": {}
    }},
    "instanceNameFormat": "Run task"
}}
"#,
        path.parent().unwrap().file_name().unwrap().to_string_lossy(),
        major,
        minor,
        patch
    );
    fs::write(path, content).unwrap();
}

/// A realistic extension layout at version 2.3.5:
///
/// - tasks/ArtifactoryGenericUpload/task.json (major 1)
/// - tasks/ArtifactoryMaven/ArtifactoryMavenV1/task.json (major 1)
/// - tasks/ArtifactoryMaven/ArtifactoryMavenV2/task.json (major 2)
/// - tasks/ArtifactoryNpm/task.json (major 3)
/// - tasks/README.md (not a task)
pub fn create_extension(root: &Path) -> Vec<PathBuf> {
    write_manifest(root, "2.3.5");

    let tasks = root.join("tasks");
    let paths = vec![
        tasks.join("ArtifactoryGenericUpload").join("task.json"),
        tasks
            .join("ArtifactoryMaven")
            .join("ArtifactoryMavenV1")
            .join("task.json"),
        tasks
            .join("ArtifactoryMaven")
            .join("ArtifactoryMavenV2")
            .join("task.json"),
        tasks.join("ArtifactoryNpm").join("task.json"),
    ];
    let majors = [1, 1, 2, 3];
    for (path, major) in paths.iter().zip(majors) {
        write_task(path, major, 3, 5);
    }
    fs::write(tasks.join("README.md"), "# Tasks\n").unwrap();

    paths
}

/// Reads and parses a JSON file
pub fn read_json(path: &Path) -> Value {
    let content = fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

/// Returns `(Major, Minor, Patch)` of a task descriptor
pub fn task_version(path: &Path) -> (Value, Value, Value) {
    let json = read_json(path);
    let version = &json["version"];
    (
        version["Major"].clone(),
        version["Minor"].clone(),
        version["Patch"].clone(),
    )
}

/// Snapshot of every file's content, for byte-identity checks
pub fn snapshot(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| fs::read_to_string(p).unwrap())
        .collect()
}
