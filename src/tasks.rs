//! Task descriptor discovery and version updates
//!
//! Task descriptors live either directly at `tasks/<name>/task.json` or, for
//! tasks that ship several major versions side by side, at
//! `tasks/<name>/<versionDir>/task.json`. Their version is a
//! `{Major, Minor, Patch}` object; the major component belongs to the task and
//! is never touched here.

use crate::document::JsonDocument;
use crate::error::{DocumentError, TaskError};
use crate::version::Version;
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default tasks directory name
pub const TASKS_DIR: &str = "tasks";

/// Task descriptor file name
pub const TASK_FILE: &str = "task.json";

/// Where a task descriptor was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskLocation {
    /// Name of the directory directly under the tasks root
    pub task_name: String,
    /// Name of the per-version subdirectory, for multi-version tasks
    pub version_dir: Option<String>,
    /// Path to the `task.json` file
    pub path: PathBuf,
}

impl fmt::Display for TaskLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version_dir {
            Some(dir) => write!(f, "task {}, version: {}", self.task_name, dir),
            None => write!(f, "task {}", self.task_name),
        }
    }
}

/// Lists the subdirectories of `dir`, sorted by name
fn sorted_subdirs(dir: &Path) -> Result<Vec<(String, PathBuf)>, TaskError> {
    let io_err = |source| TaskError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let path = entry.path();
        if !path.is_dir() {
            tracing::debug!(path = %path.display(), "skipping non-directory entry");
            continue;
        }
        dirs.push((entry.file_name().to_string_lossy().into_owned(), path));
    }

    dirs.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(dirs)
}

/// Finds every task descriptor under `tasks_root`
///
/// A task directory that holds `task.json` itself is a single-version task
/// and its subdirectories are not searched. Otherwise each immediate
/// subdirectory that holds `task.json` is one version of the task. Results are
/// ordered by task name, then version directory name.
pub fn discover_tasks(tasks_root: &Path) -> Result<Vec<TaskLocation>, TaskError> {
    if !tasks_root.is_dir() {
        return Err(TaskError::MissingTasksDir(tasks_root.to_path_buf()));
    }

    let mut locations = Vec::new();
    for (task_name, task_dir) in sorted_subdirs(tasks_root)? {
        let direct = task_dir.join(TASK_FILE);
        if direct.is_file() {
            locations.push(TaskLocation {
                task_name,
                version_dir: None,
                path: direct,
            });
            continue;
        }

        let before = locations.len();
        for (version_dir, dir) in sorted_subdirs(&task_dir)? {
            let nested = dir.join(TASK_FILE);
            if nested.is_file() {
                locations.push(TaskLocation {
                    task_name: task_name.clone(),
                    version_dir: Some(version_dir),
                    path: nested,
                });
            }
        }

        if locations.len() == before {
            tracing::debug!(task = %task_name, "no task descriptor found");
        }
    }

    Ok(locations)
}

/// Rewrites a descriptor's `version` to `{Major, Minor, Patch}`
///
/// `Major` is carried over exactly as found (number or string); `Minor` and
/// `Patch` come from `requested`. Returns the preserved major value.
pub fn set_task_version(
    doc: &mut JsonDocument,
    requested: &Version,
) -> Result<Value, DocumentError> {
    let major = doc
        .value()
        .get("version")
        .and_then(Value::as_object)
        .ok_or_else(|| doc.shape_error("missing object field 'version'"))?
        .get("Major")
        .cloned()
        .ok_or_else(|| doc.shape_error("missing field 'version.Major'"))?;

    let mut version = Map::new();
    version.insert("Major".to_string(), major.clone());
    version.insert("Minor".to_string(), Value::from(requested.minor));
    version.insert("Patch".to_string(), Value::from(requested.patch));

    doc.root_object_mut()?
        .insert("version".to_string(), Value::Object(version));

    Ok(major)
}

/// A task descriptor loaded and edited in memory, not yet written
#[derive(Debug, Clone)]
pub struct TaskUpdate {
    pub location: TaskLocation,
    /// The task's own major version, unchanged
    pub major: Value,
    doc: JsonDocument,
}

impl TaskUpdate {
    /// Writes the edited descriptor back to disk
    pub fn save(&self, indent: usize) -> Result<(), DocumentError> {
        self.doc.save(indent)
    }

    /// Renders the edited descriptor without writing it
    pub fn render(&self, indent: usize) -> Result<String, DocumentError> {
        self.doc.render(indent)
    }
}

/// Loads every descriptor and applies the new version in memory
///
/// Nothing is written; a malformed descriptor fails the whole plan before
/// any file on disk changes.
pub fn plan_task_updates(
    locations: Vec<TaskLocation>,
    requested: &Version,
) -> Result<Vec<TaskUpdate>, TaskError> {
    let mut updates = Vec::with_capacity(locations.len());
    for location in locations {
        let mut doc = JsonDocument::load(&location.path)?;
        let major = set_task_version(&mut doc, requested)?;
        updates.push(TaskUpdate {
            location,
            major,
            doc,
        });
    }
    Ok(updates)
}
