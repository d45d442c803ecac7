//! Common helpers shared by the CLI entry points

use crate::config::Config;
use std::path::{Path, PathBuf};

/// Process exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_USAGE: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Files the bump operates on, after applying config and CLI overrides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub manifest: PathBuf,
    pub tasks: PathBuf,
}

/// Resolves manifest and tasks paths against `root`
///
/// A CLI override wins over the config file, which wins over the defaults
/// already folded into `config`.
pub(crate) fn resolve_paths(
    root: &Path,
    config: &Config,
    manifest: Option<&Path>,
    tasks_dir: Option<&Path>,
) -> ResolvedPaths {
    let manifest = manifest.unwrap_or(config.paths.manifest.as_path());
    let tasks = tasks_dir.unwrap_or(config.paths.tasks.as_path());
    ResolvedPaths {
        manifest: root.join(manifest),
        tasks: root.join(tasks),
    }
}
