//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

/// Bump the version of an Azure DevOps extension and all of its tasks.
///
/// The new version is written to every task.json under the tasks directory
/// (keeping each task's own major version) and to vss-extension.json.
#[derive(Parser, Debug)]
#[command(name = "taskbump")]
#[command(about = "Bump version of an Azure DevOps extension and all of its tasks")]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Version to set. Must be bigger than the current version. Format: X.Y.Z
    #[arg(
        short = 'v',
        long = "version",
        value_name = "X.Y.Z",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub version: Option<String>,

    /// Project root containing the manifest and tasks directory
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Extension manifest path, relative to the root
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Tasks directory, relative to the root
    #[arg(long)]
    pub tasks_dir: Option<PathBuf>,

    /// Validate and report the planned changes without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Output coloring
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,
}

impl Cli {
    /// The requested version, treating a bare or empty `--version` as absent
    pub fn requested_version(&self) -> Option<&str> {
        self.version.as_deref().filter(|v| !v.is_empty())
    }
}
