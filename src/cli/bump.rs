//! Bump command implementation
//!
//! This module implements the bump pipeline, which:
//! - Reads the current version from the extension manifest
//! - Validates the requested version against the bump policy
//! - Rewrites the version of every task descriptor (keeping each task's major)
//! - Rewrites the manifest version
//!
//! Validation and descriptor loading happen before the first write, so a bad
//! request or a malformed descriptor leaves every file untouched.

use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS, resolve_paths};
use crate::cli::ColorChoice;
use crate::config::Config;
use crate::error::BumpError;
use crate::manifest::ExtensionManifest;
use crate::output::Reporter;
use crate::tasks::{discover_tasks, plan_task_updates};
use crate::version::{ReleaseKind, Version, classify_bump};
use std::path::PathBuf;
use termcolor::WriteColor;

/// Inputs of a bump run
#[derive(Debug, Clone)]
pub struct BumpOptions {
    /// Requested version, exactly as given on the command line
    pub requested: String,
    pub root: PathBuf,
    pub manifest: Option<PathBuf>,
    pub tasks_dir: Option<PathBuf>,
    pub dry_run: bool,
}

impl BumpOptions {
    pub fn new(requested: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        BumpOptions {
            requested: requested.into(),
            root: root.into(),
            manifest: None,
            tasks_dir: None,
            dry_run: false,
        }
    }
}

/// What a successful run did (or would do, for a dry run)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    pub previous: Version,
    pub requested: Version,
    pub kind: ReleaseKind,
    pub tasks_updated: usize,
    pub dry_run: bool,
}

/// Run the bump command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 2: Error (invalid version, policy violation, bad config, I/O failure)
pub fn run_bump(options: &BumpOptions, color: ColorChoice) -> i32 {
    let mut reporter = Reporter::stdout(color, options.dry_run);
    match bump(options, &mut reporter) {
        Ok(outcome) => {
            tracing::debug!(?outcome, "bump finished");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// Runs the full pipeline, reporting progress to `reporter`
pub fn bump<W: WriteColor>(
    options: &BumpOptions,
    reporter: &mut Reporter<W>,
) -> Result<BumpOutcome, BumpError> {
    // 1. Requested version format
    let requested = Version::parse(&options.requested)?;

    // 2. Configuration and paths
    let config = Config::discover(&options.root)?;
    let paths = resolve_paths(
        &options.root,
        &config,
        options.manifest.as_deref(),
        options.tasks_dir.as_deref(),
    );
    let indent = config.format.indent;
    tracing::debug!(
        manifest = %paths.manifest.display(),
        tasks = %paths.tasks.display(),
        "resolved paths"
    );

    // 3. Bump policy against the manifest's current version
    let mut manifest = ExtensionManifest::load(&paths.manifest)?;
    let previous = manifest.current_version()?;
    let kind = classify_bump(&previous, &requested)?;
    tracing::debug!(%previous, %requested, %kind, "bump accepted");

    // 4. Load and edit every task descriptor in memory
    let locations = discover_tasks(&paths.tasks)?;
    let updates = plan_task_updates(locations, &requested)?;
    manifest.set_version(&options.requested)?;

    // 5. Write tasks, then the manifest
    let task_target = format!("X.{}.{}", requested.minor, requested.patch);
    for update in &updates {
        reporter.updating(&update.location.to_string(), &task_target)?;
        if !options.dry_run {
            update.save(indent)?;
        }
    }

    let manifest_name = manifest
        .path()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| manifest.path().display().to_string());
    reporter.updating(&manifest_name, &options.requested)?;
    if !options.dry_run {
        manifest.save(indent)?;
    }

    let verb = if options.dry_run { "Would bump" } else { "Bumped" };
    reporter.summary(&format!(
        "{} {} task(s) and {} from {} to {} ({})",
        verb,
        updates.len(),
        manifest_name,
        previous,
        options.requested,
        kind
    ))?;

    Ok(BumpOutcome {
        previous,
        requested,
        kind,
        tasks_updated: updates.len(),
        dry_run: options.dry_run,
    })
}
