#![forbid(unsafe_code)]

//! taskbump: version bumping for Azure DevOps extensions
//!
//! Keeps `vss-extension.json` and every `task.json` under the tasks directory
//! on the same minor/patch version, and refuses any bump that is not a strict
//! minor or patch release of the current manifest version.

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod manifest;
pub mod output;
pub mod tasks;
pub mod version;

// Re-export error types for convenient access
pub use error::{BumpError, ConfigError, DocumentError, TaskError, VersionError};

// Re-export core domain types for convenient access
pub use version::{ReleaseKind, Version, classify_bump};
