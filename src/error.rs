//! Error types for taskbump
//!
//! This module defines the error types used throughout taskbump, following
//! a hierarchical structure with one error enum per concern and a top-level
//! `BumpError` that composes them.

use std::path::PathBuf;

/// Version parsing and bump-policy errors
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    /// Version string does not have exactly three dot-separated components
    #[error("Version have a format of X.Y.Z, got '{0}'")]
    InvalidFormat(String),

    /// One component is not a non-negative integer
    #[error("Invalid {component} component '{value}' in version '{version}'")]
    InvalidComponent {
        version: String,
        component: &'static str,
        value: String,
    },

    /// Requested version is neither a minor nor a patch release of the current one
    #[error("Input version must be bigger than current version ({current} -> {requested})")]
    NotGreater { current: String, requested: String },

    /// Requested version changes the major component
    #[error("Upgrading Major version using this script is forbidden ({current} -> {requested})")]
    MajorChange { current: String, requested: String },
}

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid TOML syntax or unknown keys
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid value for {field}: {message}")]
    Validation { field: String, message: String },
}

/// Errors reading, parsing, or writing a JSON document
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// I/O failure on the document
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document is not valid JSON
    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The edited document could not be serialized
    #[error("Failed to render {path}: {source}")]
    Render {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The document is valid JSON but lacks an expected field
    #[error("Unexpected structure in {path}: {message}")]
    Shape { path: PathBuf, message: String },
}

/// Task discovery and update errors
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// The tasks root does not exist or is not a directory
    #[error("Tasks directory not found: {0}")]
    MissingTasksDir(PathBuf),

    /// Failed to list a directory
    #[error("Failed to read directory {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A task descriptor could not be read, parsed, or written
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Top-level error type for taskbump
#[derive(Debug, thiserror::Error)]
pub enum BumpError {
    /// Version validation error
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Manifest error
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Task error
    #[error(transparent)]
    Task(#[from] TaskError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
