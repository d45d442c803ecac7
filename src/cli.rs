//! CLI argument parsing and command dispatch

pub mod args;
pub mod bump;
pub mod common;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice};
pub use bump::{BumpOptions, BumpOutcome};
