//! Configuration file parsing and validation

pub mod taskbump_toml;

pub use taskbump_toml::{CONFIG_FILE, Config, FormatConfig, PathsConfig};
