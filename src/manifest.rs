//! Extension manifest (`vss-extension.json`) access
//!
//! The manifest carries the extension version as a top-level `"X.Y.Z"`
//! string. It is the source of truth for the current version.

use crate::document::JsonDocument;
use crate::error::{BumpError, DocumentError};
use crate::version::Version;
use serde_json::Value;
use std::path::Path;

/// Default manifest file name
pub const MANIFEST_FILE: &str = "vss-extension.json";

/// The extension manifest document
#[derive(Debug, Clone)]
pub struct ExtensionManifest {
    doc: JsonDocument,
}

impl ExtensionManifest {
    /// Loads the manifest at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let doc = JsonDocument::load(path)?;
        Ok(ExtensionManifest { doc })
    }

    /// Parses manifest content that is not on disk
    pub fn parse(path: impl AsRef<Path>, content: &str) -> Result<Self, DocumentError> {
        let doc = JsonDocument::parse(path.as_ref(), content)?;
        Ok(ExtensionManifest { doc })
    }

    pub fn path(&self) -> &Path {
        self.doc.path()
    }

    /// Returns the raw `version` string
    pub fn version_str(&self) -> Result<&str, DocumentError> {
        self.doc
            .value()
            .get("version")
            .and_then(Value::as_str)
            .ok_or_else(|| self.doc.shape_error("missing string field 'version'"))
    }

    /// Parses the current extension version
    pub fn current_version(&self) -> Result<Version, BumpError> {
        let raw = self.version_str()?;
        Ok(Version::parse(raw)?)
    }

    /// Replaces the `version` field in memory with the requested string as given
    pub fn set_version(&mut self, version: &str) -> Result<(), DocumentError> {
        self.doc
            .root_object_mut()?
            .insert("version".to_string(), Value::String(version.to_string()));
        Ok(())
    }

    /// Writes the manifest back to disk
    pub fn save(&self, indent: usize) -> Result<(), DocumentError> {
        self.doc.save(indent)
    }

    /// Renders the manifest without writing it
    pub fn render(&self, indent: usize) -> Result<String, DocumentError> {
        self.doc.render(indent)
    }
}
