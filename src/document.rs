//! JSON documents edited in place
//!
//! A `JsonDocument` is loaded from disk, mutated as a `serde_json::Value`, and
//! written back with a fixed indent width. Object key order is preserved and a
//! trailing newline is kept only if the original file had one.

use crate::error::DocumentError;
use serde::Serialize;
use serde_json::{Map, Value};
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::{Path, PathBuf};

/// Default indent width for rewritten documents
pub const DEFAULT_INDENT: usize = 4;

/// A parsed JSON file that remembers where it came from
#[derive(Debug, Clone)]
pub struct JsonDocument {
    path: PathBuf,
    value: Value,
    trailing_newline: bool,
}

impl JsonDocument {
    /// Reads and parses the document at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref().to_path_buf();
        let content = fs::read_to_string(&path).map_err(|source| DocumentError::Io {
            path: path.clone(),
            source,
        })?;
        Self::parse(path, &content)
    }

    /// Parses `content` as the document at `path` without touching the disk
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self, DocumentError> {
        let path = path.into();
        // Azure DevOps tooling sometimes emits a UTF-8 BOM
        let body = content.strip_prefix('\u{feff}').unwrap_or(content);
        let value = serde_json::from_str(body).map_err(|source| DocumentError::Parse {
            path: path.clone(),
            source,
        })?;

        Ok(JsonDocument {
            path,
            value,
            trailing_newline: content.ends_with('\n'),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Returns the top-level object, or a shape error if the root is not an object
    pub fn root_object_mut(&mut self) -> Result<&mut Map<String, Value>, DocumentError> {
        match &mut self.value {
            Value::Object(map) => Ok(map),
            _ => Err(DocumentError::Shape {
                path: self.path.clone(),
                message: "root is not a JSON object".to_string(),
            }),
        }
    }

    /// Builds a shape error pointing at this document
    pub fn shape_error(&self, message: impl Into<String>) -> DocumentError {
        DocumentError::Shape {
            path: self.path.clone(),
            message: message.into(),
        }
    }

    /// Renders the document with `indent` spaces per level
    pub fn render(&self, indent: usize) -> Result<String, DocumentError> {
        let indent_bytes = vec![b' '; indent];
        let mut out = Vec::new();
        let formatter = PrettyFormatter::with_indent(&indent_bytes);
        let mut serializer = Serializer::with_formatter(&mut out, formatter);
        self.value
            .serialize(&mut serializer)
            .map_err(|source| DocumentError::Render {
                path: self.path.clone(),
                source,
            })?;

        let mut rendered = String::from_utf8_lossy(&out).into_owned();
        if self.trailing_newline {
            rendered.push('\n');
        }
        Ok(rendered)
    }

    /// Writes the document back to its path
    pub fn save(&self, indent: usize) -> Result<(), DocumentError> {
        let rendered = self.render(indent)?;
        fs::write(&self.path, rendered).map_err(|source| DocumentError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "wrote document");
        Ok(())
    }
}
