//! # Scene Errors
//!
//! Error types for object deserialization and scene persistence.
//!
//! None of these are fatal: a set load skips entries that fail with
//! [`SceneError::TypeMismatch`] or [`SceneError::UnknownType`] and keeps going.
//! Insufficient geometry is not an error at all, mesh generation just returns
//! `None`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing scene documents.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The document's `"type"` field names a different shape
    #[error("Type mismatch: expected \"{expected}\", found \"{found}\"")]
    TypeMismatch { expected: String, found: String },

    /// No factory is registered for the tag
    #[error("Unknown object type: \"{0}\"")]
    UnknownType(String),

    /// The document does not have the shape of an object set
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// Reading or writing a scene file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing or serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SceneError {
    /// Creates a type mismatch error.
    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Creates a malformed document error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedDocument(message.into())
    }

    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_message() {
        let err = SceneError::type_mismatch("Tube", "Face");
        assert_eq!(
            err.to_string(),
            "Type mismatch: expected \"Tube\", found \"Face\""
        );
    }

    #[test]
    fn test_io_message_names_path() {
        let err = SceneError::io(
            "/nowhere/scene.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("/nowhere/scene.json"));
    }
}
