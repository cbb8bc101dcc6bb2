//! Error types for the fixture encoder.
//!
//! Two failure kinds are recoverable: malformed JSON and an attribute index
//! past the end of `attributes`. Those are reported to the harness as
//! encoded sentinel payloads. Everything else is fatal.

use std::path::PathBuf;
use thiserror::Error;

use crate::types::Sentinel;

pub type FixtureResult<T> = Result<T, FixtureError>;

/// Errors that can occur while reading and encoding fixtures.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// The fixture file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// I/O error while writing output.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The fixture text is not valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The JSON document parsed, but its root is not an object.
    #[error("JSON root is a {0}, expected an object")]
    NotAnObject(&'static str),

    /// Attribute index out of bounds in attribute mode.
    #[error("attribute index {index} out of bounds (len: {len})")]
    AttributeIndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Number of entries in `attributes`.
        len: usize,
    },
}

impl FixtureError {
    /// Returns the sentinel that reports this error to the harness, or
    /// `None` when the error is fatal.
    pub fn sentinel(&self) -> Option<Sentinel> {
        match self {
            FixtureError::InvalidJson(_) | FixtureError::NotAnObject(_) => {
                Some(Sentinel::JsonParseFailure)
            }
            FixtureError::AttributeIndexOutOfBounds { .. } => {
                Some(Sentinel::AttributeIndexOutOfBounds)
            }
            _ => None,
        }
    }
}
