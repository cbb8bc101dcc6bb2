//! JSON fixture encoder.
//!
//! Reads NFT item metadata and projects either the item-level fields or one
//! attribute into a `(string,string,string)` response. Malformed JSON and a
//! missing attribute are reported as sentinel responses rather than errors.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{FixtureError, FixtureResult};
use crate::metadata::ItemMetadata;
use crate::types::{AttributeFields, ItemFields, Response};

/// Path read when none is given.
pub const DEFAULT_JSON_PATH: &str = "./test-ffi/tmp/temp.json";

/// Which fields to project from the fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// `name`, `description` and `image`.
    #[default]
    TopLevel,
    /// `trait_type`, `value` and `display_type` of `attributes[index]`.
    Attribute { index: usize },
}

/// A single encoder invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureRequest {
    /// The JSON fixture to read.
    pub path: PathBuf,
    /// The fields to project.
    pub mode: Mode,
}

impl FixtureRequest {
    pub fn new(path: impl Into<PathBuf>, mode: Mode) -> Self {
        Self {
            path: path.into(),
            mode,
        }
    }
}

impl Default for FixtureRequest {
    fn default() -> Self {
        Self::new(DEFAULT_JSON_PATH, Mode::default())
    }
}

/// Projects JSON fixture text into a [`Response`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureEncoder {
    mode: Mode,
}

impl FixtureEncoder {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// Parses `text` and projects the fields for this encoder's mode.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The text is not valid JSON, or its root is not an object
    /// - The requested attribute does not exist
    pub fn extract(&self, text: &str) -> FixtureResult<Response> {
        let value: Value = serde_json::from_str(text)?;
        if !value.is_object() {
            return Err(FixtureError::NotAnObject(json_kind(&value)));
        }
        let item: ItemMetadata = serde_json::from_value(value)?;

        match self.mode {
            Mode::TopLevel => {
                debug!("Projecting top-level fields");
                Ok(Response::Item(ItemFields {
                    name: item.name,
                    description: item.description,
                    image: item.image,
                }))
            }
            Mode::Attribute { index } => {
                debug!("Projecting attribute {} of {}", index, item.attributes.len());
                let attribute = item.attribute(index).ok_or(
                    FixtureError::AttributeIndexOutOfBounds {
                        index,
                        len: item.attributes.len(),
                    },
                )?;
                let display_type = attribute.display_type_or_default().to_owned();
                Ok(Response::Attribute(AttributeFields {
                    trait_type: attribute.trait_type,
                    value: attribute.value,
                    display_type,
                }))
            }
        }
    }

    /// Like [`extract`](Self::extract), but reports recoverable failures as
    /// sentinel responses.
    pub fn process(&self, text: &str) -> FixtureResult<Response> {
        match self.extract(text) {
            Err(err) => match err.sentinel() {
                Some(sentinel) => {
                    warn!("{}; emitting {:?} sentinel", err, sentinel);
                    Ok(Response::Sentinel(sentinel))
                }
                None => Err(err),
            },
            ok => ok,
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Reads the fixture named by `request` and encodes it.
///
/// # Errors
///
/// Returns `FixtureError::Read` if the file cannot be read. Read failures
/// are never turned into a sentinel.
pub fn process_file(request: &FixtureRequest) -> FixtureResult<Response> {
    info!("Reading fixture: {}", request.path.display());
    let text = fs::read_to_string(&request.path).map_err(|source| FixtureError::Read {
        path: request.path.clone(),
        source,
    })?;
    info!("Read {} bytes", text.len());

    FixtureEncoder::new(request.mode).process(&text)
}
