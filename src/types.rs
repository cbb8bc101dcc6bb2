//! Output shapes produced by the fixture encoder and the SVG validator.

/// Item-level projection: `(name, description, image)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFields {
    pub name: String,
    pub description: String,
    /// Arbitrary text, usually a data URI.
    pub image: String,
}

/// Attribute-level projection: `(trait_type, value, display_type)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeFields {
    pub trait_type: String,
    pub value: String,
    /// `"noDisplayType"` when the source attribute has none.
    pub display_type: String,
}

/// Fixed payloads reporting a recoverable failure to the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
    /// The fixture text is not a JSON object.
    JsonParseFailure,
    /// The requested attribute does not exist.
    AttributeIndexOutOfBounds,
}

impl Sentinel {
    /// The message carried by the encoded payload.
    pub fn message(self) -> &'static str {
        match self {
            Sentinel::JsonParseFailure => {
                "JSON.parse failed. Likely the path to the file is wrong, the json is not populated, or the JSON is malformed."
            }
            Sentinel::AttributeIndexOutOfBounds => "Likely the attributeIndex is out of bounds.",
        }
    }
}

/// One of the four shapes the JSON fixture encoder can emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Item(ItemFields),
    Attribute(AttributeFields),
    Sentinel(Sentinel),
}

/// Result of validating an SVG fixture: `(isValid, svgText)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgReport {
    pub is_valid: bool,
    /// The fixture text with escaped quotes restored.
    pub svg: String,
}
