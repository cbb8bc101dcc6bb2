//! NFT item metadata as it appears in JSON fixtures.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Substituted when an attribute has no `display_type`.
pub const NO_DISPLAY_TYPE: &str = "noDisplayType";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemMetadata {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: String,
    /// Raw entries; each is only interpreted when selected by index.
    #[serde(default, deserialize_with = "lenient_list")]
    pub attributes: Vec<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Attribute {
    #[serde(default, deserialize_with = "lenient_string")]
    pub trait_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub value: String,
    /// `None` for any falsy value: absent, `null`, `false`, `0` or `""`.
    #[serde(default, deserialize_with = "truthy_string")]
    pub display_type: Option<String>,
}

impl ItemMetadata {
    /// Returns the attribute at `index`, or `None` if there is no object there.
    pub fn attribute(&self, index: usize) -> Option<Attribute> {
        let entry = self.attributes.get(index)?;
        if !entry.is_object() {
            return None;
        }
        Attribute::deserialize(entry).ok()
    }
}

impl Attribute {
    /// The display type, or [`NO_DISPLAY_TYPE`] when it is falsy.
    pub fn display_type_or_default(&self) -> &str {
        self.display_type.as_deref().unwrap_or(NO_DISPLAY_TYPE)
    }
}

/// Renders a JSON value as text. `null` becomes empty, strings are taken
/// as-is and other values use their JSON representation.
fn value_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(value_text)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn truthy_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok((!is_falsy(&value)).then(|| value_text(value)))
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => Vec::new(),
    })
}
