//! SVG fixture validation.
//!
//! Fixtures are written by the harness with JSON-style escaped quotes
//! (`\"`). Those are restored before the text is checked, and the restored
//! text is what gets encoded.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{FixtureError, FixtureResult};
use crate::types::SvgReport;

/// Path read when none is given.
pub const DEFAULT_SVG_PATH: &str = "./test-ffi/tmp/temp.svg";

/// Namespace the root `<svg>` element must declare.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Replaces every `\"` with `"`.
pub fn unescape_quotes(raw: &str) -> String {
    raw.replace("\\\"", "\"")
}

/// Returns true if `text` is well-formed XML whose root element is `svg`
/// in the SVG namespace. Surrounding whitespace is ignored.
pub fn is_svg(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }

    let doc = match roxmltree::Document::parse(trimmed) {
        Ok(doc) => doc,
        Err(e) => {
            debug!("Not well-formed XML: {}", e);
            return false;
        }
    };

    let root = doc.root_element().tag_name();
    let valid = root.name() == "svg" && root.namespace() == Some(SVG_NAMESPACE);
    if !valid {
        debug!(
            "Root element is {:?} in namespace {:?}",
            root.name(),
            root.namespace()
        );
    }
    valid
}

impl SvgReport {
    /// Unescapes `raw` and validates the result.
    pub fn from_raw(raw: &str) -> Self {
        let svg = unescape_quotes(raw);
        let is_valid = is_svg(&svg);
        Self { is_valid, svg }
    }
}

/// Reads and validates the SVG fixture at `path`.
///
/// # Errors
///
/// Returns `FixtureError::Read` if the file cannot be read.
pub fn validate_file(path: &Path) -> FixtureResult<SvgReport> {
    info!("Reading SVG fixture: {}", path.display());
    let raw = fs::read_to_string(path).map_err(|source| FixtureError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let report = SvgReport::from_raw(&raw);
    info!("SVG valid: {}", report.is_valid);
    Ok(report)
}
