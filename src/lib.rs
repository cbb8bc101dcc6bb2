//! # fixture-abi - ABI-encoded test fixtures
//!
//! Reads NFT metadata JSON or SVG fixture files and ABI-encodes selected
//! fields as a hex string, for test harnesses that shell out and decode the
//! result.
//!
//! ## Example
//!
//! ```rust
//! use fixture_abi::{AbiEncode, FixtureEncoder, Mode};
//!
//! let json = r#"{"name": "n", "description": "d", "image": "i"}"#;
//! let response = FixtureEncoder::new(Mode::TopLevel).process(json)?;
//! println!("{}", response.to_hex());
//! # Ok::<(), fixture_abi::FixtureError>(())
//! ```

pub mod encoder;
pub mod error;
pub mod fixture;
pub mod logging;
pub mod metadata;
pub mod svg;
pub mod types;

// Re-export main types for convenient access
pub use encoder::AbiEncode;
pub use error::{FixtureError, FixtureResult};
pub use fixture::{process_file, FixtureEncoder, FixtureRequest, Mode};
pub use metadata::{Attribute, ItemMetadata};
pub use svg::validate_file;
pub use types::*;
