//! The `AbiEncode` trait connecting output shapes to the ABI wire format.
//!
//! Every shape the tools print, including the error sentinels, is encoded
//! as a contract ABI parameter list with `alloy-sol-types`, so the success
//! and failure payloads share one layout.

use alloy_sol_types::SolValue;

use crate::types::{AttributeFields, ItemFields, Response, Sentinel, SvgReport};

/// A value that can be written as an ABI parameter list.
///
/// # Example
///
/// ```
/// use fixture_abi::{AbiEncode, Sentinel};
///
/// let hex = Sentinel::AttributeIndexOutOfBounds.to_hex();
/// assert!(hex.starts_with("0x0000"));
/// ```
pub trait AbiEncode {
    /// Encodes the value's fields, in order, as ABI parameters.
    fn abi_encode(&self) -> Vec<u8>;

    /// Encodes the value as `0x`-prefixed lowercase hex.
    fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.abi_encode()))
    }
}

impl AbiEncode for ItemFields {
    fn abi_encode(&self) -> Vec<u8> {
        (self.name.clone(), self.description.clone(), self.image.clone()).abi_encode_params()
    }
}

impl AbiEncode for AttributeFields {
    fn abi_encode(&self) -> Vec<u8> {
        (
            self.trait_type.clone(),
            self.value.clone(),
            self.display_type.clone(),
        )
            .abi_encode_params()
    }
}

impl AbiEncode for Sentinel {
    fn abi_encode(&self) -> Vec<u8> {
        (self.message().to_owned(),).abi_encode_params()
    }
}

impl AbiEncode for Response {
    fn abi_encode(&self) -> Vec<u8> {
        match self {
            Response::Item(fields) => fields.abi_encode(),
            Response::Attribute(fields) => fields.abi_encode(),
            Response::Sentinel(sentinel) => sentinel.abi_encode(),
        }
    }
}

impl AbiEncode for SvgReport {
    fn abi_encode(&self) -> Vec<u8> {
        (self.is_valid, self.svg.clone()).abi_encode_params()
    }
}
