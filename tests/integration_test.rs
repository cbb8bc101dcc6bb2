//! Integration tests using the fixture files under `tests/fixtures`.
//!
//! These tests go through the same entry points as the command-line tools
//! and decode the encoded output to check the payloads end to end.

use std::fs;
use std::path::PathBuf;

use alloy_sol_types::SolValue;
use fixture_abi::svg::unescape_quotes;
use fixture_abi::*;
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn encode_fixture(name: &str, mode: Mode) -> String {
    let request = FixtureRequest::new(fixture(name), mode);
    process_file(&request)
        .expect("Failed to process fixture")
        .to_hex()
}

/// Decodes the hex printed by the tools back into bytes.
fn payload(hex: &str) -> Vec<u8> {
    let digits = hex.strip_prefix("0x").expect("Expected 0x prefix");
    hex::decode(digits).expect("Failed to decode hex")
}

fn decode_triple(hex: &str) -> (String, String, String) {
    <(String, String, String)>::abi_decode_params(&payload(hex)).expect("Failed to decode")
}

// ============================================================================
// JSON Fixture Tests
// ============================================================================

#[test]
fn test_top_level_decodes_to_item_fields() {
    let hex = encode_fixture("item.json", Mode::TopLevel);
    let (name, description, image) = decode_triple(&hex);

    assert_eq!(name, "Example NFT #0");
    assert_eq!(description, "This is an example NFT");
    assert!(image.starts_with(r#"data:image/svg+xml;<svg xmlns="http://www.w3.org/2000/svg""#));
    assert!(image.ends_with("</svg>"));
}

#[test]
fn test_attribute_without_display_type() {
    let hex = encode_fixture("item.json", Mode::Attribute { index: 0 });

    assert_eq!(
        decode_triple(&hex),
        (
            "Example Attribute".to_owned(),
            "Example Value".to_owned(),
            "noDisplayType".to_owned()
        )
    );
}

#[test]
fn test_attribute_with_display_type() {
    let hex = encode_fixture("item.json", Mode::Attribute { index: 1 });

    assert_eq!(
        decode_triple(&hex),
        ("Number".to_owned(), "0".to_owned(), "number".to_owned())
    );
}

#[test]
fn test_attribute_index_out_of_bounds() {
    let hex = encode_fixture("item.json", Mode::Attribute { index: 5 });

    assert_eq!(hex, Sentinel::AttributeIndexOutOfBounds.to_hex());
    assert_eq!(
        hex,
        concat!(
            "0x",
            "0000000000000000000000000000000000000000000000000000000000000020",
            "000000000000000000000000000000000000000000000000000000000000002b",
            "4c696b656c792074686520617474726962757465496e646578206973206f7574",
            "206f6620626f756e64732e000000000000000000000000000000000000000000",
        )
    );
}

#[test]
fn test_malformed_json_emits_parse_failure_sentinel() {
    for mode in [Mode::TopLevel, Mode::Attribute { index: 0 }] {
        let hex = encode_fixture("malformed.json", mode);
        assert_eq!(hex, Sentinel::JsonParseFailure.to_hex());

        let (message,) = <(String,)>::abi_decode_params(&payload(&hex)).expect("Failed to decode");
        assert_eq!(message, Sentinel::JsonParseFailure.message());
    }
}

#[test]
fn test_missing_json_file_is_fatal() {
    let request = FixtureRequest::new(fixture("missing.json"), Mode::TopLevel);
    let err = process_file(&request).expect_err("Expected read failure");

    assert!(matches!(err, FixtureError::Read { .. }));
    assert!(err.sentinel().is_none());
}

// ============================================================================
// SVG Validator Tests
// ============================================================================

#[test]
fn test_valid_svg_fixture() {
    let raw = fs::read_to_string(fixture("valid.svg")).expect("Failed to read SVG");
    let report = validate_file(&fixture("valid.svg")).expect("Failed to validate SVG");

    let (is_valid, svg) =
        <(bool, String)>::abi_decode_params(&payload(&report.to_hex())).expect("Failed to decode");

    assert!(is_valid);
    assert_eq!(svg, unescape_quotes(&raw));
    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="500""#));
}

#[test]
fn test_invalid_svg_fixture() {
    let report = validate_file(&fixture("invalid.svg")).expect("Failed to validate SVG");
    let decoded =
        <(bool, String)>::abi_decode_params(&payload(&report.to_hex())).expect("Failed to decode");

    assert_eq!(decoded, (false, "this is not an svg file\n".to_owned()));
}

#[test]
fn test_missing_svg_file_is_fatal() {
    assert!(matches!(
        validate_file(&fixture("missing.svg")),
        Err(FixtureError::Read { .. })
    ));
}

// ============================================================================
// Round-trip Tests
// ============================================================================

#[test]
fn test_every_output_shape_round_trips() {
    let modes = [
        ("item.json", Mode::TopLevel),
        ("item.json", Mode::Attribute { index: 2 }),
        ("item.json", Mode::Attribute { index: 3 }),
        ("malformed.json", Mode::TopLevel),
    ];

    for (name, mode) in modes {
        let request = FixtureRequest::new(fixture(name), mode);
        let response = process_file(&request).expect("Failed to process fixture");
        let bytes = response.abi_encode();

        match &response {
            Response::Item(fields) => assert_eq!(
                <(String, String, String)>::abi_decode_params(&bytes).expect("Failed to decode"),
                (fields.name.clone(), fields.description.clone(), fields.image.clone()),
                "{} {:?}",
                name,
                mode
            ),
            Response::Attribute(fields) => assert_eq!(
                <(String, String, String)>::abi_decode_params(&bytes).expect("Failed to decode"),
                (
                    fields.trait_type.clone(),
                    fields.value.clone(),
                    fields.display_type.clone()
                ),
                "{} {:?}",
                name,
                mode
            ),
            Response::Sentinel(sentinel) => assert_eq!(
                <(String,)>::abi_decode_params(&bytes).expect("Failed to decode"),
                (sentinel.message().to_owned(),),
                "{} {:?}",
                name,
                mode
            ),
        }
    }

    let report = validate_file(&fixture("valid.svg")).expect("Failed to validate SVG");
    assert_eq!(
        <(bool, String)>::abi_decode_params(&report.abi_encode()).expect("Failed to decode"),
        (report.is_valid, report.svg.clone())
    );
}
