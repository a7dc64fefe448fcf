use super::*;

#[test]
fn codepoint_hex_normal_usage() {
    let hex = CodepointHex::try_from("1F525").unwrap();
    assert_eq!(hex.as_str(), "1F525");
    assert_eq!(hex.codepoint(), 0x1F525);
}

#[test]
fn codepoint_hex_pads_to_four_digits() {
    assert_eq!(CodepointHex::try_from("41").unwrap().as_str(), "0041");
    assert_eq!(CodepointHex::try_from("0").unwrap().as_str(), "0000");
    assert_eq!(CodepointHex::from_codepoint(0x41).unwrap().as_str(), "0041");
}

#[test]
fn codepoint_hex_normalizes_case_prefix_and_padding() {
    let expected = CodepointHex::try_from("00E9").unwrap();
    for raw in ["e9", "00e9", "U+00E9", "u+e9", " 000E9 "] {
        assert_eq!(CodepointHex::try_from(raw).unwrap(), expected, "raw {raw:?}");
    }
}

#[test]
fn codepoint_hex_rejects_empty_string() {
    CodepointHex::try_from("").unwrap_err();
    CodepointHex::try_from("U+").unwrap_err();
}

#[test]
fn codepoint_hex_rejects_non_hex() {
    CodepointHex::try_from("FIRE").unwrap_err();
    CodepointHex::try_from("12 34").unwrap_err();
}

#[test]
fn codepoint_hex_rejects_out_of_range() {
    CodepointHex::try_from("110000").unwrap_err();
    CodepointHex::from_codepoint(MAX_CODEPOINT + 1).unwrap_err();
    CodepointHex::from_codepoint(MAX_CODEPOINT).unwrap();
}
