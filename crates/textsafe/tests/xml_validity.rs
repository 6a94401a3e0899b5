//! XML character-legality and encoding-validity integration tests.

use textsafe::{byte_string_valid_encoding, byte_string_valid_xml};

const JAPANESE: &str = "日本語のテキストです。";

const EUC_JP_JAPANESE: &[u8] = &[
    0xC6, 0xFC, 0xCB, 0xDC, 0xB8, 0xEC, 0xA4, 0xCE, 0xA5, 0xC6, 0xA5, 0xAD, 0xA5, 0xB9, 0xA5,
    0xC8, 0xA4, 0xC7, 0xA4, 0xB9, 0xA1, 0xA3,
];

#[test]
fn test_text_operand_is_never_valid_xml() {
    assert!(!byte_string_valid_xml("unicode string", "utf8"));
    assert!(!byte_string_valid_xml(JAPANESE, "utf8"));
}

#[test]
fn test_valid_xml_requires_matching_encoding() {
    assert!(byte_string_valid_xml(JAPANESE.as_bytes(), "utf8"));
    assert!(byte_string_valid_xml(EUC_JP_JAPANESE, "euc_jp"));

    assert!(!byte_string_valid_xml(JAPANESE.as_bytes(), "euc_jp"));
    assert!(!byte_string_valid_xml(EUC_JP_JAPANESE, "utf8"));
}

#[test]
fn test_valid_xml_rejects_control_characters() {
    let with_controls: Vec<u8> = (0u8..=0x7F).collect();
    assert!(!byte_string_valid_xml(&with_controls, "utf8"));

    assert!(byte_string_valid_xml(b"tab\tand\nlines\r", "utf8"));
    assert!(!byte_string_valid_xml(b"escape\x1B[0m", "utf8"));
}

#[test]
fn test_valid_encoding_is_a_pure_decode_check() {
    assert!(byte_string_valid_encoding(JAPANESE.as_bytes(), "utf8"));
    assert!(byte_string_valid_encoding(EUC_JP_JAPANESE, "euc_jp"));
    assert!(!byte_string_valid_encoding(EUC_JP_JAPANESE, "utf8"));
    assert!(!byte_string_valid_encoding(b"\xFF", "utf8"));

    // Control characters are an XML concern, not an encoding concern.
    assert!(byte_string_valid_encoding(b"bell\x07", "utf8"));
    assert!(!byte_string_valid_xml(b"bell\x07", "utf8"));
}

#[test]
fn test_latin1_decodes_anything_but_xml_legality_still_gates() {
    let c1_bytes: &[u8] = &[0x80, 0x90, 0x9F]; // C1 controls under latin1
    assert!(byte_string_valid_encoding(c1_bytes, "latin1"));
    assert!(!byte_string_valid_xml(c1_bytes, "latin1"));

    let accented: &[u8] = &[0xE1, 0xE9, 0xED]; // áéí under latin1
    assert!(byte_string_valid_xml(accented, "latin1"));
}

#[test]
fn test_unknown_encoding_is_false_in_both_predicates() {
    assert!(!byte_string_valid_encoding(b"abc", "klingon"));
    assert!(!byte_string_valid_xml(b"abc", "klingon"));
}
