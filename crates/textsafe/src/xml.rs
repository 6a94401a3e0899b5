//! XML character-legality checks over byte sequences.

use crate::encoding::decode;
use crate::text::is_control_char;
use crate::types::TextOrBytes;

/// XML 1.0 valid char ranges:
/// - 0x09, 0x0A, 0x0D
/// - 0x20..=0xD7FF
/// - 0xE000..=0xFFFD
/// - 0x10000..=0x10FFFF
///
/// further excluding the control-character class (DEL and the C1 range sit
/// inside 0x20..=0xD7FF and are illegal in documents meant for XML).
pub fn is_legal_xml_char(c: char) -> bool {
    if is_control_char(c) {
        return false;
    }
    matches!(
        u32::from(c),
        0x09 | 0x0A | 0x0D | 0x20..=0xD7FF | 0xE000..=0xFFFD | 0x10000..=0x10FFFF
    )
}

/// Returns `true` iff `input` is a byte sequence that decodes cleanly under
/// `encoding` into text made entirely of legal XML 1.0 characters.
///
/// Already-decoded text is `false` unconditionally — validating decoded
/// input is explicitly not this predicate's job. Decode failures and
/// unknown encoding names are also `false`; the predicate never fails.
///
/// ```
/// use textsafe::byte_string_valid_xml;
///
/// assert!(byte_string_valid_xml("señal".as_bytes(), "utf8"));
/// assert!(!byte_string_valid_xml("señal", "utf8")); // text, not bytes
/// assert!(!byte_string_valid_xml(b"bell\x07", "utf8"));
/// ```
pub fn byte_string_valid_xml<'a>(input: impl Into<TextOrBytes<'a>>, encoding: &str) -> bool {
    let TextOrBytes::Bytes(bytes) = input.into() else {
        return false;
    };
    match decode(bytes, encoding) {
        Ok(text) => text.chars().all(is_legal_xml_char),
        Err(_) => false,
    }
}
