//! Error types for textsafe.
//!
//! All fallible operations in the crate return [`TextsafeError`] through the
//! [`Result`] alias:
//!
//! - Use `thiserror` for automatic `Error` trait implementation
//! - Include context in error messages (encoding names, offsets)
//!
//! # Error Handling Philosophy
//!
//! **Content errors are loud:** [`decode`](crate::decode) and
//! [`text_equal`](crate::text_equal) fail with [`TextsafeError::Decode`] when
//! bytes are malformed under the asserted encoding, and strict-mode
//! sanitization fails with [`TextsafeError::ControlChar`]. Nothing is
//! silently replaced or dropped on these paths.
//!
//! **Validity predicates never fail:**
//! [`byte_string_valid_xml`](crate::byte_string_valid_xml) and
//! [`byte_string_valid_encoding`](crate::byte_string_valid_encoding) convert
//! every decode problem into `false`, so callers can treat them as total
//! functions.
use thiserror::Error;

/// Result type alias using `TextsafeError`.
///
/// This is the standard return type for all fallible operations in textsafe.
pub type Result<T> = std::result::Result<T, TextsafeError>;

/// Main error type for all textsafe operations.
///
/// # Variants
///
/// - `Decode` - a byte sequence is not valid under the asserted encoding
/// - `UnknownEncoding` - the encoding name resolves to no known decoder
/// - `ControlChar` - strict-mode sanitization hit a disallowed character
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextsafeError {
    #[error("byte sequence is not valid {encoding}")]
    Decode { encoding: String },

    #[error("unknown encoding name: {0}")]
    UnknownEncoding(String),

    #[error("control character {character:?} at position {offset}")]
    ControlChar { character: char, offset: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_message() {
        let err = TextsafeError::Decode {
            encoding: "euc_jp".to_string(),
        };
        assert_eq!(err.to_string(), "byte sequence is not valid euc_jp");
    }

    #[test]
    fn test_unknown_encoding_message() {
        let err = TextsafeError::UnknownEncoding("klingon".to_string());
        assert_eq!(err.to_string(), "unknown encoding name: klingon");
    }

    #[test]
    fn test_control_char_message_carries_character_and_offset() {
        let err = TextsafeError::ControlChar {
            character: '\u{0007}',
            offset: 12,
        };
        assert_eq!(err.to_string(), "control character '\\u{7}' at position 12");
    }

    #[test]
    fn test_errors_are_comparable() {
        let a = TextsafeError::UnknownEncoding("x".to_string());
        let b = TextsafeError::UnknownEncoding("x".to_string());
        assert_eq!(a, b);
    }
}
