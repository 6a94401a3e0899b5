//! Strict decoding against named encodings.
//!
//! This is the single point where encoding-specific decoding happens; the
//! guesser, comparator, and validators all route through [`decode`].

use encoding_rs::Encoding;
use std::borrow::Cow;

use crate::error::{Result, TextsafeError};

/// A resolved decoder for a canonical encoding name.
///
/// `latin1` gets a dedicated arm: encoding_rs follows the WHATWG registry,
/// which aliases the `latin1` label to windows-1252. The fallback layer of
/// the guesser needs real ISO-8859-1 semantics, where every byte value maps
/// to the identically numbered code point and decoding is total.
pub(crate) enum ResolvedEncoding {
    Utf8,
    Latin1,
    Registry(&'static Encoding),
}

pub(crate) fn resolve(name: &str) -> Result<ResolvedEncoding> {
    let normalized = name.trim().to_ascii_lowercase().replace('-', "_");
    match normalized.as_str() {
        "utf8" | "utf_8" => Ok(ResolvedEncoding::Utf8),
        "latin1" | "latin_1" | "iso_8859_1" | "iso8859_1" | "8859" | "cp819" | "l1" => {
            Ok(ResolvedEncoding::Latin1)
        }
        _ => {
            let label = normalized.replace('_', "-");
            Encoding::for_label(label.as_bytes())
                .map(ResolvedEncoding::Registry)
                .ok_or_else(|| TextsafeError::UnknownEncoding(name.to_string()))
        }
    }
}

/// Canonical lowercase name for a registry decoder.
///
/// The output is always accepted by [`decode`] and resolves back to the same
/// decoder, so a detector result can be handed straight to callers as an
/// encoding name.
pub fn canonical_name(encoding: &'static Encoding) -> String {
    match encoding.name() {
        "UTF-8" => String::from("utf8"),
        name => name.to_ascii_lowercase().replace('-', "_"),
    }
}

#[cfg(feature = "simd-utf8")]
pub(crate) fn utf8_str(bytes: &[u8]) -> Option<&str> {
    simdutf8::basic::from_utf8(bytes).ok()
}

#[cfg(not(feature = "simd-utf8"))]
pub(crate) fn utf8_str(bytes: &[u8]) -> Option<&str> {
    std::str::from_utf8(bytes).ok()
}

/// ISO-8859-1 is total over bytes; borrow when the input is plain ASCII.
fn decode_latin1(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) if text.is_ascii() => Cow::Borrowed(text),
        _ => Cow::Owned(bytes.iter().map(|&byte| char::from(byte)).collect()),
    }
}

/// Attempt to decode `bytes` under `encoding`.
///
/// Strict: no replacement characters are emitted and no BOM is stripped.
/// Fails with [`TextsafeError::Decode`] when the bytes are malformed under
/// the encoding, or [`TextsafeError::UnknownEncoding`] when the name is not
/// recognized. Borrows the input whenever it is already valid UTF-8 under
/// the target encoding.
pub fn decode<'a>(bytes: &'a [u8], encoding: &str) -> Result<Cow<'a, str>> {
    match resolve(encoding)? {
        ResolvedEncoding::Utf8 => utf8_str(bytes).map(Cow::Borrowed).ok_or_else(|| {
            TextsafeError::Decode {
                encoding: String::from("utf8"),
            }
        }),
        ResolvedEncoding::Latin1 => Ok(decode_latin1(bytes)),
        ResolvedEncoding::Registry(registry) => registry
            .decode_without_bom_handling_and_without_replacement(bytes)
            .ok_or_else(|| TextsafeError::Decode {
                encoding: canonical_name(registry),
            }),
    }
}

/// Returns `true` iff `bytes` decodes cleanly under `encoding`.
///
/// Total over correctly typed input: decode failures and unknown encoding
/// names both yield `false`. Does not evaluate XML legality.
pub fn byte_string_valid_encoding(bytes: &[u8], encoding: &str) -> bool {
    decode(bytes, encoding).is_ok()
}
