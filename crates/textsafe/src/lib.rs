//! Textsafe - Text-Safety Primitives for Bytes of Unknown Encoding
//!
//! Textsafe turns byte sequences of unknown or unreliable encoding into
//! well-formed text without crashing, corrupting data silently, or emitting
//! characters illegal in downstream formats such as XML.
//!
//! # Quick Start
//!
//! ```rust
//! use textsafe::{decode, guess_encoding, sanitize_control_chars, SanitizeStrategy};
//!
//! # fn main() -> textsafe::Result<()> {
//! // Latin-1 bytes, not valid UTF-8
//! let raw = b"El ping\xFCino salt\xF3";
//!
//! let name = guess_encoding(raw);
//! let text = decode(raw, &name)?;
//! let clean = sanitize_control_chars(&text, SanitizeStrategy::Ignore)?;
//! assert_eq!(clean, "El pingüino saltó");
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Encoding** (`encoding`): strict decoding through the encoding_rs
//!   registry, layered best-guess inference (UTF-8 → statistical detector →
//!   latin1), and encoding-aware equality
//! - **Text** (`text`): control-character sanitization policies and HTML
//!   entity decoding over already-decoded text
//! - **XML** (`xml`): character-legality checks against the XML 1.0 grammar
//!
//! The statistical detector is an injected capability: [`guess_encoding`]
//! uses chardetng when the `detection` feature is enabled (default), and any
//! [`Detector`] implementation can be substituted via
//! [`guess_encoding_with`] — including [`NoDetector`] to disable detection
//! entirely. Every operation is pure and synchronous; the library performs
//! no I/O.

#![deny(unsafe_code)]

pub mod encoding;
pub mod error;
pub mod text;
pub mod types;
pub mod xml;

pub use error::{Result, TextsafeError};

#[cfg(feature = "detection")]
pub use encoding::ChardetngDetector;
pub use encoding::{
    Detector, NoDetector, byte_string_valid_encoding, canonical_name, decode, guess_encoding,
    guess_encoding_with, text_equal,
};
pub use text::{SanitizeStrategy, is_control_char, sanitize_control_chars, unescape_entities};
pub use types::TextOrBytes;
pub use xml::{byte_string_valid_xml, is_legal_xml_char};
