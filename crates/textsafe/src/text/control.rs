//! Control-character sanitization policies.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::error::{Result, TextsafeError};

static CONTROL_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x00-\x08\x0B-\x0C\x0E-\x1F\x7F-\x9F]")
        .expect("Control chars regex pattern is valid and should compile")
});

// ============================================================================

/// What to do with control characters found in text.
///
/// Lowercase names (`strict`, `ignore`, `replace`) are used in serialized
/// config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SanitizeStrategy {
    /// Fail on the first control character; nothing is sanitized.
    Strict,
    /// Drop every control character, preserving the rest in order.
    Ignore,
    /// Substitute U+FFFD for every control character, preserving length.
    Replace,
}

impl SanitizeStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SanitizeStrategy::Strict => "strict",
            SanitizeStrategy::Ignore => "ignore",
            SanitizeStrategy::Replace => "replace",
        }
    }
}

/// True for the C0 range (U+0000–U+001F) and U+007F–U+009F, except tab,
/// newline, and carriage return, which are conventional whitespace and never
/// treated as control here.
pub fn is_control_char(c: char) -> bool {
    matches!(u32::from(c), 0x00..=0x08 | 0x0B | 0x0C | 0x0E..=0x1F | 0x7F..=0x9F)
}

/// Apply `strategy` to every control character in `text`.
///
/// `Strict` fails with [`TextsafeError::ControlChar`] carrying the offending
/// character and its code-point offset. `Ignore` and `Replace` always
/// succeed and borrow the input when it is already clean.
///
/// ```
/// use textsafe::{sanitize_control_chars, SanitizeStrategy};
///
/// # fn main() -> textsafe::Result<()> {
/// let cleaned = sanitize_control_chars("tab\tok\u{0007}bell", SanitizeStrategy::Ignore)?;
/// assert_eq!(cleaned, "tab\tokbell");
/// # Ok(())
/// # }
/// ```
pub fn sanitize_control_chars(text: &str, strategy: SanitizeStrategy) -> Result<Cow<'_, str>> {
    match strategy {
        SanitizeStrategy::Strict => {
            if let Some((offset, character)) =
                text.chars().enumerate().find(|&(_, c)| is_control_char(c))
            {
                return Err(TextsafeError::ControlChar { character, offset });
            }
            Ok(Cow::Borrowed(text))
        }
        SanitizeStrategy::Ignore => Ok(CONTROL_CHARS.replace_all(text, "")),
        SanitizeStrategy::Replace => Ok(CONTROL_CHARS.replace_all(text, "\u{FFFD}")),
    }
}
