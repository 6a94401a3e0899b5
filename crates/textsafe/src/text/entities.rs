//! HTML character-reference decoding.

use std::borrow::Cow;

/// Replace HTML named (`&amp;`), decimal (`&#38;`), and hex (`&#x26;`)
/// character references with their literal characters.
///
/// References that do not resolve — misspelled names, bare ampersands — are
/// left verbatim in the output, never dropped and never an error. Borrows
/// the input when there is nothing to decode.
///
/// ```
/// use textsafe::unescape_entities;
///
/// assert_eq!(unescape_entities("caf&eacute; &amp; bar"), "café & bar");
/// assert_eq!(unescape_entities("&#x2713; done"), "✓ done");
/// assert_eq!(unescape_entities("&not_an_entity_name;"), "&not_an_entity_name;");
/// ```
pub fn unescape_entities(text: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(text)
}
