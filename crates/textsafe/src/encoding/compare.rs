//! Encoding-aware equality.

use std::borrow::Cow;

use crate::encoding::codec::decode;
use crate::error::Result;
use crate::types::TextOrBytes;

fn realize<'a>(operand: TextOrBytes<'a>, encoding: &str) -> Result<Cow<'a, str>> {
    match operand {
        TextOrBytes::Text(text) => Ok(Cow::Borrowed(text)),
        TextOrBytes::Bytes(bytes) => decode(bytes, encoding),
    }
}

/// Compare two operands for exact textual equality under `encoding`.
///
/// Byte-sequence operands are decoded through the codec probe before the
/// comparison; text operands pass through untouched. A decode failure on
/// either operand propagates — equality is only evaluated once both operands
/// are realized as text.
///
/// ```
/// use textsafe::text_equal;
///
/// # fn main() -> textsafe::Result<()> {
/// assert!(text_equal("señal", "se\u{00F1}al".as_bytes(), "utf8")?);
/// assert!(text_equal("señal", b"se\xF1al", "latin1")?);
/// assert!(text_equal(b"se\xF1al", b"se\xF1al", "utf8").is_err());
/// # Ok(())
/// # }
/// ```
pub fn text_equal<'a, 'b>(
    a: impl Into<TextOrBytes<'a>>,
    b: impl Into<TextOrBytes<'b>>,
    encoding: &str,
) -> Result<bool> {
    Ok(realize(a.into(), encoding)? == realize(b.into(), encoding)?)
}
