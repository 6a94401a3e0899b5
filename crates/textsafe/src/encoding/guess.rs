//! Layered best-guess encoding inference.

use crate::encoding::codec::{canonical_name, decode, utf8_str};
use crate::encoding::detect::Detector;

#[cfg(feature = "detection")]
use crate::encoding::detect::ChardetngDetector;
#[cfg(not(feature = "detection"))]
use crate::encoding::detect::NoDetector;

#[cfg(feature = "detection")]
fn default_detector() -> impl Detector {
    ChardetngDetector
}

#[cfg(not(feature = "detection"))]
fn default_detector() -> impl Detector {
    NoDetector
}

/// Name the best-guess encoding for a byte sequence.
///
/// Probes in a fixed order:
///
/// 1. UTF-8. Its byte grammar is constrained enough that a clean decode is a
///    strong correctness signal.
/// 2. The statistical detector (chardetng, when the `detection` feature is
///    enabled). Its candidate is only returned if the bytes actually decode
///    under it.
/// 3. `latin1`. Total over bytes, so this function never fails to answer.
///
/// The returned name is always accepted by [`decode`](crate::decode).
///
/// # Examples
///
/// ```
/// use textsafe::guess_encoding;
///
/// assert_eq!(guess_encoding("señal".as_bytes()), "utf8");
/// ```
pub fn guess_encoding(bytes: &[u8]) -> String {
    guess_encoding_with(bytes, &default_detector())
}

/// [`guess_encoding`] with an explicit detector.
///
/// Pass [`NoDetector`](crate::NoDetector) to disable statistical detection;
/// the guesser then answers `utf8` or `latin1` only.
///
/// ```
/// use textsafe::{guess_encoding_with, NoDetector};
///
/// assert_eq!(guess_encoding_with(b"se\xF1al", &NoDetector), "latin1");
/// ```
pub fn guess_encoding_with(bytes: &[u8], detector: &dyn Detector) -> String {
    if utf8_str(bytes).is_some() {
        return String::from("utf8");
    }
    if let Some(candidate) = detector.detect(bytes) {
        let name = canonical_name(candidate);
        if decode(bytes, &name).is_ok() {
            tracing::debug!("Detector candidate {} survived strict decode", name);
            return name;
        }
        tracing::debug!("Detector candidate {} failed strict decode", name);
    }
    String::from("latin1")
}
