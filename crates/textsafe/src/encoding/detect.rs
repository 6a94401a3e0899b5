//! The statistical detector as an injected capability.
//!
//! The guesser depends on [`Detector`] rather than on a concrete library, so
//! "no detector installed" is a value ([`NoDetector`]) instead of a runtime
//! presence check, and tests can substitute deterministic stubs.

use encoding_rs::Encoding;

/// Best-effort statistical encoding detection.
///
/// Implementations return `Some` only for a confident guess; `None` means
/// "no usable answer", which the guesser treats exactly like having no
/// detector at all. The returned encoding is a candidate, not a verdict: the
/// guesser still probes it against the actual bytes before trusting it.
pub trait Detector: Send + Sync {
    fn detect(&self, bytes: &[u8]) -> Option<&'static Encoding>;
}

/// Null detector standing in for "not installed".
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDetector;

impl Detector for NoDetector {
    fn detect(&self, _bytes: &[u8]) -> Option<&'static Encoding> {
        None
    }
}

/// Detector backed by chardetng.
///
/// chardetng's detector state is single-use, so each call feeds a fresh one.
/// The guess is surfaced only when chardetng assesses it as credible;
/// an unconfident guess becomes `None`.
#[cfg(feature = "detection")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ChardetngDetector;

#[cfg(feature = "detection")]
impl Detector for ChardetngDetector {
    fn detect(&self, bytes: &[u8]) -> Option<&'static Encoding> {
        if bytes.is_empty() {
            return None;
        }
        let mut detector = chardetng::EncodingDetector::new();
        detector.feed(bytes, true);
        let (guess, credible) = detector.guess_assess(None, true);
        credible.then_some(guess)
    }
}
