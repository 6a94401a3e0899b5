pub mod codec;
pub mod compare;
pub mod detect;
pub mod guess;

pub use codec::{byte_string_valid_encoding, canonical_name, decode};
pub use compare::text_equal;
#[cfg(feature = "detection")]
pub use detect::ChardetngDetector;
pub use detect::{Detector, NoDetector};
pub use guess::{guess_encoding, guess_encoding_with};
