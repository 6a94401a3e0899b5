pub mod control;
pub mod entities;

pub use control::{SanitizeStrategy, is_control_char, sanitize_control_chars};
pub use entities::unescape_entities;
