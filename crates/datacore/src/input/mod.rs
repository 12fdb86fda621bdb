//! Input handling: the input variant, canonical text, and data-type detection.

mod normalize;
mod source;

pub use normalize::{canonicalize, detect_type, parse_json};
pub use source::{DataType, Input};
