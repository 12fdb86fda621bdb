//! API request handlers.

mod nlp;
mod process;

pub use nlp::*;
pub use process::*;
