//! Higher-level text views: tokens, keywords, sentiment, entities, a
//! one-sentence summary and coarse English/Spanish detection.
//!
//! The word lists are held by an [`NlpProcessor`] value. Build one at
//! startup and pass it to whatever needs it.

mod lexicon;
mod processor;

pub use processor::{Entities, Language, NlpConfig, NlpProcessor, NlpReport, Sentiment};
