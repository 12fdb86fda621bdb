//! The five text analyzers behind the processor façade.
//!
//! Every analyzer works on canonical text (see [`crate::input::canonicalize`])
//! and is a pure function of it.

mod analyzer;
mod extractor;
mod frequency;
mod summarizer;
mod transformer;
mod validator;

pub use analyzer::{AnalysisReport, Analyzer, CharacterTypes, JsonKind, JsonStructure};
pub use extractor::{ExtractionReport, Extractor};
pub use frequency::{rank_frequencies, WordFrequency};
pub use summarizer::{strip_punctuation, SummaryReport, Summarizer};
pub use transformer::{clean_whitespace, TransformKind, Transformation, Transformer};
pub use validator::{ValidationReport, Validator};
