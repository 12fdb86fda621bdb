//! Datacore: a stateless text-analysis core.
//!
//! A [`Processor`] takes an [`Input`] and an operation tag and returns a
//! [`ProcessRecord`]. Every input is first reduced to canonical text, which
//! the selected analyzer then inspects.
//!
//! # Operations
//!
//! - **analyze**: lengths, character classes, data type, JSON shape
//! - **validate**: emptiness, size, JSON parseability, HTML-like markup
//! - **transform**: pretty JSON, upper/lower case, collapsed whitespace
//! - **summarize**: line/word/character counts and top words
//! - **extract**: emails, URLs, integers, ISO dates
//!
//! Failures never escape as `Err`: an unknown tag and an analyzer error are
//! both reported as records.
//!
//! # Example
//!
//! ```
//! use datacore::{Input, Processor};
//!
//! let processor = Processor::new();
//! let record = processor.process(&Input::from("the quick brown fox"), "summarize");
//!
//! assert!(record.is_success());
//! println!("{}", record.to_value().unwrap());
//! ```
//!
//! The [`nlp`] module adds keyword, sentiment, entity, summary and language
//! views on top of the same pattern set.

pub mod analysis;
pub mod error;
pub mod input;
pub mod nlp;
pub mod patterns;

mod processor;
mod record;

pub use crate::processor::{Processor, ProcessorConfig};
pub use crate::record::{
    FailureRecord, Operation, OperationOutput, ProcessRecord, Status, SuccessRecord, UnsupportedRecord,
};
pub use analysis::{
    AnalysisReport, CharacterTypes, ExtractionReport, JsonKind, JsonStructure, SummaryReport,
    TransformKind, Transformation, ValidationReport, WordFrequency,
};
pub use error::{DataCoreError, Result};
pub use input::{DataType, Input};
pub use nlp::{Entities, Language, NlpConfig, NlpProcessor, NlpReport, Sentiment};
