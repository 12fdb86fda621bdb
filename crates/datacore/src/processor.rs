//! The processor façade and its configuration.

use std::path::Path;

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::analysis::{Analyzer, Extractor, Summarizer, Transformer, Validator};
use crate::error::{DataCoreError, Result};
use crate::input::{canonicalize, Input};
use crate::record::{Operation, OperationOutput, ProcessRecord};

/// Configuration for the processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Character count above which `validate` warns about size.
    pub large_input_threshold: usize,
    /// Entries kept in `summarize`'s `most_common_words`.
    pub top_words: usize,
    /// Array item kinds listed in a JSON-structure descriptor.
    pub item_types_limit: usize,
    /// Stamp successful records with `processed_at`.
    pub include_timestamp: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            large_input_threshold: 10_000,
            top_words: 5,
            item_types_limit: 5,
            include_timestamp: true,
        }
    }
}

impl ProcessorConfig {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| DataCoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Reject settings that would make an operation meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.top_words == 0 {
            return Err(DataCoreError::Config("top_words must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Stateless entry point: canonicalize an input and dispatch one operation.
///
/// Holds only configuration and the analyzers built from it, so a single
/// instance can serve any number of threads.
///
/// ```
/// use datacore::{Input, Processor};
///
/// let processor = Processor::new();
/// let record = processor.process(&Input::from("mail me at a@b.io"), "extract");
/// assert!(record.is_success());
/// ```
#[derive(Debug, Clone)]
pub struct Processor {
    config: ProcessorConfig,
    analyzer: Analyzer,
    validator: Validator,
    transformer: Transformer,
    summarizer: Summarizer,
    extractor: Extractor,
}

impl Processor {
    /// Create a processor with default configuration.
    pub fn new() -> Self {
        Self::with_config(ProcessorConfig::default())
    }

    /// Create a processor with custom configuration.
    pub fn with_config(config: ProcessorConfig) -> Self {
        Self {
            analyzer: Analyzer::new(config.item_types_limit),
            validator: Validator::new(config.large_input_threshold),
            transformer: Transformer::new(),
            summarizer: Summarizer::new(config.top_words),
            extractor: Extractor::new(),
            config,
        }
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Run the operation named by `operation`.
    ///
    /// An unknown tag yields an [`ProcessRecord::Unsupported`] record listing
    /// the supported tags; nothing here panics or returns `Err`.
    pub fn process(&self, input: &Input, operation: &str) -> ProcessRecord {
        match operation.parse::<Operation>() {
            Ok(op) => self.run(input, op),
            Err(_) => {
                debug!(operation, "unsupported operation tag");
                ProcessRecord::unsupported(operation)
            }
        }
    }

    /// Run a typed operation.
    pub fn run(&self, input: &Input, operation: Operation) -> ProcessRecord {
        let text = canonicalize(input);
        debug!(%operation, length = text.len(), "dispatching");

        let processed_at = self.timestamp();
        match self.dispatch(&text, operation, processed_at.as_deref()) {
            Ok(output) => ProcessRecord::success(output, processed_at),
            Err(e) => {
                warn!(%operation, error = %e, "operation failed");
                ProcessRecord::failure(operation, &e)
            }
        }
    }

    /// Run every operation over one input, in [`Operation::ALL`] order.
    pub fn process_all(&self, input: &Input) -> Vec<ProcessRecord> {
        Operation::ALL.iter().map(|op| self.run(input, *op)).collect()
    }

    fn dispatch(
        &self,
        text: &str,
        operation: Operation,
        processed_at: Option<&str>,
    ) -> Result<OperationOutput> {
        let output = match operation {
            Operation::Analyze => {
                let mut report = self.analyzer.analyze(text);
                report.processed_at = processed_at.map(String::from);
                OperationOutput::Analysis(report)
            }
            Operation::Validate => OperationOutput::Validation(self.validator.validate(text)),
            Operation::Transform => OperationOutput::Transformations(self.transformer.transform(text)?),
            Operation::Summarize => OperationOutput::Summary(self.summarizer.summarize(text)),
            Operation::Extract => OperationOutput::Extraction(self.extractor.extract(text)?),
        };
        Ok(output)
    }

    fn timestamp(&self) -> Option<String> {
        self.config
            .include_timestamp
            .then(|| Local::now().to_rfc3339())
    }
}

impl Default for Processor {
    fn default() -> Self {
        Self::new()
    }
}
