//! Operation tags and the uniform result record returned by the processor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::{AnalysisReport, ExtractionReport, SummaryReport, Transformation, ValidationReport};
use crate::error::DataCoreError;

/// The closed set of operations the processor dispatches on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    #[default]
    Analyze,
    Validate,
    Transform,
    Summarize,
    Extract,
}

impl Operation {
    /// Every supported operation, in the order they are reported.
    pub const ALL: [Operation; 5] = [
        Operation::Analyze,
        Operation::Validate,
        Operation::Transform,
        Operation::Summarize,
        Operation::Extract,
    ];

    /// Tag as it appears at the boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Analyze => "analyze",
            Operation::Validate => "validate",
            Operation::Transform => "transform",
            Operation::Summarize => "summarize",
            Operation::Extract => "extract",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = DataCoreError;

    /// Tags are matched exactly; `"Analyze"` is not a supported tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| DataCoreError::UnsupportedOperation(s.to_string()))
    }
}

/// Outcome flag carried by every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Payload of a successful record; one variant per operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OperationOutput {
    Analysis(AnalysisReport),
    Validation(ValidationReport),
    Transformations(Vec<Transformation>),
    Summary(SummaryReport),
    Extraction(ExtractionReport),
}

impl OperationOutput {
    /// Operation that produces this kind of output.
    pub fn operation(&self) -> Operation {
        match self {
            OperationOutput::Analysis(_) => Operation::Analyze,
            OperationOutput::Validation(_) => Operation::Validate,
            OperationOutput::Transformations(_) => Operation::Transform,
            OperationOutput::Summary(_) => Operation::Summarize,
            OperationOutput::Extraction(_) => Operation::Extract,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuccessRecord {
    pub operation: Operation,
    pub status: Status,
    pub result: OperationOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureRecord {
    pub operation: Operation,
    pub status: Status,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnsupportedRecord {
    pub status: Status,
    pub error: String,
    pub supported_operations: Vec<Operation>,
}

/// What [`crate::Processor::process`] returns. A success never carries an
/// error and a failure never carries a result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProcessRecord {
    /// The operation ran.
    Success(SuccessRecord),
    /// The operation raised while processing.
    Failure(FailureRecord),
    /// The tag named no supported operation.
    Unsupported(UnsupportedRecord),
}

impl ProcessRecord {
    pub(crate) fn success(result: OperationOutput, processed_at: Option<String>) -> Self {
        ProcessRecord::Success(SuccessRecord {
            operation: result.operation(),
            status: Status::Success,
            result,
            processed_at,
        })
    }

    pub(crate) fn failure(operation: Operation, error: &DataCoreError) -> Self {
        ProcessRecord::Failure(FailureRecord {
            operation,
            status: Status::Error,
            error: format!("Data processing error: {}", error),
        })
    }

    pub(crate) fn unsupported(tag: &str) -> Self {
        ProcessRecord::Unsupported(UnsupportedRecord {
            status: Status::Error,
            error: DataCoreError::UnsupportedOperation(tag.to_string()).to_string(),
            supported_operations: Operation::ALL.to_vec(),
        })
    }

    pub fn status(&self) -> Status {
        match self {
            ProcessRecord::Success(_) => Status::Success,
            ProcessRecord::Failure(_) | ProcessRecord::Unsupported(_) => Status::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status() == Status::Success
    }

    /// The operation the record was produced for; `None` for an unsupported tag.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            ProcessRecord::Success(r) => Some(r.operation),
            ProcessRecord::Failure(r) => Some(r.operation),
            ProcessRecord::Unsupported(_) => None,
        }
    }

    pub fn result(&self) -> Option<&OperationOutput> {
        match self {
            ProcessRecord::Success(r) => Some(&r.result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ProcessRecord::Success(_) => None,
            ProcessRecord::Failure(r) => Some(&r.error),
            ProcessRecord::Unsupported(r) => Some(&r.error),
        }
    }

    /// The record as a JSON value, in the wire shape.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}
