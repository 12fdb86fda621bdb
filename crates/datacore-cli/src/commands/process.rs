//! Process command - run one operation and print the result record.

use colored::Colorize;
use datacore::ProcessRecord;

use crate::cli::{InputArgs, ProcessorArgs};

pub fn run(
    source: InputArgs,
    operation: String,
    processor_args: ProcessorArgs,
    pretty: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = super::read_input(&source)?;
    let processor = super::build_processor(&processor_args)?;

    let record = processor.process(&input, &operation);

    if verbose {
        eprintln!("{} {}", "Operation".cyan().bold(), operation.white());
        eprintln!("{}", status_line(&record));
    }

    println!("{}", super::render(&record, pretty)?);

    match record.error() {
        Some(message) => Err(message.to_string().into()),
        None => Ok(()),
    }
}

/// One colored line describing the record's outcome.
pub fn status_line(record: &ProcessRecord) -> String {
    match record {
        ProcessRecord::Success(r) => format!("{} {}", "success".green().bold(), r.operation),
        ProcessRecord::Failure(r) => format!("{} {}: {}", "error".red().bold(), r.operation, r.error),
        ProcessRecord::Unsupported(r) => {
            let tags: Vec<_> = r.supported_operations.iter().map(|op| op.as_str()).collect();
            format!("{} {} (supported: {})", "error".red().bold(), r.error, tags.join(", "))
        }
    }
}
