//! Report command - run every operation over one input.

use colored::Colorize;

use crate::cli::{InputArgs, ProcessorArgs};

pub fn run(
    source: InputArgs,
    processor_args: ProcessorArgs,
    pretty: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = super::read_input(&source)?;
    let processor = super::build_processor(&processor_args)?;

    let records = processor.process_all(&input);

    if verbose {
        for record in &records {
            eprintln!("{}", super::process::status_line(record));
        }
    }

    println!("{}", super::render(&records, pretty)?);

    let failed = records.iter().filter(|r| !r.is_success()).count();
    if failed > 0 {
        eprintln!(
            "{} of {} operations failed",
            failed.to_string().red().bold(),
            records.len()
        );
        return Err(format!("{} operations failed", failed).into());
    }

    Ok(())
}
