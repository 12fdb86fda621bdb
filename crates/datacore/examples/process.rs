//! Example: Run every datacore operation over a file.
//!
//! Usage:
//!   cargo run --example process -- <file_path>

use std::env;
use std::path::Path;

use datacore::{Input, NlpProcessor, Processor};

fn main() -> datacore::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example process -- <file_path>");
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    let input = Input::from_file(path)?;

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Datacore: {}", path.display());
    println!("{}", separator);
    println!();

    let processor = Processor::new();
    for record in processor.process_all(&input) {
        let label = record
            .operation()
            .map(|op| op.as_str())
            .unwrap_or("unknown");
        let status = if record.is_success() { "success" } else { "error" };
        println!("## {} ({})", label, status);
        println!("{}", serde_json::to_string_pretty(&record)?);
        println!();
    }

    if let Input::Text(text) = &input {
        let report = NlpProcessor::new().analyze(text);
        println!("## nlp");
        println!("  Language:  {}", report.language);
        println!("  Summary:   {}", report.summary);
        println!(
            "  Sentiment: +{:.2} / -{:.2} / ={:.2}",
            report.sentiment.positive, report.sentiment.negative, report.sentiment.neutral
        );
        for keyword in &report.keywords {
            println!("  {:20} {}", keyword.word, keyword.count);
        }
    }

    Ok(())
}
