//! Datacore CLI - text analysis from the command line or over HTTP.

mod cli;
mod commands;
mod server;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Process {
            source,
            operation,
            processor,
            pretty,
        } => commands::process::run(source, operation, processor, pretty, cli.verbose),

        Commands::Report {
            source,
            processor,
            pretty,
        } => commands::report::run(source, processor, pretty, cli.verbose),

        Commands::Nlp {
            source,
            view,
            top_n,
            max_length,
        } => commands::nlp::run(source, view, top_n, max_length),

        Commands::Serve {
            host,
            port,
            processor,
        } => commands::serve::run(host, port, processor),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over the verbosity flag.
fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
