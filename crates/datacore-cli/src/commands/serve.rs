//! Serve command - expose the processor over HTTP.

use std::sync::Arc;

use datacore::NlpProcessor;

use crate::cli::ProcessorArgs;
use crate::server::{run_server, AppState};

pub fn run(host: String, port: u16, processor_args: ProcessorArgs) -> Result<(), Box<dyn std::error::Error>> {
    let processor = super::build_processor(&processor_args)?;
    let state = AppState::new(Arc::new(processor), Arc::new(NlpProcessor::new()));

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_server(state, &host, port))
}
