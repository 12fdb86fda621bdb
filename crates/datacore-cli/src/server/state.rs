//! Application state for the web server.

use std::sync::Arc;

use datacore::{NlpProcessor, Processor};

/// Shared application state. Both values are immutable, so handlers only
/// ever clone the `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub processor: Arc<Processor>,
    pub nlp: Arc<NlpProcessor>,
}

impl AppState {
    pub fn new(processor: Arc<Processor>, nlp: Arc<NlpProcessor>) -> Self {
        Self { processor, nlp }
    }
}
