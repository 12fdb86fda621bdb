//! Fuzz target for the processor façade.
//!
//! Checks that every operation and the NLP overlay:
//! 1. Never panic on arbitrary UTF-8
//! 2. Always return a record tagged with the requested operation

#![no_main]

use datacore::{Input, NlpProcessor, Operation, Processor};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let processor = Processor::new();
        let input = Input::from(text);
        for op in Operation::ALL {
            let record = processor.run(&input, op);
            assert_eq!(record.operation(), Some(op));
        }

        let _ = NlpProcessor::new().analyze(text);
    }
});
