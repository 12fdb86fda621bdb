//! Fuzz target for structured input.
//!
//! Any bytes that decode as JSON are fed through the processor as a
//! structured input; containers must always yield a JSON structure.

#![no_main]

use datacore::{Input, Operation, OperationOutput, Processor};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        let input = Input::Structured(value);
        let record = Processor::new().run(&input, Operation::Analyze);
        if input.is_container() {
            match record.result() {
                Some(OperationOutput::Analysis(report)) => assert!(report.json_structure.is_some()),
                other => panic!("unexpected output: {:?}", other),
            }
        }
    }
});
