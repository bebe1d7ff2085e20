#![no_main]

use libfuzzer_sys::fuzz_target;
use trust_segment::{dumps, SourceUnit};

const MAX_SOURCE_BYTES: usize = 4096;

fuzz_target!(|data: &[u8]| {
    let capped = &data[..data.len().min(MAX_SOURCE_BYTES)];
    let Ok(unit) = SourceUnit::from_bytes(capped) else {
        return;
    };
    let model = unit.to_model();
    assert!(dumps(&model).is_ok(), "extracted model must serialize");
    for (depth, node) in model.walk() {
        let _ = trust_segment::dumps_at(node, depth);
    }
});
