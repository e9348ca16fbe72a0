#![no_main]

use inference::{ReferenceSet, ScalerParams};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = ScalerParams::from_json(text);
        let _ = ReferenceSet::from_json(text);
    }
});
