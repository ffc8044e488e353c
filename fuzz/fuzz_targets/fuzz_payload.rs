#![no_main]

use libfuzzer_sys::fuzz_target;
use wordrack::dawg::{from_mapping, parse_js};

fuzz_target!(|data: &str| {
    // Loading untrusted payloads must never panic
    if let Ok(mapping) = parse_js(data) {
        let _ = from_mapping(&mapping);
    }
});
