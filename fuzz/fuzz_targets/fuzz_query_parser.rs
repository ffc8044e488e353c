#![no_main]

use libfuzzer_sys::fuzz_target;
use wordrack::query::{parse_query, QueryLimits};

fuzz_target!(|data: &str| {
    // Arbitrary query strings must parse or fail cleanly
    let _ = parse_query(data, &QueryLimits::default());
});
