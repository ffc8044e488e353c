#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wordrack::dawg::build_dawg;
use wordrack::search::{search_words, Rack, SearchIter};

#[derive(Arbitrary, Debug)]
struct Input {
    words: Vec<String>,
    rack: String,
    required: String,
}

fuzz_target!(|input: Input| {
    // Keep only words the builder accepts
    let words: Vec<String> = input
        .words
        .into_iter()
        .map(|w| w.chars().filter(char::is_ascii_lowercase).take(12).collect::<String>())
        .filter(|w| !w.is_empty())
        .collect();
    let Ok(dawg) = build_dawg(&words) else {
        return;
    };

    let rack: String = input.rack.chars().filter(|c| c.is_ascii_lowercase() || *c == '?').take(8).collect();
    let Ok(rack) = Rack::parse(&rack) else {
        return;
    };
    let required: Vec<u8> = input.required.bytes().filter(u8::is_ascii_lowercase).take(4).collect();

    let eager = search_words(&dawg, &rack, &required);
    let lazy: Vec<String> = SearchIter::new(&dawg, &rack, &required).collect();
    assert_eq!(eager.len(), lazy.len());
    for word in &eager {
        assert!(dawg.contains(word));
    }
});
