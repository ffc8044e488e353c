//! Library-level checks across build, payload and search.

use std::fs;
use tempfile::TempDir;
use wordrack::dawg::{build_dawg, load_dawg, make_dawg, reminimize, StateId, START_STATE};
use wordrack::search::{result_order, Rack, Solver};
use wordrack::{Dawg, DawgError};

const WORDS: &[&str] = &[
    "a", "at", "ate", "eat", "eta", "tea", "tee", "teat", "late", "tale", "teal", "plate", "pleat",
    "petal", "leap", "plea", "pale", "peal", "lap", "pal", "alp", "apt", "pat", "tap", "taps",
    "pats", "past", "spat", "stap", "top", "tops", "stop", "spot", "post", "pots", "opts",
];

/// Letters of `word` left after taking out `required` at some position must
/// fit the rack, with wildcards covering any shortfall.
fn formable(word: &str, rack: &str, required: &str) -> bool {
    if word.is_empty() || !word.contains(required) {
        return false;
    }
    (0..=word.len() - required.len())
        .filter(|&i| word[i..].starts_with(required))
        .any(|i| {
            let rest = format!("{}{}", &word[..i], &word[i + required.len()..]);
            fits(&rest, rack)
        })
}

fn fits(letters: &str, rack: &str) -> bool {
    let mut counts = [0i32; 26];
    let mut wildcards = 0;
    for c in rack.bytes() {
        if c == b'?' {
            wildcards += 1;
        } else {
            counts[(c - b'a') as usize] += 1;
        }
    }
    let mut short = 0;
    for c in letters.bytes() {
        let slot = &mut counts[(c - b'a') as usize];
        if *slot > 0 {
            *slot -= 1;
        } else {
            short += 1;
        }
    }
    short <= wildcards
}

fn brute_force(rack: &str, required: &str) -> Vec<String> {
    let mut words: Vec<String> = WORDS
        .iter()
        .filter(|w| formable(w, rack, required))
        .map(|w| w.to_string())
        .collect();
    words.sort_by(|a, b| result_order(a, b));
    words.dedup();
    words
}

fn in_degree_counts(dawg: &Dawg) -> Vec<usize> {
    let mut counts = vec![1; dawg.len()];
    for state in dawg.states() {
        for &(_, target) in &state.edges {
            counts[target as usize] += 1;
        }
    }
    counts
}

#[test]
fn test_dawg_holds_exactly_the_words() {
    let dawg = build_dawg(WORDS).unwrap();
    let mut expected: Vec<String> = WORDS.iter().map(|w| w.to_string()).collect();
    expected.sort();
    assert_eq!(dawg.words(), expected);
    assert!(!dawg.contains("plat"));
    assert!(!dawg.contains(""));
}

#[test]
fn test_ids_follow_reference_counts() {
    let dawg = build_dawg(WORDS).unwrap();
    let counts = in_degree_counts(&dawg);

    // every non-start state is reachable, so its count is at least 2
    assert!(counts[1..].iter().all(|&c| c >= 2));
    // start aside, more referenced states get smaller ids
    assert!(counts[1..].windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn test_rebuild_is_stable() {
    let dawg = build_dawg(WORDS).unwrap();
    let again = reminimize(&dawg);
    assert_eq!(again.len(), dawg.len());
    assert_eq!(again.words(), dawg.words());

    let mut reversed: Vec<&str> = WORDS.to_vec();
    reversed.reverse();
    assert_eq!(build_dawg(reversed).unwrap(), dawg);
}

#[test]
fn test_search_agrees_with_brute_force() {
    let solver = Solver::with_dawg(build_dawg(WORDS).unwrap());
    let cases = [
        ("aetl?", "at"),
        ("aetlp", ""),
        ("??", "ta"),
        ("stop", ""),
        ("pst", "o"),
        ("ee", "t"),
        ("", "tea"),
        ("a?", "pl"),
        ("zzz", ""),
    ];

    for (rack, required) in cases {
        let eager = solver.search(rack, required).unwrap();
        assert_eq!(eager, brute_force(rack, required), "rack {:?} run {:?}", rack, required);

        let mut lazy: Vec<String> = solver.isearch(rack, required).unwrap().collect();
        lazy.sort_by(|a, b| result_order(a, b));
        assert_eq!(lazy, eager, "lazy rack {:?} run {:?}", rack, required);
    }
}

#[test]
fn test_payload_round_trip_through_files() {
    let dir = TempDir::new().unwrap();
    let words = dir.path().join("words.txt");
    fs::write(&words, WORDS.join("\n").to_uppercase()).unwrap();
    let payload = dir.path().join("site").join("dawg.js");

    let built = make_dawg(&words, &payload, true).unwrap();
    let loaded = load_dawg(&payload).unwrap();
    assert_eq!(loaded, built);

    let text = fs::read_to_string(&payload).unwrap();
    assert!(text.starts_with("var dawg = {\n    \"0\": {"));

    let rack: Rack = "stop".parse().unwrap();
    assert_eq!(rack.len(), 4);
    let state: StateId = loaded.follow(START_STATE, b"sto").unwrap();
    assert!(loaded.state(state).next(b'p').is_some());
}

#[test]
fn test_unloaded_solver() {
    let solver = Solver::new();
    assert!(matches!(solver.search("abc", ""), Err(DawgError::NotLoaded)));
}

#[test]
fn test_malformed_payload_is_rejected() {
    let dir = TempDir::new().unwrap();
    let payload = dir.path().join("dawg.js");
    fs::write(&payload, r#"var dawg = {"0": {"a": "7"}};"#).unwrap();
    assert!(matches!(load_dawg(&payload), Err(DawgError::Malformed(_))));
}
