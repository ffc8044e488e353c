//! Performance benchmarks for wordrack
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::fs;
use tempfile::TempDir;
use wordrack::dawg::{build_dawg, load_dawg, to_js, Dawg};
use wordrack::search::{search_words, Rack, SearchIter};

/// A synthetic word list: consonant-vowel-consonant stems with common endings
fn sample_words() -> Vec<String> {
    let onsets = ["b", "c", "d", "f", "g", "h", "l", "m", "p", "r", "s", "t", "st", "pl", "tr"];
    let vowels = ["a", "e", "i", "o", "u", "ea", "oo"];
    let codas = ["t", "n", "p", "r", "d", "ck", "ll", "st"];
    let endings = ["", "s", "er", "ers", "ed", "ing", "y"];

    let mut words = Vec::new();
    for onset in onsets {
        for vowel in vowels {
            for coda in codas {
                for ending in endings {
                    words.push(format!("{}{}{}{}", onset, vowel, coda, ending));
                }
            }
        }
    }
    words.sort();
    words.dedup();
    words
}

fn sample_dawg() -> Dawg {
    build_dawg(sample_words()).expect("Failed to build dawg")
}

fn bench_build(c: &mut Criterion) {
    let words = sample_words();

    c.bench_function("build_dawg", |b| {
        b.iter(|| build_dawg(black_box(&words)))
    });
}

fn bench_payload(c: &mut Criterion) {
    let dawg = sample_dawg();
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("dawg.js");
    fs::write(&path, to_js(&dawg).expect("Failed to encode")).expect("Failed to write payload");

    let mut group = c.benchmark_group("payload");
    group.bench_function("encode", |b| b.iter(|| to_js(black_box(&dawg))));
    group.bench_function("load", |b| b.iter(|| load_dawg(black_box(&path))));
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let dawg = sample_dawg();
    let queries = [
        ("steaning", ""),
        ("plotters", "er"),
        ("tra?ing", "ck"),
        ("s??ed", ""),
        ("bcdlmpr??", "oo"),
    ];

    let mut group = c.benchmark_group("search");
    for (letters, required) in queries {
        let rack = Rack::parse(letters).expect("Failed to parse rack");
        let required = required.as_bytes().to_vec();
        let label = format!("{} {}", letters, String::from_utf8_lossy(&required));

        group.bench_with_input(BenchmarkId::new("eager", &label), &rack, |b, rack| {
            b.iter(|| search_words(&dawg, black_box(rack), &required))
        });

        // time to the first hit
        group.bench_with_input(BenchmarkId::new("first", &label), &rack, |b, rack| {
            b.iter(|| SearchIter::new(&dawg, black_box(rack), &required).next())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_payload, bench_search);

criterion_main!(benches);
