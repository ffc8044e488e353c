//! Word graph construction and serialization.
//!
//! A build runs left to right and every stage is a separate module:
//!
//! - [`trie`] - insert words into an uncompressed prefix tree
//! - [`minimize`] - hash-cons equal subtrees and walk the resulting DAG
//! - [`renumber`] - assign short canonical state ids
//! - [`codec`] - the `var dawg = {...};` payload and its parser
//! - [`build`] - the pipeline plus word list and payload file I/O
//! - [`stats`] - statistics report for the CLI

pub mod build;
pub mod codec;
pub mod minimize;
pub mod renumber;
pub mod stats;
pub mod trie;
pub mod types;

pub use build::{build_dawg, load_dawg, load_words, make_dawg, reminimize, write_dawg};
pub use codec::{from_mapping, parse_js, to_js, to_mapping, Mapping};
pub use types::*;
