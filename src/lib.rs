//! # wordrack - word graph builder and rack solver
//!
//! wordrack compiles a word list into a minimal acyclic word automaton (a
//! DAWG) and answers word-game queries against it: every dictionary word that
//! can be formed from a rack of letter and wildcard tiles and that contains a
//! required run of letters.
//!
//! ## Architecture
//!
//! - [`dawg`] - trie, hash-consing minimizer, renumbering and the payload codec
//! - [`search`] - rack parsing and the two-phase backtracking search
//! - [`query`] - command-line query strings with limits
//! - [`site`] - service worker cache token and the full site build
//! - [`config`] - JSON configuration
//! - [`output`] - result formatting
//!
//! ## Quick Start
//!
//! ```
//! use wordrack::dawg::build_dawg;
//! use wordrack::search::Solver;
//!
//! let dawg = build_dawg(["at", "ate", "eat", "eta", "tea", "late", "plate"]).unwrap();
//! assert!(dawg.contains("plate"));
//!
//! let solver = Solver::with_dawg(dawg);
//! let words = solver.search("aetl?", "at").unwrap();
//! assert_eq!(words, ["plate", "late", "ate", "eat", "at"]);
//! ```
//!
//! ## Payload
//!
//! The automaton is stored as `var dawg = {...};` where the object maps each
//! state id to `{letter: target}` and accepting states carry `"$": "0"`. State
//! `0` is the start state.

pub mod config;
pub mod dawg;
pub mod error;
pub mod output;
pub mod query;
pub mod search;
pub mod site;
pub mod utils;

pub use dawg::Dawg;
pub use error::{DawgError, QueryError};
pub use search::Solver;
