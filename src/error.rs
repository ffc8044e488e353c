//! Typed errors for the library surface.
//!
//! The binary wraps these in `anyhow` with context; library callers can
//! match on the variants.

use thiserror::Error;

/// Errors raised while building, loading or searching a word graph.
#[derive(Debug, Error)]
pub enum DawgError {
    /// A search was requested before any automaton was built or loaded.
    #[error("DAWG is not loaded, build or load one first")]
    NotLoaded,
    /// The input word list or a serialized automaton is not well formed.
    #[error("malformed input: {0}")]
    Malformed(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Query(#[from] QueryError),
}

/// Errors raised while parsing a rack or a required run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid tile {0:?}: racks may only contain a-z and '?'")]
    InvalidTile(char),
    #[error("invalid letter {0:?} in required run: only a-z allowed")]
    InvalidRequired(char),
    #[error("too many wildcards: {found} (limit {limit})")]
    TooManyWildcards { found: usize, limit: usize },
    #[error("{what} is too long: {found} tiles (limit {limit})")]
    TooLong {
        what: &'static str,
        found: usize,
        limit: usize,
    },
    #[error("empty query")]
    Empty,
}
