//! Query strings typed at the command line: `<rack> [required]`.

use crate::config::Config;
use crate::error::QueryError;
use crate::search::{parse_required, Rack};

/// Limits applied to interactive queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryLimits {
    pub max_wildcards: usize,
    pub max_rack: usize,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for QueryLimits {
    fn from(config: &Config) -> Self {
        Self {
            max_wildcards: config.max_wildcards,
            max_rack: config.max_rack,
        }
    }
}

/// Parsed query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub rack: Rack,
    pub required: Vec<u8>,
}

/// Parse `"<rack> [required]"`; anything after the second word is ignored
pub fn parse_query(input: &str, limits: &QueryLimits) -> Result<Query, QueryError> {
    let mut parts = input.split_whitespace();
    let rack = parts.next().ok_or(QueryError::Empty)?;
    let required = parts.next().unwrap_or("");
    parse_parts(rack, required, limits)
}

/// Parse a rack and a required run given as separate arguments.
///
/// Either may be empty, but not both.
pub fn parse_parts(rack: &str, required: &str, limits: &QueryLimits) -> Result<Query, QueryError> {
    if rack.trim().is_empty() && required.trim().is_empty() {
        return Err(QueryError::Empty);
    }

    let rack = Rack::parse(rack)?;
    if rack.len() > limits.max_rack {
        return Err(QueryError::TooLong {
            what: "rack",
            found: rack.len(),
            limit: limits.max_rack,
        });
    }
    if rack.wildcards() > limits.max_wildcards {
        return Err(QueryError::TooManyWildcards {
            found: rack.wildcards(),
            limit: limits.max_wildcards,
        });
    }

    let required = parse_required(required)?;
    if required.len() > limits.max_rack {
        return Err(QueryError::TooLong {
            what: "required run",
            found: required.len(),
            limit: limits.max_rack,
        });
    }

    Ok(Query { rack, required })
}
