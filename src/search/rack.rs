use crate::dawg::types::is_letter;
use crate::error::QueryError;
use std::fmt;
use std::str::FromStr;

/// Rack character that stands for any letter
pub const WILDCARD: char = '?';

/// A single rack tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Letter(u8),
    /// Substitutes for any letter, independently at each use
    Wildcard,
}

impl Tile {
    /// Parse one lowercase character
    pub fn parse(c: char) -> Result<Self, QueryError> {
        if c == WILDCARD {
            return Ok(Tile::Wildcard);
        }
        if c.is_ascii() && is_letter(c as u8) {
            Ok(Tile::Letter(c as u8))
        } else {
            Err(QueryError::InvalidTile(c))
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Letter(b) => write!(f, "{}", *b as char),
            Tile::Wildcard => write!(f, "{}", WILDCARD),
        }
    }
}

/// The ordered tiles available to one search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rack {
    tiles: Vec<Tile>,
}

impl Rack {
    pub fn new(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Parse a rack pattern such as `aetl?`. Input is lowercased first.
    pub fn parse(pattern: &str) -> Result<Self, QueryError> {
        let tiles = pattern
            .trim()
            .to_lowercase()
            .chars()
            .map(Tile::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { tiles })
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of wildcard tiles
    pub fn wildcards(&self) -> usize {
        self.tiles.iter().filter(|t| **t == Tile::Wildcard).count()
    }
}

impl FromStr for Rack {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rack::parse(s)
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.tiles {
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}

/// Parse a required run. Empty input means no constraint.
pub fn parse_required(run: &str) -> Result<Vec<u8>, QueryError> {
    run.trim()
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii() && is_letter(c as u8) {
                Ok(c as u8)
            } else {
                Err(QueryError::InvalidRequired(c))
            }
        })
        .collect()
}
