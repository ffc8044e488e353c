//! Two-phase backtracking search over a finished automaton.
//!
//! In the free phase tiles are consumed from the rack, and at every state the
//! search also tries to consume the required run from the automaton's own
//! edges. Once the run is consumed (or immediately, when there is none) the
//! search is in the contained phase: only rack tiles are consumed and every
//! accepting state reached yields its word, once per search.
//!
//! The recursion is kept on an explicit stack of [`Frame`]s so the search can
//! be driven lazily as an [`Iterator`]. Dropping the iterator cancels it.

use super::rack::{Rack, Tile};
use crate::dawg::types::{Dawg, DawgState, StateId, START_STATE};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// One suspended level of the recursion
#[derive(Debug)]
struct Frame {
    state: StateId,
    contained: bool,
    /// Path length on entry, restored whenever this frame resumes
    depth: usize,
    /// Next rack tile to try
    tile: usize,
    /// Next outgoing edge to try for a wildcard tile
    edge: usize,
    /// Tile consumed by the child currently being explored
    held: Option<usize>,
    /// Free phase only: the required run was already tried from here
    switched: bool,
}

impl Frame {
    fn new(state: StateId, contained: bool, depth: usize) -> Self {
        Self {
            state,
            contained,
            depth,
            tile: 0,
            edge: 0,
            held: None,
            switched: false,
        }
    }

    /// Advance to the next (tile, letter, target) move out of `state`
    fn next_move(
        &mut self,
        state: &DawgState,
        tiles: &[Tile],
        used: &[bool],
    ) -> Option<(usize, u8, StateId)> {
        while self.tile < tiles.len() {
            let i = self.tile;
            if used[i] || repeats_earlier(tiles, used, i) {
                self.skip_tile();
                continue;
            }
            match tiles[i] {
                Tile::Letter(letter) => {
                    self.skip_tile();
                    if let Some(target) = state.next(letter) {
                        return Some((i, letter, target));
                    }
                }
                Tile::Wildcard => {
                    if let Some(&(letter, target)) = state.edges.get(self.edge) {
                        self.edge += 1;
                        return Some((i, letter, target));
                    }
                    self.skip_tile();
                }
            }
        }
        None
    }

    fn skip_tile(&mut self) {
        self.tile += 1;
        self.edge = 0;
    }
}

/// An identical free tile earlier in the rack already covered this branch
fn repeats_earlier(tiles: &[Tile], used: &[bool], i: usize) -> bool {
    tiles[..i]
        .iter()
        .zip(used)
        .any(|(tile, &taken)| !taken && *tile == tiles[i])
}

/// Lazy search: yields each matching word once, in discovery order
pub struct SearchIter<'d> {
    dawg: &'d Dawg,
    tiles: Vec<Tile>,
    used: Vec<bool>,
    required: Vec<u8>,
    path: Vec<u8>,
    stack: Vec<Frame>,
    seen: FxHashSet<String>,
}

impl<'d> SearchIter<'d> {
    pub fn new(dawg: &'d Dawg, rack: &Rack, required: &[u8]) -> Self {
        let tiles = rack.tiles().to_vec();
        let contained = required.is_empty();
        Self {
            dawg,
            used: vec![false; tiles.len()],
            tiles,
            required: required.to_vec(),
            path: Vec::new(),
            stack: vec![Frame::new(START_STATE, contained, 0)],
            seen: FxHashSet::default(),
        }
    }

    /// Push a frame for `state` and report its word if it is a new match
    fn enter(&mut self, state: StateId, contained: bool) -> Option<String> {
        self.stack.push(Frame::new(state, contained, self.path.len()));
        if !contained || !self.dawg.is_accepting(state) {
            return None;
        }
        let word: String = self.path.iter().map(|&b| b as char).collect();
        if self.seen.insert(word.clone()) {
            Some(word)
        } else {
            None
        }
    }
}

impl Iterator for SearchIter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(frame) = self.stack.last_mut() {
            if let Some(tile) = frame.held.take() {
                self.used[tile] = false;
            }
            self.path.truncate(frame.depth);

            let state = self.dawg.state(frame.state);
            if let Some((tile, letter, target)) = frame.next_move(state, &self.tiles, &self.used) {
                frame.held = Some(tile);
                let contained = frame.contained;
                self.used[tile] = true;
                self.path.push(letter);
                if let Some(word) = self.enter(target, contained) {
                    return Some(word);
                }
                continue;
            }

            if !frame.contained && !frame.switched {
                frame.switched = true;
                let from = frame.state;
                if let Some(target) = self.dawg.follow(from, &self.required) {
                    self.path.extend_from_slice(&self.required);
                    if let Some(word) = self.enter(target, true) {
                        return Some(word);
                    }
                }
                continue;
            }

            self.stack.pop();
        }
        None
    }
}

/// Longest first, then alphabetical
pub fn result_order(a: &str, b: &str) -> Ordering {
    b.len().cmp(&a.len()).then_with(|| a.cmp(b))
}

/// Eager search: every match, longest first, then alphabetical
pub fn search_words(dawg: &Dawg, rack: &Rack, required: &[u8]) -> Vec<String> {
    let mut words: Vec<String> = SearchIter::new(dawg, rack, required).collect();
    words.sort_by(|a, b| result_order(a, b));
    words
}
