//! Canonical state numbering.
//!
//! The start state becomes `0`. Every other state is numbered `1..N` by
//! descending reference count (one for being a state, plus one per incoming
//! edge), so heavily shared states get the shortest ids in the serialized
//! payload. Ties keep their discovery order from the transition walk.

use super::minimize::{StateIdx, Transitions};
use super::types::{Dawg, DawgState, StateId, START_STATE};
use rustc_hash::FxHashMap;

/// Assign canonical ids and build the finished automaton
pub fn renumber(transitions: &Transitions, root: StateIdx) -> Dawg {
    let order = ranking(transitions, root);

    let mut ids: FxHashMap<StateIdx, StateId> = FxHashMap::default();
    ids.insert(root, START_STATE);
    for (rank, &idx) in order.iter().enumerate() {
        ids.insert(idx, rank as StateId + 1);
    }

    let mut states = vec![DawgState::default(); transitions.len()];
    for (idx, signature) in transitions.iter() {
        states[ids[&idx] as usize] = DawgState {
            accepting: signature.accepting,
            edges: signature
                .edges
                .iter()
                .map(|&(letter, target)| (letter, ids[&target]))
                .collect(),
        };
    }

    log::debug!(
        "renumbered {} states, most referenced: {:?}",
        states.len(),
        order.first()
    );
    Dawg::from_states(states)
}

/// Non-root states, most referenced first
fn ranking(transitions: &Transitions, root: StateIdx) -> Vec<StateIdx> {
    let mut counts: FxHashMap<StateIdx, usize> =
        transitions.order.iter().map(|&idx| (idx, 1)).collect();
    for (_, signature) in transitions.iter() {
        for &(_, target) in &signature.edges {
            *counts.entry(target).or_default() += 1;
        }
    }

    let mut order: Vec<StateIdx> = transitions
        .order
        .iter()
        .copied()
        .filter(|&idx| idx != root)
        .collect();
    // stable: equal counts stay in discovery order
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order
}
