//! Hash-consing minimization of a trie into a DAG.
//!
//! States are merged bottom-up: a node is canonicalized only after all of its
//! children have been, and its [`Signature`] is made of the merged ids of
//! those children. Two subtrees therefore share a signature exactly when they
//! accept the same set of suffixes, and the registry lookup yields the unique
//! minimal automaton.

use super::trie::TrieNode;
use super::types::{Dawg, StateId, START_STATE};
use rustc_hash::FxHashMap;

/// Index of a merged state in the minimizer's arena
pub type StateIdx = u32;

/// Structural key of a merged state.
///
/// Edges are sorted by label and point at already-merged states, so the key
/// is injective over structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    pub accepting: bool,
    pub edges: Vec<(u8, StateIdx)>,
}

impl Signature {
    /// Canonicalize a node given the merged ids of its children.
    ///
    /// The edges are sorted here, so callers may supply them in any order.
    pub fn new(accepting: bool, mut edges: Vec<(u8, StateIdx)>) -> Self {
        edges.sort_unstable_by_key(|&(letter, _)| letter);
        Self { accepting, edges }
    }
}

/// Registry of canonical states, keyed by signature
#[derive(Debug, Default)]
pub struct Minimizer {
    arena: Vec<Signature>,
    registry: FxHashMap<Signature, StateIdx>,
    merged: usize,
}

impl Minimizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the arena index for `signature`, registering it if unseen
    pub fn intern(&mut self, signature: Signature) -> StateIdx {
        if let Some(&idx) = self.registry.get(&signature) {
            self.merged += 1;
            return idx;
        }
        let idx = self.arena.len() as StateIdx;
        self.arena.push(signature.clone());
        self.registry.insert(signature, idx);
        idx
    }

    /// Consume a trie, children before parents, returning the root's index
    pub fn minimize(&mut self, node: TrieNode) -> StateIdx {
        let (terminal, children) = node.into_parts();
        let edges = children
            .into_iter()
            .map(|(letter, child)| (letter, self.minimize(child)))
            .collect();
        self.intern(Signature::new(terminal, edges))
    }

    /// Re-intern the states of a finished automaton, returning the new root.
    pub fn minimize_dawg(&mut self, dawg: &Dawg) -> StateIdx {
        let mut done: FxHashMap<StateId, StateIdx> = FxHashMap::default();
        self.minimize_state(dawg, START_STATE, &mut done)
    }

    fn minimize_state(
        &mut self,
        dawg: &Dawg,
        id: StateId,
        done: &mut FxHashMap<StateId, StateIdx>,
    ) -> StateIdx {
        if let Some(&idx) = done.get(&id) {
            return idx;
        }
        let state = dawg.state(id);
        let edges = state
            .edges
            .iter()
            .map(|&(letter, target)| (letter, self.minimize_state(dawg, target, done)))
            .collect();
        let idx = self.intern(Signature::new(state.accepting, edges));
        done.insert(id, idx);
        idx
    }

    /// Merged states, indexed by [`StateIdx`]
    pub fn states(&self) -> &[Signature] {
        &self.arena
    }

    /// Number of registry hits, i.e. subtrees that were folded into an existing state
    pub fn merged(&self) -> usize {
        self.merged
    }
}

/// Transition table of the reachable states, in discovery order
#[derive(Debug, Default)]
pub struct Transitions {
    pub order: Vec<StateIdx>,
    pub table: FxHashMap<StateIdx, Signature>,
}

impl Transitions {
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate states with their transitions, in discovery order
    pub fn iter(&self) -> impl Iterator<Item = (StateIdx, &Signature)> {
        self.order.iter().map(move |idx| (*idx, &self.table[idx]))
    }
}

/// Walk the DAG once from `root`, children before parents, recording each
/// distinct state's transitions.
///
/// A revisited state is read from the same arena slot, so its transitions
/// cannot differ from the first recording. What can break is the interning
/// order: every edge must point at a state interned before its source.
///
/// # Panics
/// If an edge points at its own state, a later one, or past the arena. That
/// means the arena was corrupted and nothing downstream can be trusted.
pub fn extract_transitions(arena: &[Signature], root: StateIdx) -> Transitions {
    let mut out = Transitions::default();
    record(arena, root, &mut out);
    out
}

fn record(arena: &[Signature], idx: StateIdx, out: &mut Transitions) {
    if out.table.contains_key(&idx) {
        return;
    }
    let signature = &arena[idx as usize];
    for &(letter, target) in &signature.edges {
        if target >= idx {
            panic!(
                "internal consistency failure: state {} has edge {:?} to state {} (arena size {})",
                idx,
                letter as char,
                target,
                arena.len()
            );
        }
        record(arena, target, out);
    }
    out.order.push(idx);
    out.table.insert(idx, signature.clone());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dawg::trie::Trie;

    fn minimize_words(words: &[&str]) -> (Minimizer, StateIdx) {
        let trie = Trie::from_words(words).unwrap();
        let mut minimizer = Minimizer::new();
        let root = minimizer.minimize(trie.into_root());
        (minimizer, root)
    }

    #[test]
    fn test_signature_sorts_edges() {
        let a = Signature::new(false, vec![(b'b', 1), (b'a', 2)]);
        let b = Signature::new(false, vec![(b'a', 2), (b'b', 1)]);
        assert_eq!(a, b);
        assert_ne!(a, Signature::new(true, vec![(b'a', 2), (b'b', 1)]));
    }

    #[test]
    fn test_shared_suffixes_merge() {
        // bake/cake/fake share "ake"
        let (minimizer, root) = minimize_words(&["bake", "cake", "fake"]);
        // final, e, k, a, root
        assert_eq!(minimizer.states().len(), 5);
        assert_eq!(root, 4);
        assert!(minimizer.merged() > 0);
    }

    #[test]
    fn test_no_false_merges() {
        // "ab" and "ac" have different suffix languages below the root
        let (minimizer, root) = minimize_words(&["xab", "yac"]);
        let root_sig = &minimizer.states()[root as usize];
        assert_eq!(root_sig.edges.len(), 2);
        assert_ne!(root_sig.edges[0].1, root_sig.edges[1].1);
    }

    #[test]
    fn test_terminal_distinguishes_states() {
        // "a" is final after "b" but not after "c"
        let (minimizer, root) = minimize_words(&["ba", "bax", "cax"]);
        let root_sig = &minimizer.states()[root as usize];
        assert_ne!(root_sig.edges[0].1, root_sig.edges[1].1);
    }

    #[test]
    fn test_extract_visits_each_state_once() {
        let (minimizer, root) = minimize_words(&["ate", "eat", "tea", "eta", "at"]);
        let transitions = extract_transitions(minimizer.states(), root);
        assert_eq!(transitions.len(), minimizer.states().len());
        // children before parents: the root comes last
        assert_eq!(transitions.order.last(), Some(&root));

        let mut sorted = transitions.order.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), transitions.len());
    }

    #[test]
    fn test_extract_reads_merged_states_consistently() {
        let (minimizer, root) = minimize_words(&["bake", "cake", "fake"]);
        let transitions = extract_transitions(minimizer.states(), root);
        for (idx, signature) in transitions.iter() {
            assert_eq!(signature, &minimizer.states()[idx as usize]);
        }
    }

    #[test]
    #[should_panic(expected = "internal consistency failure")]
    fn test_extract_rejects_forward_edge() {
        // state 0 points at state 1, which was never interned before it
        let arena = vec![
            Signature::new(false, vec![(b'a', 1)]),
            Signature::new(true, vec![]),
        ];
        extract_transitions(&arena, 0);
    }

    #[test]
    #[should_panic(expected = "internal consistency failure")]
    fn test_extract_rejects_self_loop() {
        let arena = vec![Signature::new(true, vec![(b'a', 0)])];
        extract_transitions(&arena, 0);
    }
}
