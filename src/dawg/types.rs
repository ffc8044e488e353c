use rustc_hash::FxHashMap;

/// Canonical identifier of a state in a finished automaton
pub type StateId = u32;

/// The start state. Also the target recorded for the terminal marker.
pub const START_STATE: StateId = 0;

/// Transition key that marks a state as accepting in the serialized form
pub const TERMINAL_KEY: &str = "$";

/// Check whether a byte is a valid edge label
#[inline]
pub fn is_letter(byte: u8) -> bool {
    byte.is_ascii_lowercase()
}

/// One state of a finished automaton
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DawgState {
    /// True iff the state carries the terminal marker
    pub accepting: bool,
    /// Outgoing letter edges, sorted by letter
    pub edges: Vec<(u8, StateId)>,
}

impl DawgState {
    /// Follow the edge labelled `letter`, if any
    #[inline]
    pub fn next(&self, letter: u8) -> Option<StateId> {
        self.edges
            .binary_search_by_key(&letter, |&(l, _)| l)
            .ok()
            .map(|i| self.edges[i].1)
    }
}

/// Summary numbers for an automaton
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DawgStats {
    pub state_count: usize,
    pub edge_count: usize,
    pub accepting_count: usize,
    pub word_count: u64,
}

/// A minimal acyclic word automaton, indexed by canonical state id.
///
/// State `0` is the start state. A `Dawg` is immutable once built or loaded;
/// share it behind an `Arc` for concurrent searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dawg {
    states: Vec<DawgState>,
}

impl Dawg {
    /// Wrap a dense state table. `states[0]` must be the start state.
    pub fn from_states(states: Vec<DawgState>) -> Self {
        debug_assert!(!states.is_empty(), "automaton needs a start state");
        Self { states }
    }

    /// Number of states
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn states(&self) -> &[DawgState] {
        &self.states
    }

    #[inline]
    pub fn state(&self, id: StateId) -> &DawgState {
        &self.states[id as usize]
    }

    #[inline]
    pub fn is_accepting(&self, id: StateId) -> bool {
        self.state(id).accepting
    }

    /// Follow a run of letters from `from`, returning the state reached
    pub fn follow(&self, from: StateId, letters: &[u8]) -> Option<StateId> {
        letters
            .iter()
            .try_fold(from, |state, &letter| self.state(state).next(letter))
    }

    /// Check whether `word` is accepted
    pub fn contains(&self, word: &str) -> bool {
        self.follow(START_STATE, word.as_bytes())
            .is_some_and(|state| self.is_accepting(state))
    }

    /// Enumerate every accepted word in lexicographic order
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::new();
        let mut path = Vec::new();
        self.collect_words(START_STATE, &mut path, &mut words);
        words
    }

    fn collect_words(&self, id: StateId, path: &mut Vec<u8>, words: &mut Vec<String>) {
        let state = self.state(id);
        if state.accepting {
            words.push(path.iter().map(|&b| b as char).collect());
        }
        for &(letter, target) in &state.edges {
            path.push(letter);
            self.collect_words(target, path, words);
            path.pop();
        }
    }

    /// Compute state, edge and word counts
    pub fn stats(&self) -> DawgStats {
        let mut memo: FxHashMap<StateId, u64> = FxHashMap::default();
        DawgStats {
            state_count: self.states.len(),
            edge_count: self.states.iter().map(|s| s.edges.len()).sum(),
            accepting_count: self.states.iter().filter(|s| s.accepting).count(),
            word_count: self.count_words(START_STATE, &mut memo),
        }
    }

    fn count_words(&self, id: StateId, memo: &mut FxHashMap<StateId, u64>) -> u64 {
        if let Some(&count) = memo.get(&id) {
            return count;
        }
        let state = self.state(id);
        let mut count = state.accepting as u64;
        for &(_, target) in &state.edges {
            count = count.saturating_add(self.count_words(target, memo));
        }
        memo.insert(id, count);
        count
    }
}
