//! Uncompressed prefix tree, the first stage of a build.
//!
//! Children live in a `BTreeMap`, so walking a node visits its edges in
//! lexicographic order regardless of insertion order. The tree is consumed by
//! the minimizer and never outlives a build.

use super::types::is_letter;
use crate::error::DawgError;
use std::collections::BTreeMap;

/// A trie node. The terminal marker has no child of its own, so it is a flag.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TrieNode {
    terminal: bool,
    children: BTreeMap<u8, TrieNode>,
}

impl TrieNode {
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn child(&self, letter: u8) -> Option<&TrieNode> {
        self.children.get(&letter)
    }

    /// Get or create the child for `letter`
    fn child_mut(&mut self, letter: u8) -> &mut TrieNode {
        self.children.entry(letter).or_default()
    }

    /// Split into the terminal flag and the children, sorted by label
    pub fn into_parts(self) -> (bool, BTreeMap<u8, TrieNode>) {
        (self.terminal, self.children)
    }
}

/// Prefix tree over lowercase words
#[derive(Debug)]
pub struct Trie {
    root: TrieNode,
    node_count: usize,
    word_count: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        Self {
            root: TrieNode::default(),
            node_count: 1,
            word_count: 0,
        }
    }

    /// Build a trie from an iterable of words
    pub fn from_words<I, S>(words: I) -> Result<Self, DawgError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref())?;
        }
        Ok(trie)
    }

    /// Insert one word. Rejects empty words and anything outside `a..=z`.
    pub fn insert(&mut self, word: &str) -> Result<(), DawgError> {
        if word.is_empty() {
            return Err(DawgError::Malformed("empty word".to_string()));
        }
        if let Some(bad) = word.bytes().find(|&b| !is_letter(b)) {
            return Err(DawgError::Malformed(format!(
                "word {:?} contains {:?}, expected a-z only",
                word, bad as char
            )));
        }

        let mut node = &mut self.root;
        for letter in word.bytes() {
            if !node.children.contains_key(&letter) {
                self.node_count += 1;
            }
            node = node.child_mut(letter);
        }
        if !node.terminal {
            node.terminal = true;
            self.word_count += 1;
        }
        Ok(())
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    pub fn into_root(self) -> TrieNode {
        self.root
    }

    /// Number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of distinct words inserted
    pub fn word_count(&self) -> usize {
        self.word_count
    }
}
