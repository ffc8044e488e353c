use crate::dawg::codec::{from_mapping, parse_js, to_js};
use crate::dawg::minimize::{extract_transitions, Minimizer};
use crate::dawg::renumber::renumber;
use crate::dawg::trie::Trie;
use crate::dawg::types::Dawg;
use crate::error::DawgError;
use crate::utils::{finish_phase, phase_spinner};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Build the minimal automaton for a word set.
///
/// Words must be non-empty and use only `a..=z`; duplicates are harmless.
pub fn build_dawg<I, S>(words: I) -> Result<Dawg, DawgError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let trie = Trie::from_words(words)?;
    let trie_nodes = trie.node_count();
    let word_count = trie.word_count();

    let mut minimizer = Minimizer::new();
    let root = minimizer.minimize(trie.into_root());
    let transitions = extract_transitions(minimizer.states(), root);
    let dawg = renumber(&transitions, root);

    log::debug!(
        "built dawg: {} words, {} trie nodes -> {} states ({} merges)",
        word_count,
        trie_nodes,
        dawg.len(),
        minimizer.merged()
    );
    Ok(dawg)
}

/// Re-run minimization over a finished automaton.
///
/// A built automaton is already minimal, so this returns an equivalent one
/// with the same number of states.
pub fn reminimize(dawg: &Dawg) -> Dawg {
    let mut minimizer = Minimizer::new();
    let root = minimizer.minimize_dawg(dawg);
    let transitions = extract_transitions(minimizer.states(), root);
    renumber(&transitions, root)
}

/// Read a word list: one word per line, trimmed, lowercased, deduplicated and sorted.
pub fn load_words(path: &Path) -> Result<Vec<String>, DawgError> {
    let text = fs::read_to_string(path)?;
    let words: BTreeSet<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect();
    Ok(words.into_iter().collect())
}

/// Write the page payload, creating parent directories
pub fn write_dawg(dawg: &Dawg, path: &Path) -> Result<(), DawgError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, to_js(dawg)?)?;
    Ok(())
}

/// Load an automaton from a payload file
pub fn load_dawg(path: &Path) -> Result<Dawg, DawgError> {
    let text = fs::read_to_string(path)?;
    let dawg = from_mapping(&parse_js(&text)?)?;
    log::info!("loaded {} states from {}", dawg.len(), path.display());
    Ok(dawg)
}

/// Build an automaton from a word list file and write its payload
pub fn make_dawg(words_path: &Path, dawg_path: &Path, silent: bool) -> Result<Dawg, DawgError> {
    let spinner = phase_spinner("Reading word list...", silent);
    let words = load_words(words_path)?;
    finish_phase(spinner, format!("Read {} words", words.len()));

    let spinner = phase_spinner("Minimizing...", silent);
    let dawg = build_dawg(&words)?;
    finish_phase(spinner, format!("Minimized to {} states", dawg.len()));

    let spinner = phase_spinner("Writing payload...", silent);
    write_dawg(&dawg, dawg_path)?;
    finish_phase(spinner, format!("Wrote {}", dawg_path.display()));

    Ok(dawg)
}
