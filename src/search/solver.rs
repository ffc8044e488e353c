use super::engine::{search_words, SearchIter};
use super::rack::{parse_required, Rack};
use crate::dawg::build::load_dawg;
use crate::dawg::types::Dawg;
use crate::error::DawgError;
use std::path::Path;
use std::sync::Arc;

/// Search front end holding the currently loaded automaton.
///
/// Loading replaces the automaton wholesale. Clones share the same `Arc`, so
/// searches already running on another thread keep the automaton they
/// started with.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    dawg: Option<Arc<Dawg>>,
}

impl Solver {
    /// A solver with nothing loaded
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dawg(dawg: Dawg) -> Self {
        Self {
            dawg: Some(Arc::new(dawg)),
        }
    }

    /// Replace the loaded automaton
    pub fn set(&mut self, dawg: Dawg) {
        if self.dawg.is_some() {
            log::info!("replacing loaded dawg ({} states)", dawg.len());
        }
        self.dawg = Some(Arc::new(dawg));
    }

    /// Load a payload file and make it current
    pub fn load(&mut self, path: &Path) -> Result<Arc<Dawg>, DawgError> {
        let dawg = Arc::new(load_dawg(path)?);
        self.dawg = Some(Arc::clone(&dawg));
        Ok(dawg)
    }

    pub fn is_loaded(&self) -> bool {
        self.dawg.is_some()
    }

    /// The loaded automaton
    pub fn dawg(&self) -> Result<&Arc<Dawg>, DawgError> {
        self.dawg.as_ref().ok_or(DawgError::NotLoaded)
    }

    /// All words formable from `letters` that contain `contains`, longest first
    pub fn search(&self, letters: &str, contains: &str) -> Result<Vec<String>, DawgError> {
        let dawg = self.dawg()?;
        let rack = Rack::parse(letters)?;
        let required = parse_required(contains)?;
        Ok(search_words(dawg, &rack, &required))
    }

    /// Lazy variant of [`Solver::search`], in discovery order
    pub fn isearch(&self, letters: &str, contains: &str) -> Result<SearchIter<'_>, DawgError> {
        let dawg = self.dawg()?;
        let rack = Rack::parse(letters)?;
        let required = parse_required(contains)?;
        Ok(SearchIter::new(dawg, &rack, &required))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dawg::build::{build_dawg, write_dawg};
    use crate::error::QueryError;
    use tempfile::tempdir;

    fn solver() -> Solver {
        Solver::with_dawg(build_dawg(["at", "ate", "eat", "eta", "tea", "late", "plate"]).unwrap())
    }

    #[test]
    fn test_search_requires_load() {
        let solver = Solver::new();
        assert!(!solver.is_loaded());
        assert!(matches!(solver.search("abc", ""), Err(DawgError::NotLoaded)));
        assert!(matches!(solver.isearch("abc", ""), Err(DawgError::NotLoaded)));
    }

    #[test]
    fn test_search_and_isearch() {
        let solver = solver();
        assert_eq!(
            solver.search("aetl?", "at").unwrap(),
            vec!["plate", "late", "ate", "eat", "at"]
        );

        let lazy: Vec<String> = solver.isearch("AETL?", "AT").unwrap().collect();
        assert_eq!(lazy.len(), 5);
    }

    #[test]
    fn test_search_rejects_bad_input() {
        let solver = solver();
        assert!(matches!(
            solver.search("ab#", ""),
            Err(DawgError::Query(QueryError::InvalidTile('#')))
        ));
        assert!(matches!(
            solver.search("ab", "a?"),
            Err(DawgError::Query(QueryError::InvalidRequired('?')))
        ));
    }

    #[test]
    fn test_load_replaces() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dawg.js");
        write_dawg(&build_dawg(["zap"]).unwrap(), &path).unwrap();

        let mut solver = solver();
        let before = Arc::clone(solver.dawg().unwrap());
        solver.load(&path).unwrap();

        assert_eq!(solver.search("paz", "").unwrap(), vec!["zap"]);
        // the old automaton is untouched for holders of the previous Arc
        assert!(before.contains("plate"));
        assert!(!solver.dawg().unwrap().contains("plate"));
    }

    #[test]
    fn test_set_replaces_loaded_dawg() {
        let mut solver = Solver::new();
        solver.set(build_dawg(["tea"]).unwrap());
        assert!(solver.is_loaded());
        assert_eq!(solver.search("aet", "").unwrap(), vec!["tea"]);

        let shared = solver.clone();
        solver.set(build_dawg(["eat", "ate"]).unwrap());
        assert_eq!(solver.search("aet", "").unwrap(), vec!["ate", "eat"]);
        // clones keep the automaton they were made with
        assert_eq!(shared.search("aet", "").unwrap(), vec!["tea"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let mut solver = Solver::new();
        assert!(matches!(
            solver.load(&dir.path().join("missing.js")),
            Err(DawgError::Io(_))
        ));
        assert!(!solver.is_loaded());
    }
}
