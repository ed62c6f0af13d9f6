//! Per-pass memoization of path match results.
//!
//! Sibling elements of a homogeneous array share identical property paths,
//! so one pass over a large array asks the same question many times. Keys are
//! the structural segment path, not a joined string, so a property name
//! containing `/` cannot collide with a nested path.

use std::collections::HashMap;

/// Remembers whether each path seen in one pruning pass was selected.
///
/// Owned by a single pass and dropped with it; never shared.
#[derive(Debug, Default)]
pub struct MatchCache {
    entries: HashMap<Vec<String>, bool>,
    hits: usize,
    misses: usize,
}

impl MatchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached result for `path`, computing and storing it on a miss.
    ///
    /// A hit does not allocate.
    pub fn get_or_insert_with<F>(&mut self, path: &[String], compute: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        if let Some(&selected) = self.entries.get(path) {
            self.hits += 1;
            return selected;
        }
        self.misses += 1;
        let selected = compute();
        self.entries.insert(path.to_vec(), selected);
        selected
    }

    /// Number of distinct paths cached.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_computes_once_per_path() {
        let mut cache = MatchCache::new();
        let mut calls = 0;

        for _ in 0..3 {
            let selected = cache.get_or_insert_with(&path(&["items", "x"]), || {
                calls += 1;
                true
            });
            assert!(selected);
        }

        assert_eq!(calls, 1);
        assert_eq!(cache.hits(), 2);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_caches_negative_results() {
        let mut cache = MatchCache::new();
        assert!(!cache.get_or_insert_with(&path(&["a"]), || false));
        assert!(!cache.get_or_insert_with(&path(&["a"]), || true));
    }

    #[test]
    fn test_separator_in_name_does_not_collide() {
        let mut cache = MatchCache::new();
        assert!(cache.get_or_insert_with(&path(&["a", "b"]), || true));
        assert!(!cache.get_or_insert_with(&path(&["a/b"]), || false));
        assert_eq!(cache.len(), 2);
    }
}
