//! Row selection bookkeeping for the data table.

use std::collections::HashSet;
use std::hash::Hash;

/// Tracks selected items by their keys.
///
/// Keys are kept independently of any ordering of the items they refer to,
/// and keys for items that no longer exist are kept until explicitly removed.
#[derive(Debug, Clone)]
pub struct Selection<K: Clone + Eq + Hash> {
    selected: HashSet<K>,
}

impl<K: Clone + Eq + Hash> Default for Selection<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq + Hash> Selection<K> {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self {
            selected: HashSet::new(),
        }
    }

    /// Toggle selection for a key. Returns true if the key is now selected.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.selected.remove(&key) {
            false
        } else {
            self.selected.insert(key);
            true
        }
    }

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    /// Replace the selection with exactly the given keys.
    pub fn replace(&mut self, keys: impl IntoIterator<Item = K>) {
        self.selected = keys.into_iter().collect();
    }

    /// Clear all selections.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Number of selected keys.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Get all selected keys, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.selected.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores() {
        let mut selection = Selection::new();
        assert!(selection.toggle(1));
        assert!(selection.is_selected(&1));
        assert!(!selection.toggle(1));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_replace() {
        let mut selection = Selection::new();
        selection.toggle("stale");
        selection.replace(["a", "b"]);
        assert_eq!(selection.len(), 2);
        assert!(!selection.is_selected(&"stale"));
    }
}
