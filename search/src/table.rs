use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::{Score, SearchError};

/// How a stored value relates to the true value of the position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bound {
    /// The stored value is the minimax value.
    Exact,
    /// The search failed high: the true value is at least the stored one.
    Lower,
    /// The search failed low: the true value is at most the stored one.
    Upper,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Entry {
    pub value: Score,
    pub bound: Bound,
}

/// Cached search results keyed by position. There is no replacement policy:
/// a new result for a position overwrites the old one, and the table only
/// shrinks when it is cleared.
#[derive(Clone, Debug)]
pub struct TranspositionTable<P> {
    entries: FxHashMap<P, Entry>,
    limit: Option<usize>,
}

impl<P> Default for TranspositionTable<P> {
    fn default() -> Self {
        TranspositionTable {
            entries: FxHashMap::default(),
            limit: None,
        }
    }
}

impl<P: Eq + Hash> TranspositionTable<P> {
    /// A table that refuses new positions once it holds `limit` entries.
    pub fn with_limit(limit: Option<usize>) -> Self {
        TranspositionTable {
            limit,
            ..Default::default()
        }
    }

    pub fn get(&self, position: &P) -> Option<Entry> {
        self.entries.get(position).copied()
    }

    pub fn insert(&mut self, position: P, entry: Entry) -> Result<(), SearchError> {
        if let Some(old) = self.entries.get_mut(&position) {
            *old = entry;
            return Ok(());
        }
        if self.limit.map_or(false, |limit| self.entries.len() >= limit) {
            return Err(self.full());
        }
        self.entries.try_reserve(1).map_err(|_| self.full())?;
        self.entries.insert(position, entry);
        Ok(())
    }

    fn full(&self) -> SearchError {
        SearchError::TableFull {
            size: self.len(),
            capacity: self.capacity(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The configured limit, or what is currently allocated when unlimited.
    pub fn capacity(&self) -> usize {
        self.limit.unwrap_or_else(|| self.entries.capacity())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&P, &Entry)> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
