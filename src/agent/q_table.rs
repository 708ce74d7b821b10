//! Tabular value storage for the learning agent.

use rustc_hash::FxHashMap;

use crate::core::{Action, Piles};

/// Exact value table keyed by (pile configuration, action).
///
/// Unseen pairs read as 0.0. The table only ever grows: entries are
/// overwritten by updates but never pruned. Stored per state so reads
/// never have to materialize a composite key.
#[derive(Clone, Debug, Default)]
pub struct QTable {
    values: FxHashMap<Piles, FxHashMap<Action, f64>>,
}

impl QTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored value for a (state, action) pair, or 0.0 if unseen.
    #[must_use]
    pub fn get(&self, piles: &Piles, action: Action) -> f64 {
        self.values
            .get(piles)
            .and_then(|actions| actions.get(&action))
            .copied()
            .unwrap_or(0.0)
    }

    /// Store a value, overwriting any existing entry.
    pub fn set(&mut self, piles: &Piles, action: Action, value: f64) {
        self.values
            .entry(piles.clone())
            .or_default()
            .insert(action, value);
    }

    /// Number of stored (state, action) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.values().map(|actions| actions.len()).sum()
    }

    /// Check whether no entry has been stored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of distinct states with at least one stored entry.
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.values.len()
    }
}
