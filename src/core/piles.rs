//! Pile configuration: the Nim game state.
//!
//! ## Piles
//!
//! An ordered sequence of non-negative counts, one per pile. The same
//! type serves two roles:
//!
//! - Live, mutable state inside [`Game`](crate::engine::Game).
//! - Immutable, hashable key inside the agent's value table (cloned at
//!   each decision point).
//!
//! Two configurations are equal iff their counts are equal element-wise
//! and in order. Backed by a `SmallVec` so the default four piles live
//! inline.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::Action;

/// Default starting configuration.
pub const DEFAULT_PILES: [u32; 4] = [1, 3, 5, 7];

/// The ordered pile counts of a Nim position.
///
/// ## Example
///
/// ```
/// use nim_rl::core::Piles;
///
/// let piles = Piles::default();
/// assert_eq!(piles.len(), 4);
/// assert_eq!(piles.total(), 16);
/// assert!(!piles.is_cleared());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piles {
    counts: SmallVec<[u32; 4]>,
}

impl Piles {
    /// Create a configuration from explicit counts.
    #[must_use]
    pub fn new(counts: &[u32]) -> Self {
        Self {
            counts: SmallVec::from_slice(counts),
        }
    }

    /// Number of piles (including empty ones).
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check whether there are no piles at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Remaining objects in one pile, or `None` if the index is out of range.
    #[must_use]
    pub fn count(&self, pile: usize) -> Option<u32> {
        self.counts.get(pile).copied()
    }

    /// Total objects remaining across all piles.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Check whether every pile is empty (the terminal position).
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.counts.iter().all(|&n| n == 0)
    }

    /// Iterate over the per-pile counts in order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.counts.iter().copied()
    }

    /// Enumerate every legal action for this position.
    ///
    /// For each pile `i` holding `n > 0` objects this yields `(i, j)` for
    /// every `j` in `1..=n`, in (pile, count) order. The result is empty
    /// exactly when the position is cleared, and its length always equals
    /// [`total`](Self::total). Pure: no side effects, deterministic order.
    #[must_use]
    pub fn available_actions(&self) -> Vec<Action> {
        let mut actions = Vec::with_capacity(self.total() as usize);

        for (pile, &n) in self.counts.iter().enumerate() {
            for count in 1..=n {
                actions.push(Action::new(pile, count));
            }
        }

        actions
    }

    /// Remove `count` objects from `pile`.
    ///
    /// Callers must have validated the action; the engine is the only
    /// caller and does so in `apply_move`.
    pub(crate) fn remove(&mut self, pile: usize, count: u32) {
        self.counts[pile] -= count;
    }
}

impl Default for Piles {
    fn default() -> Self {
        Self::new(&DEFAULT_PILES)
    }
}

impl From<Vec<u32>> for Piles {
    fn from(counts: Vec<u32>) -> Self {
        Self {
            counts: SmallVec::from_vec(counts),
        }
    }
}

impl std::fmt::Display for Piles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, n) in self.counts.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{n}")?;
        }
        write!(f, "]")
    }
}
