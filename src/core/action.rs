//! Action representation: a pile index plus a removal count.
//!
//! An action means "remove `count` objects from the pile at `pile`".
//! Actions are plain values: the engine validates them against the live
//! piles when they are applied, and the agent uses them (paired with a
//! pile configuration) as value-table keys.

use serde::{Deserialize, Serialize};

/// A single Nim move.
///
/// Valid against a pile configuration iff `pile` is in range and
/// `1 <= count <= piles[pile]`. Validity is checked by
/// [`Game::apply_move`](crate::engine::Game::apply_move), not here.
///
/// ## Example
///
/// ```
/// use nim_rl::core::Action;
///
/// // Remove two objects from the third pile.
/// let action = Action::new(2, 2);
/// assert_eq!(action.pile, 2);
/// assert_eq!(action.count, 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// Index of the pile to remove from.
    pub pile: usize,

    /// Number of objects to remove.
    pub count: u32,
}

impl Action {
    /// Create an action.
    #[must_use]
    pub const fn new(pile: usize, count: u32) -> Self {
        Self { pile, count }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "take {} from pile {}", self.count, self.pile)
    }
}
