//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Nim is strictly two-player, so the identity is a two-variant enum
//! rather than a numeric id: invalid players are unrepresentable.
//!
//! ## PlayerPair
//!
//! Fixed two-slot per-player storage, indexable by `Player`. Used by the
//! training driver to remember each side's last recorded transition.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players, identified as 0 and 1.
///
/// `Player::One` moves first in a fresh game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The opposing player.
    ///
    /// This is an involution: `p.other().other() == p`.
    ///
    /// ```
    /// use nim_rl::core::Player;
    ///
    /// assert_eq!(Player::One.other(), Player::Two);
    /// assert_eq!(Player::Two.other().other(), Player::Two);
    /// ```
    #[must_use]
    pub const fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Iterate over both players, first player first.
    pub fn all() -> impl Iterator<Item = Player> {
        [Player::One, Player::Two].into_iter()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index())
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a fixed `[T; 2]` with one entry per player.
///
/// ## Example
///
/// ```
/// use nim_rl::core::{Player, PlayerPair};
///
/// let mut wins: PlayerPair<u32> = PlayerPair::default();
/// wins[Player::One] += 1;
///
/// assert_eq!(wins[Player::One], 1);
/// assert_eq!(wins[Player::Two], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair from explicit per-player values.
    #[must_use]
    pub fn new(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Create a pair with values from a factory function.
    pub fn from_fn(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::One), factory(Player::Two)],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::all().zip(self.data.iter())
    }
}

impl<T: Default> Default for PlayerPair<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<Player> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerPair<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
