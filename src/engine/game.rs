//! The Nim game state machine.

use crate::core::{Action, Piles, Player};

use super::error::MoveError;

/// A single game of Nim.
///
/// Owns the live pile state, tracks whose turn it is, and records the
/// winner once the final object is taken. A game is created fresh per
/// episode or interactive session and discarded at its terminal state.
///
/// ## State machine
///
/// Two states: in progress and won. A legal move either keeps the game
/// in progress or, when it empties the last pile, ends it. Once won,
/// every further [`apply_move`](Self::apply_move) fails with
/// [`MoveError::GameOver`].
///
/// ## Example
///
/// ```
/// use nim_rl::core::{Action, Piles, Player};
/// use nim_rl::engine::Game;
///
/// let mut game = Game::new(Piles::new(&[0, 0, 0, 1]));
/// game.apply_move(Action::new(3, 1)).unwrap();
///
/// // The mover is recorded as the winner.
/// assert_eq!(game.winner(), Some(Player::One));
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    piles: Piles,
    player: Player,
    winner: Option<Player>,
}

impl Game {
    /// Start a game from the given pile configuration.
    ///
    /// `Player::One` moves first; there is no winner yet.
    #[must_use]
    pub fn new(piles: Piles) -> Self {
        Self {
            piles,
            player: Player::One,
            winner: None,
        }
    }

    /// The current pile configuration.
    #[must_use]
    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn player(&self) -> Player {
        self.player
    }

    /// The winner, once the game has ended.
    ///
    /// Set if and only if all piles are zero.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Check whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Enumerate every legal action for the current position.
    #[must_use]
    pub fn available_actions(&self) -> Vec<Action> {
        self.piles.available_actions()
    }

    /// Flip the turn to the other player.
    fn switch_player(&mut self) {
        self.player = self.player.other();
    }

    /// Apply a move to the live state.
    ///
    /// On success the pile shrinks by `action.count`, the turn passes to
    /// the other player, and, if that emptied the last pile, the winner
    /// is recorded. The turn is switched *before* the terminal check, and
    /// the winner is the player opposite the new current player: the one
    /// who just moved.
    ///
    /// Errors leave the game untouched:
    ///
    /// - [`MoveError::GameOver`] if a winner is already set, regardless of
    ///   the action.
    /// - [`MoveError::InvalidPile`] if the pile index is out of range.
    /// - [`MoveError::InvalidCount`] if the count is zero or exceeds the
    ///   pile's remaining objects.
    pub fn apply_move(&mut self, action: Action) -> Result<(), MoveError> {
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }

        let available = self
            .piles
            .count(action.pile)
            .ok_or(MoveError::InvalidPile {
                pile: action.pile,
                pile_count: self.piles.len(),
            })?;

        if action.count == 0 || action.count > available {
            return Err(MoveError::InvalidCount {
                pile: action.pile,
                count: action.count,
                available,
            });
        }

        self.piles.remove(action.pile, action.count);
        self.switch_player();

        if self.piles.is_cleared() {
            self.winner = Some(self.player.other());
        }

        Ok(())
    }
}

impl Default for Game {
    /// A game over the default `[1, 3, 5, 7]` configuration.
    fn default() -> Self {
        Self::new(Piles::default())
    }
}
