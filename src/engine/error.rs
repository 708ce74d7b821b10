//! Error types for move application.

use thiserror::Error;

/// Rejection of an attempted move.
///
/// The engine never catches these itself; drivers decide whether a
/// rejection is fatal (training misuse) or recoverable (interactive
/// re-prompt).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MoveError {
    /// The game already has a winner; no further moves are accepted.
    #[error("game is already over")]
    GameOver,

    /// The action named a pile the game does not have.
    #[error("pile {pile} is out of range (the game has {pile_count} piles)")]
    InvalidPile { pile: usize, pile_count: usize },

    /// The removal count was zero or exceeded the pile's remaining objects.
    #[error("cannot take {count} from pile {pile} holding {available}")]
    InvalidCount {
        pile: usize,
        count: u32,
        available: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(format!("{}", MoveError::GameOver), "game is already over");
        assert_eq!(
            format!(
                "{}",
                MoveError::InvalidPile {
                    pile: 5,
                    pile_count: 4
                }
            ),
            "pile 5 is out of range (the game has 4 piles)"
        );
        assert_eq!(
            format!(
                "{}",
                MoveError::InvalidCount {
                    pile: 1,
                    count: 4,
                    available: 3
                }
            ),
            "cannot take 4 from pile 1 holding 3"
        );
    }
}
