//! Integration tests for the game engine contract.

use std::collections::HashSet;

use proptest::prelude::*;

use nim_rl::core::{Action, Piles, Player};
use nim_rl::engine::{Game, MoveError};

// =============================================================================
// Action Enumeration
// =============================================================================

#[test]
fn test_default_piles_have_sixteen_actions() {
    let piles = Piles::default();
    let actions = piles.available_actions();

    assert_eq!(actions.len(), 16);
    assert!(actions.contains(&Action::new(0, 1)));
    assert!(actions.contains(&Action::new(3, 7)));
    assert!(!actions.contains(&Action::new(0, 2)));
    assert!(!actions.contains(&Action::new(3, 8)));
}

#[test]
fn test_cleared_piles_have_no_actions() {
    assert!(Piles::new(&[0, 0, 0]).available_actions().is_empty());
}

proptest! {
    // available_actions is exactly {(i, j) : 0 <= i < len, 1 <= j <= piles[i]},
    // so its cardinality equals the total object count.
    #[test]
    fn prop_available_actions_match_enumeration(
        counts in proptest::collection::vec(0u32..8, 0..6)
    ) {
        let piles = Piles::new(&counts);
        let actions = piles.available_actions();

        prop_assert_eq!(actions.len() as u32, piles.total());

        let unique: HashSet<_> = actions.iter().copied().collect();
        prop_assert_eq!(unique.len(), actions.len());

        for action in &actions {
            prop_assert!(action.pile < counts.len());
            prop_assert!(action.count >= 1);
            prop_assert!(action.count <= counts[action.pile]);
        }
    }

    // Applying any legal move drops the total by exactly the count,
    // flips the player, and sets the winner iff the piles are cleared.
    #[test]
    fn prop_legal_move_contract(
        counts in proptest::collection::vec(0u32..8, 1..6),
        selector in any::<proptest::sample::Index>()
    ) {
        let piles = Piles::new(&counts);
        let actions = piles.available_actions();
        prop_assume!(!actions.is_empty());

        let action = actions[selector.index(actions.len())];
        let mut game = Game::new(piles.clone());
        let total_before = piles.total();

        game.apply_move(action).unwrap();

        prop_assert_eq!(game.piles().total(), total_before - action.count);
        prop_assert_eq!(game.player(), Player::Two);
        prop_assert_eq!(game.winner().is_some(), game.piles().is_cleared());
    }
}

// =============================================================================
// Move Rejection
// =============================================================================

#[test]
fn test_finished_game_rejects_every_move() {
    let mut game = Game::new(Piles::new(&[2]));
    game.apply_move(Action::new(0, 2)).unwrap();
    assert!(game.is_over());

    for action in [
        Action::new(0, 1),
        Action::new(0, 0),
        Action::new(5, 3),
    ] {
        assert_eq!(game.apply_move(action), Err(MoveError::GameOver));
    }
}

#[test]
fn test_rejected_moves_leave_state_unchanged() {
    let mut game = Game::new(Piles::new(&[1, 3, 5, 7]));

    let rejected = [
        Action::new(4, 1), // pile out of range
        Action::new(0, 0), // zero count
        Action::new(1, 4), // count above pile
    ];
    for action in rejected {
        assert!(game.apply_move(action).is_err());
        assert_eq!(game.piles(), &Piles::new(&[1, 3, 5, 7]));
        assert_eq!(game.player(), Player::One);
        assert_eq!(game.winner(), None);
    }
}

#[test]
fn test_error_kinds_are_distinguished() {
    let mut game = Game::new(Piles::new(&[1, 3]));

    assert!(matches!(
        game.apply_move(Action::new(7, 1)),
        Err(MoveError::InvalidPile { pile: 7, .. })
    ));
    assert!(matches!(
        game.apply_move(Action::new(1, 9)),
        Err(MoveError::InvalidCount { count: 9, .. })
    ));
}

// =============================================================================
// End-to-End Positions
// =============================================================================

#[test]
fn test_single_object_endgame() {
    let mut game = Game::new(Piles::new(&[0, 0, 0, 1]));

    // The only legal action is (3, 1); applying it ends the game with
    // the mover recorded as the winner.
    assert_eq!(game.available_actions(), vec![Action::new(3, 1)]);

    game.apply_move(Action::new(3, 1)).unwrap();

    assert!(game.piles().is_cleared());
    assert_eq!(game.winner(), Some(Player::One));
}

#[test]
fn test_winner_is_set_iff_cleared() {
    let mut game = Game::new(Piles::new(&[1, 1]));

    game.apply_move(Action::new(0, 1)).unwrap();
    assert!(!game.piles().is_cleared());
    assert_eq!(game.winner(), None);

    game.apply_move(Action::new(1, 1)).unwrap();
    assert!(game.piles().is_cleared());
    assert_eq!(game.winner(), Some(Player::Two));
}

#[test]
fn test_game_over_is_stable() {
    let mut game = Game::new(Piles::new(&[1]));
    game.apply_move(Action::new(0, 1)).unwrap();

    let winner = game.winner();
    for _ in 0..3 {
        let _ = game.apply_move(Action::new(0, 1));
    }
    assert_eq!(game.winner(), winner);
}
