//! Self-play training for the Q-learning agent.
//!
//! One agent instance plays both sides of every episode. After each
//! half-move the driver feeds the resulting transition back to the
//! agent; at game end the terminal transitions are rewarded.
//!
//! ## Reward scheme
//!
//! The move that empties the last pile earns its mover a reward of `-1`,
//! and the opponent's preceding move earns `+1` (last to move loses).
//! Every other transition is rewarded `0` once the opponent has replied.
//!
//! ## Usage
//!
//! ```
//! use nim_rl::training::{train_with_config, TrainConfig};
//!
//! let config = TrainConfig::default().with_seed(7);
//! let agent = train_with_config(50, &config);
//! assert!(!agent.q_table().is_empty());
//! ```

use tracing::{debug, info};

use crate::agent::{QLearningAgent, DEFAULT_ALPHA, DEFAULT_EPSILON};
use crate::core::{Action, GameRng, Piles, PlayerPair};
use crate::engine::Game;

/// Configuration for a training run.
#[derive(Clone, Debug)]
pub struct TrainConfig {
    /// Initial pile configuration for every episode.
    pub piles: Piles,

    /// Learning rate handed to the agent.
    pub alpha: f64,

    /// Exploration rate handed to the agent.
    pub epsilon: f64,

    /// Seed for the agent's randomness source. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            piles: Piles::default(),
            alpha: DEFAULT_ALPHA,
            epsilon: DEFAULT_EPSILON,
            seed: None,
        }
    }
}

impl TrainConfig {
    /// Create a training config with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial pile configuration.
    pub fn with_piles(mut self, piles: Piles) -> Self {
        self.piles = piles;
        self
    }

    /// Set the learning rate.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the exploration rate.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Seed the agent's randomness source.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Train an agent by self-play with the default configuration.
///
/// Runs `episodes` games of the agent against itself over the default
/// piles and returns the trained agent.
#[must_use]
pub fn train(episodes: usize) -> QLearningAgent {
    train_with_config(episodes, &TrainConfig::default())
}

/// Train an agent by self-play.
///
/// Every episode plays one complete game, choosing actions for both
/// sides with exploration enabled, and applies the reward scheme
/// described in the module docs.
#[must_use]
pub fn train_with_config(episodes: usize, config: &TrainConfig) -> QLearningAgent {
    let mut agent = QLearningAgent::new(config.alpha, config.epsilon);
    if let Some(seed) = config.seed {
        agent = agent.with_rng(GameRng::new(seed));
    }

    for episode in 0..episodes {
        debug!(episode, "starting self-play episode");
        run_episode(&mut agent, config.piles.clone());
    }

    info!(
        episodes,
        entries = agent.q_table().len(),
        states = agent.q_table().state_count(),
        "training complete"
    );

    agent
}

/// Play one self-play game to completion, updating the agent in place.
fn run_episode(agent: &mut QLearningAgent, piles: Piles) {
    let mut game = Game::new(piles);

    // Each side's most recent (state, action), pending its reward.
    let mut last: PlayerPair<Option<(Piles, Action)>> = PlayerPair::default();

    while !game.is_over() {
        let state = game.piles().clone();
        let mover = game.player();

        let action = agent
            .choose_action(&state, true)
            .expect("a game that is not over has at least one legal action");
        last[mover] = Some((state.clone(), action));

        game.apply_move(action)
            .expect("chosen action is legal for the current position");
        let new_state = game.piles().clone();

        if game.is_over() {
            // Emptying the final pile is the losing move: the mover is
            // punished and the opponent's previous move is credited.
            agent.update(&state, action, &new_state, -1.0);
            if let Some((opp_state, opp_action)) = last[mover.other()].take() {
                agent.update(&opp_state, opp_action, &new_state, 1.0);
            }
        } else if let Some((prev_state, prev_action)) = last[game.player()].take() {
            // The player now to move sees the position their last move
            // led to; reward it neutrally.
            agent.update(&prev_state, prev_action, &new_state, 0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = TrainConfig::default();

        assert_eq!(config.piles, Piles::default());
        assert_eq!(config.alpha, 0.5);
        assert_eq!(config.epsilon, 0.1);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_config_builders() {
        let config = TrainConfig::new()
            .with_piles(Piles::new(&[2, 2]))
            .with_alpha(0.3)
            .with_epsilon(0.25)
            .with_seed(9);

        assert_eq!(config.piles, Piles::new(&[2, 2]));
        assert_eq!(config.alpha, 0.3);
        assert_eq!(config.epsilon, 0.25);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_training_fills_table() {
        let agent = train_with_config(10, &TrainConfig::default().with_seed(42));

        assert!(!agent.q_table().is_empty());
    }

    #[test]
    fn test_zero_episodes_leaves_table_empty() {
        let agent = train_with_config(0, &TrainConfig::default().with_seed(42));

        assert!(agent.q_table().is_empty());
    }

    #[test]
    fn test_single_pile_terminal_update() {
        // With piles [1] the first move ends the game: the only update
        // is the mover's, at reward -1 with no future estimate, so the
        // stored value is 0 + 0.5 * (-1 - 0) = -0.5. The opponent never
        // moved, so no +1 update is written.
        let config = TrainConfig::default()
            .with_piles(Piles::new(&[1]))
            .with_seed(0);
        let agent = train_with_config(1, &config);

        assert_eq!(
            agent.get_q_value(&Piles::new(&[1]), Action::new(0, 1)),
            -0.5
        );
        assert_eq!(agent.q_table().len(), 1);
    }

    #[test]
    fn test_terminal_move_value_is_negative() {
        let config = TrainConfig::default()
            .with_piles(Piles::new(&[1, 1]))
            .with_seed(11);
        let agent = train_with_config(200, &config);

        // From [0, 1] the only move empties the board and loses.
        let value = agent.get_q_value(&Piles::new(&[0, 1]), Action::new(1, 1));
        assert!(value < 0.0, "losing terminal move should be punished, got {value}");
    }

    #[test]
    fn test_seeded_training_is_deterministic() {
        let config = TrainConfig::default().with_seed(5);

        let a = train_with_config(20, &config);
        let b = train_with_config(20, &config);

        assert_eq!(a.q_table().len(), b.q_table().len());
        for action in Piles::default().available_actions() {
            assert_eq!(
                a.get_q_value(&Piles::default(), action),
                b.get_q_value(&Piles::default(), action)
            );
        }
    }
}
