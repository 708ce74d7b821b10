//! Q-learning agent: value updates and epsilon-greedy action selection.

use crate::core::{Action, GameRng, Piles};

use super::q_table::QTable;

/// Default learning rate.
pub const DEFAULT_ALPHA: f64 = 0.5;

/// Default exploration rate.
pub const DEFAULT_EPSILON: f64 = 0.1;

/// A tabular Q-learning agent.
///
/// Maintains a value estimate per (state, action) pair, updates it with
/// the one-step temporal-difference rule, and selects actions by an
/// epsilon-greedy policy over the legal actions of a position. The same
/// agent instance plays both sides during self-play training; its table
/// persists across every episode it plays.
///
/// ## Example
///
/// ```
/// use nim_rl::agent::QLearningAgent;
/// use nim_rl::core::Piles;
///
/// let mut agent = QLearningAgent::default().with_seed(7);
/// let action = agent.choose_action(&Piles::default(), false);
/// assert!(action.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct QLearningAgent {
    alpha: f64,
    epsilon: f64,
    q: QTable,
    rng: GameRng,
}

impl QLearningAgent {
    /// Create an agent with the given learning and exploration rates.
    ///
    /// The value table starts empty; the randomness source is seeded
    /// from entropy unless replaced via [`with_seed`](Self::with_seed)
    /// or [`with_rng`](Self::with_rng).
    #[must_use]
    pub fn new(alpha: f64, epsilon: f64) -> Self {
        assert!((0.0..=1.0).contains(&alpha), "alpha must be in [0, 1]");
        assert!((0.0..=1.0).contains(&epsilon), "epsilon must be in [0, 1]");

        Self {
            alpha,
            epsilon,
            q: QTable::new(),
            rng: GameRng::from_entropy(),
        }
    }

    /// Replace the randomness source with a seeded one.
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(GameRng::new(seed))
    }

    /// Replace the randomness source.
    #[must_use]
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    /// The learning rate.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The exploration rate.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// The value table.
    #[must_use]
    pub fn q_table(&self) -> &QTable {
        &self.q
    }

    /// The stored value for a (state, action) pair, or 0.0 if unseen.
    #[must_use]
    pub fn get_q_value(&self, piles: &Piles, action: Action) -> f64 {
        self.q.get(piles, action)
    }

    /// Overwrite the entry for (state, action) with the one-step
    /// temporal-difference estimate:
    ///
    /// `old + alpha * ((reward + future_reward) - old)`
    ///
    /// The old estimate is nudged toward the immediate reward plus the
    /// estimated best continuation by a fraction `alpha`.
    pub fn update_q_value(
        &mut self,
        piles: &Piles,
        action: Action,
        old_value: f64,
        reward: f64,
        future_reward: f64,
    ) {
        let value = old_value + self.alpha * ((reward + future_reward) - old_value);
        self.q.set(piles, action, value);
    }

    /// The best stored value over the legal actions of a position.
    ///
    /// Unseen actions count as 0.0. Returns 0.0 for a position with no
    /// legal actions (the terminal position).
    #[must_use]
    pub fn best_future_reward(&self, piles: &Piles) -> f64 {
        piles
            .available_actions()
            .into_iter()
            .map(|action| self.q.get(piles, action))
            .max_by(f64::total_cmp)
            .unwrap_or(0.0)
    }

    /// Record one observed transition.
    ///
    /// Reads the current estimate for (`old_state`, `action`), estimates
    /// the best continuation from `new_state`, and writes the updated
    /// value. This is the single entry point the training driver calls
    /// after every move, including the terminal updates.
    pub fn update(&mut self, old_state: &Piles, action: Action, new_state: &Piles, reward: f64) {
        let old_value = self.get_q_value(old_state, action);
        let future_reward = self.best_future_reward(new_state);
        self.update_q_value(old_state, action, old_value, reward, future_reward);
    }

    /// Pick an action for a position by the epsilon-greedy policy.
    ///
    /// With `use_exploration` false this is greedy: one of the actions
    /// with the maximal stored value (ties broken arbitrarily). With
    /// `use_exploration` true, a uniformly random legal action is chosen
    /// with probability epsilon instead, which may coincide with the
    /// greedy choice.
    ///
    /// Returns `None` when the position has no legal actions; callers
    /// are expected to check for the terminal position first.
    pub fn choose_action(&mut self, piles: &Piles, use_exploration: bool) -> Option<Action> {
        let actions = piles.available_actions();
        if actions.is_empty() {
            return None;
        }

        if use_exploration && self.rng.gen_bool(self.epsilon) {
            return self.rng.choose(&actions).copied();
        }

        actions
            .into_iter()
            .max_by(|a, b| self.q.get(piles, *a).total_cmp(&self.q.get(piles, *b)))
    }
}

impl Default for QLearningAgent {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA, DEFAULT_EPSILON)
    }
}
