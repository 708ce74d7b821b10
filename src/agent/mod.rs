//! The learning agent: tabular Q-learning over Nim positions.
//!
//! The agent depends on the engine's action-enumeration contract only
//! ([`Piles::available_actions`](crate::core::Piles::available_actions)),
//! never on a live game's mutable state.

pub mod q_learning;
pub mod q_table;

pub use q_learning::{QLearningAgent, DEFAULT_ALPHA, DEFAULT_EPSILON};
pub use q_table::QTable;
