//! Core value types: players, piles, actions, RNG.
//!
//! This module contains the fundamental building blocks shared by the
//! game engine and the learning agent. The agent depends only on these
//! types (in particular on `Piles::available_actions`), never on the
//! engine's mutable state.

pub mod action;
pub mod piles;
pub mod player;
pub mod rng;

pub use action::Action;
pub use piles::{Piles, DEFAULT_PILES};
pub use player::{Player, PlayerPair};
pub use rng::GameRng;
