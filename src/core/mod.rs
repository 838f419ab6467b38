//! Core engine types: ids, players, RNG, configuration, errors.
//!
//! These are the leaf building blocks every other module depends on.

pub mod config;
pub mod entity;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{GameConfig, GameMode};
pub use entity::{CardId, CardIdAllocator};
pub use error::{GameError, Result};
pub use player::PlayerId;
pub use rng::{GameRng, GameRngState};
pub use state::GameStatus;
