//! Game orchestration.
//!
//! - `Game`: the turn state machine callers drive
//! - `GameBuilder`: fluent setup of config and seating
//! - `GameSnapshot`: persistence of a whole game

mod builder;
mod game;
mod snapshot;

pub use builder::GameBuilder;
pub use game::{Game, PlayRecord};
pub use snapshot::GameSnapshot;
