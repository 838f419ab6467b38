//! Players: hand, staging area and wildcard bookkeeping.

pub mod player;

pub use player::{Player, PlayerSnapshot, WildcardValueSnapshot};
