//! Placement advisor behind the hint feature.
//!
//! A read-only search over a hand and the committed table that lists
//! legal plays. Two strategies run in priority order and the first one that
//! finds anything wins:
//!
//! 1. **New equation**: three hand cards forming `top = left (op) right`.
//! 2. **Completion**: keep one committed card as an anchor and fill the other
//!    two positions from the hand.
//!
//! An empty result means "no hint available", not an error.

pub mod advisor;

pub use advisor::{find_valid_placements, Strategy, Suggestion};
