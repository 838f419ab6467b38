//! Card system: number cards, wildcards and the deck.
//!
//! ## Key Types
//!
//! - `Card`: a physical card, either a fixed number or a wildcard
//! - `CardSnapshot`: the `{value, isWildcard}` persistence form of a card
//! - `Deck`: the canonical card set for a mode, shuffled and drawn from

pub mod card;
pub mod deck;

pub use card::{Card, CardSnapshot};
pub use deck::{Composition, Deck, DeckSnapshot};
