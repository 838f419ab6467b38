//! # equation-cards
//!
//! Rules engine for a card game in which players assemble number cards into
//! arithmetic equations (`top = left + right` or `top = left × right`) and
//! race to empty their hand.
//!
//! ## Design Principles
//!
//! 1. **Single entry point**: callers drive a `Game`; it owns players, deck
//!    and table and is the only thing that mutates them.
//!
//! 2. **Fail without side effects**: every command validates before it
//!    mutates. A rejected play returns staged cards to the hand.
//!
//! 3. **Typed events**: each state change is announced as a `GameEvent`
//!    variant with its own payload.
//!
//! ## Modules
//!
//! - `core`: IDs, RNG, configuration, lifecycle status, errors
//! - `cards`: number cards, wildcards and the deck
//! - `zones`: equation positions, slot maps and the shared table
//! - `players`: hands, staging areas and wildcard bookkeeping
//! - `rules`: the equation checks
//! - `events`: event types and listener registration
//! - `hints`: the placement advisor
//! - `game`: the turn state machine, builder and snapshots

pub mod core;
pub mod cards;
pub mod zones;
pub mod players;
pub mod rules;
pub mod events;
pub mod hints;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    CardId, CardIdAllocator, GameConfig, GameError, GameMode, GameRng, GameRngState, GameStatus,
    PlayerId, Result,
};

pub use crate::cards::{Card, CardSnapshot, Composition, Deck, DeckSnapshot};

pub use crate::zones::{CardGroup, CardGroupSnapshot, Placement, Position, SlotMap};

pub use crate::players::{Player, PlayerSnapshot};

pub use crate::rules::{equation_holds, validate_card_placement};

pub use crate::events::{EventBus, GameEvent, GameEventKind, ListenerId};

pub use crate::hints::{find_valid_placements, Strategy, Suggestion};

pub use crate::game::{Game, GameBuilder, GameSnapshot, PlayRecord};
