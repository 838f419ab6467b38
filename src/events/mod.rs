//! Game events and listener registration.
//!
//! Every state change the game makes is announced as a `GameEvent`.
//! Presentation layers subscribe through `EventBus` and pattern-match on
//! the event kind; the payload of each kind is strongly typed.

pub mod bus;
pub mod event;

pub use bus::{EventBus, ListenerId};
pub use event::{GameEvent, GameEventKind};
