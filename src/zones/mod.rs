//! Table zones: equation slots and the shared card group.
//!
//! ## Key Types
//!
//! - `Position`: one of the three equation roles (top, bottom-left, bottom-right)
//! - `SlotMap`: at most one card per position; used for staging areas and
//!   for both halves of the table
//! - `CardGroup`: the shared table, a working placement over the last
//!   committed equation

pub mod card_group;
pub mod slots;

pub use card_group::{CardGroup, CardGroupSnapshot, Placement, PlacementSnapshot};
pub use slots::{Position, SlotMap, StagedCardSnapshot};
