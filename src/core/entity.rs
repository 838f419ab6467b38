//! Card identity.
//!
//! Two cards with the same face value are still different cards. Every
//! physical card gets a `CardId` from a `CardIdAllocator` when it is minted,
//! and hands, staging areas and the table all track cards by that id.
//!
//! ## Usage
//!
//! ```
//! use equation_cards::core::CardIdAllocator;
//!
//! let mut ids = CardIdAllocator::new();
//! let a = ids.next_id();
//! let b = ids.next_id();
//! assert_ne!(a, b);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a physical card within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Monotonic card ID source.
///
/// IDs are never handed out twice, so a deck rebuilt with `reset` cannot
/// collide with cards still sitting in a hand or on the table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardIdAllocator {
    next: u32,
}

impl CardIdAllocator {
    /// Create an allocator starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next card ID.
    pub fn next_id(&mut self) -> CardId {
        let id = CardId(self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential() {
        let mut ids = CardIdAllocator::new();
        assert_eq!(ids.next_id(), CardId::new(0));
        assert_eq!(ids.next_id(), CardId::new(1));
        assert_eq!(ids.next_id(), CardId::new(2));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardId::new(7)), "Card(7)");
    }

    #[test]
    fn test_clone_continues_independently() {
        let mut ids = CardIdAllocator::new();
        ids.next_id();
        let mut copy = ids.clone();
        assert_eq!(copy.next_id(), ids.next_id());
    }
}
