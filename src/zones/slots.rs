//! Equation positions and per-position card storage.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardSnapshot};
use crate::core::CardId;

/// One of the three roles in `top = left (op) right`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    Top,
    BottomLeft,
    BottomRight,
}

impl Position {
    /// All positions in slot order.
    pub const ALL: [Position; 3] = [Position::Top, Position::BottomLeft, Position::BottomRight];

    /// Slot index (0 = top).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Position::Top => 0,
            Position::BottomLeft => 1,
            Position::BottomRight => 2,
        }
    }

    /// The two positions other than this one.
    #[must_use]
    pub fn others(self) -> [Position; 2] {
        match self {
            Position::Top => [Position::BottomLeft, Position::BottomRight],
            Position::BottomLeft => [Position::Top, Position::BottomRight],
            Position::BottomRight => [Position::Top, Position::BottomLeft],
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Position::Top => "top",
            Position::BottomLeft => "bottom-left",
            Position::BottomRight => "bottom-right",
        };
        f.write_str(name)
    }
}

/// Three position slots holding at most one card each.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotMap {
    slots: [Option<Card>; 3],
}

impl SlotMap {
    /// Create an empty slot map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Card at a position.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&Card> {
        self.slots[position.index()].as_ref()
    }

    /// Mutable access to the card at a position.
    pub fn get_mut(&mut self, position: Position) -> Option<&mut Card> {
        self.slots[position.index()].as_mut()
    }

    /// Place a card, returning whatever was there before.
    pub fn set(&mut self, position: Position, card: Card) -> Option<Card> {
        self.slots[position.index()].replace(card)
    }

    /// Remove and return the card at a position.
    pub fn take(&mut self, position: Position) -> Option<Card> {
        self.slots[position.index()].take()
    }

    /// Builder-style placement.
    #[must_use]
    pub fn with(mut self, position: Position, card: Card) -> Self {
        self.set(position, card);
        self
    }

    #[must_use]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.slots[position.index()].is_some()
    }

    /// Number of filled positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// All three positions filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn clear(&mut self) {
        self.slots = Default::default();
    }

    /// Position holding the card with this identity, if any.
    #[must_use]
    pub fn position_of(&self, card: CardId) -> Option<Position> {
        self.iter()
            .find(|(_, c)| c.id() == card)
            .map(|(position, _)| position)
    }

    /// Filled positions in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Card)> {
        Position::ALL
            .into_iter()
            .filter_map(move |position| self.get(position).map(|card| (position, card)))
    }

    /// Empty the map, yielding its cards in slot order.
    pub fn drain(&mut self) -> Vec<(Position, Card)> {
        Position::ALL
            .into_iter()
            .filter_map(|position| self.take(position).map(|card| (position, card)))
            .collect()
    }

    /// `[top, left, right]` values when complete and every card is assigned.
    #[must_use]
    pub fn values(&self) -> Option<[u32; 3]> {
        Some([
            self.get(Position::Top)?.value()?,
            self.get(Position::BottomLeft)?.value()?,
            self.get(Position::BottomRight)?.value()?,
        ])
    }

    /// Persistence form: `[{position, card}]`.
    #[must_use]
    pub fn to_snapshot(&self) -> Vec<StagedCardSnapshot> {
        self.iter()
            .map(|(position, card)| StagedCardSnapshot {
                position,
                card: card.to_snapshot(),
            })
            .collect()
    }
}

impl FromIterator<(Position, Card)> for SlotMap {
    fn from_iter<I: IntoIterator<Item = (Position, Card)>>(iter: I) -> Self {
        let mut map = SlotMap::new();
        for (position, card) in iter {
            map.set(position, card);
        }
        map
    }
}

/// One occupied slot as persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedCardSnapshot {
    pub position: Position,
    pub card: CardSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u32, value: u32) -> Card {
        Card::number(CardId::new(id), value).unwrap()
    }

    #[test]
    fn test_set_replaces() {
        let mut slots = SlotMap::new();
        assert_eq!(slots.set(Position::Top, card(1, 5)), None);
        let prior = slots.set(Position::Top, card(2, 6));
        assert_eq!(prior.map(|c| c.id()), Some(CardId::new(1)));
        assert_eq!(slots.len(), 1);
    }

    #[test]
    fn test_complete_and_values() {
        let slots = SlotMap::new()
            .with(Position::Top, card(1, 5))
            .with(Position::BottomLeft, card(2, 2));
        assert!(!slots.is_complete());
        assert_eq!(slots.values(), None);

        let slots = slots.with(Position::BottomRight, card(3, 3));
        assert!(slots.is_complete());
        assert_eq!(slots.values(), Some([5, 2, 3]));
    }

    #[test]
    fn test_unassigned_wildcard_has_no_values() {
        let slots = SlotMap::new()
            .with(Position::Top, card(1, 5))
            .with(Position::BottomLeft, card(2, 2))
            .with(Position::BottomRight, Card::wildcard(CardId::new(3)));
        assert!(slots.is_complete());
        assert_eq!(slots.values(), None);
    }

    #[test]
    fn test_position_of_and_drain() {
        let mut slots = SlotMap::new()
            .with(Position::BottomRight, card(7, 1))
            .with(Position::Top, card(8, 2));
        assert_eq!(slots.position_of(CardId::new(7)), Some(Position::BottomRight));
        assert_eq!(slots.position_of(CardId::new(9)), None);

        let drained = slots.drain();
        let order: Vec<_> = drained.iter().map(|(p, _)| *p).collect();
        assert_eq!(order, vec![Position::Top, Position::BottomRight]);
        assert!(slots.is_empty());
    }

    #[test]
    fn test_others() {
        assert_eq!(
            Position::BottomLeft.others(),
            [Position::Top, Position::BottomRight]
        );
    }

    #[test]
    fn test_position_serialization() {
        let json = serde_json::to_string(&Position::BottomLeft).unwrap();
        assert_eq!(json, "\"BOTTOM_LEFT\"");
    }
}
