//! Number cards and wildcards.
//!
//! A number card's value is fixed at construction. A wildcard starts without
//! a value; the player assigns one exactly once before playing it.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, GameError, Result};

/// A physical card.
///
/// Equality compares identity and state, so two `5`s minted separately are
/// different cards. Compare `value()` for face-value equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    id: CardId,
    value: Option<u32>,
    is_wildcard: bool,
}

impl Card {
    /// Create a number card. Values start at 1.
    pub fn number(id: CardId, value: u32) -> Result<Self> {
        if value < 1 {
            return Err(GameError::InvalidValue { value });
        }
        Ok(Self {
            id,
            value: Some(value),
            is_wildcard: false,
        })
    }

    /// Create an unassigned wildcard.
    #[must_use]
    pub fn wildcard(id: CardId) -> Self {
        Self {
            id,
            value: None,
            is_wildcard: true,
        }
    }

    /// This card's identity.
    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// Current value. `None` only for a wildcard that has not been assigned.
    #[must_use]
    pub fn value(&self) -> Option<u32> {
        self.value
    }

    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.is_wildcard
    }

    /// Whether the card has a value it can contribute to an equation.
    #[must_use]
    pub fn is_assigned(&self) -> bool {
        self.value.is_some()
    }

    /// Assign a wildcard's value.
    ///
    /// Fails on number cards, on values below 1, and on wildcards that
    /// already carry a value. Range limits beyond `>= 1` are a player rule,
    /// see `Player::set_wildcard_value`.
    pub fn set_value(&mut self, value: u32) -> Result<()> {
        if !self.is_wildcard {
            return Err(GameError::InvalidOperation);
        }
        if value < 1 {
            return Err(GameError::InvalidValue { value });
        }
        if self.value.is_some() {
            return Err(GameError::WildcardAlreadyAssigned { card: self.id });
        }
        self.value = Some(value);
        Ok(())
    }

    /// Persistence form, without identity.
    #[must_use]
    pub fn to_snapshot(&self) -> CardSnapshot {
        CardSnapshot {
            value: self.value,
            is_wildcard: self.is_wildcard,
        }
    }

    /// Rebuild a card from its persistence form under a fresh identity.
    pub fn from_snapshot(id: CardId, snapshot: &CardSnapshot) -> Result<Self> {
        match (snapshot.is_wildcard, snapshot.value) {
            (true, None) => Ok(Self::wildcard(id)),
            (true, Some(value)) if value >= 1 => Ok(Self {
                id,
                value: Some(value),
                is_wildcard: true,
            }),
            (true, Some(value)) => Err(GameError::InvalidValue { value }),
            (false, Some(value)) => Self::number(id, value),
            (false, None) => Err(GameError::Snapshot(
                "number card without a value".to_string(),
            )),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.is_wildcard, self.value) {
            (false, Some(v)) => write!(f, "{v}"),
            (true, Some(v)) => write!(f, "*{v}"),
            (_, None) => write!(f, "*"),
        }
    }
}

/// A card as persisted: `{value, isWildcard}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSnapshot {
    pub value: Option<u32>,
    pub is_wildcard: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_card() {
        let card = Card::number(CardId::new(1), 7).unwrap();
        assert_eq!(card.value(), Some(7));
        assert!(!card.is_wildcard());
        assert_eq!(
            Card::number(CardId::new(2), 0),
            Err(GameError::InvalidValue { value: 0 })
        );
    }

    #[test]
    fn test_number_card_rejects_set_value() {
        let mut card = Card::number(CardId::new(1), 7).unwrap();
        assert_eq!(card.set_value(3), Err(GameError::InvalidOperation));
        assert_eq!(card.value(), Some(7));
    }

    #[test]
    fn test_wildcard_assignment_is_one_shot() {
        let mut card = Card::wildcard(CardId::new(4));
        assert!(!card.is_assigned());

        assert_eq!(card.set_value(0), Err(GameError::InvalidValue { value: 0 }));
        card.set_value(12).unwrap();
        assert_eq!(card.value(), Some(12));
        assert!(card.is_wildcard());

        assert_eq!(
            card.set_value(3),
            Err(GameError::WildcardAlreadyAssigned { card: CardId::new(4) })
        );
        assert_eq!(card.value(), Some(12));
    }

    #[test]
    fn test_same_value_cards_are_distinct() {
        let a = Card::number(CardId::new(1), 5).unwrap();
        let b = Card::number(CardId::new(2), 5).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.value(), b.value());
    }

    #[test]
    fn test_snapshot_json_shape() {
        let card = Card::number(CardId::new(9), 5).unwrap();
        let json = serde_json::to_string(&card.to_snapshot()).unwrap();
        assert_eq!(json, r#"{"value":5,"isWildcard":false}"#);

        let wild = Card::wildcard(CardId::new(10));
        let json = serde_json::to_string(&wild.to_snapshot()).unwrap();
        assert_eq!(json, r#"{"value":null,"isWildcard":true}"#);
    }

    #[test]
    fn test_from_snapshot() {
        let snap = CardSnapshot {
            value: Some(8),
            is_wildcard: true,
        };
        let card = Card::from_snapshot(CardId::new(3), &snap).unwrap();
        assert_eq!(card.id(), CardId::new(3));
        assert_eq!(card.to_snapshot(), snap);

        let broken = CardSnapshot {
            value: None,
            is_wildcard: false,
        };
        assert!(matches!(
            Card::from_snapshot(CardId::new(4), &broken),
            Err(GameError::Snapshot(_))
        ));
    }

    #[test]
    fn test_display() {
        let mut wild = Card::wildcard(CardId::new(1));
        assert_eq!(wild.to_string(), "*");
        wild.set_value(4).unwrap();
        assert_eq!(wild.to_string(), "*4");
        assert_eq!(Card::number(CardId::new(2), 11).unwrap().to_string(), "11");
    }
}
