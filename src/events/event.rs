//! Game event types.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{GameMode, PlayerId};
use crate::zones::Position;

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum GameEvent {
    /// Hands were dealt and the first player holds the turn.
    GameStarted {
        mode: GameMode,
        players: Vec<PlayerId>,
        first: PlayerId,
    },
    /// A player drew from the deck.
    CardsDrawn {
        player: PlayerId,
        count: usize,
        deck_remaining: usize,
    },
    CardStaged {
        player: PlayerId,
        card: Card,
        position: Position,
    },
    CardUnstaged {
        player: PlayerId,
        card: Card,
        position: Position,
    },
    /// Staged cards were committed to the table.
    CardPlayed {
        player: PlayerId,
        cards: Vec<(Position, Card)>,
    },
    /// The turn moved from one player to the next.
    TurnEnded {
        previous: PlayerId,
        next: PlayerId,
        turn: u32,
    },
    GameWon {
        winner: PlayerId,
    },
    GameFinished {
        winner: Option<PlayerId>,
    },
    GamePaused,
    GameResumed,
    /// A player's hand was swapped wholesale.
    CardsReplaced {
        player: PlayerId,
        count: usize,
    },
    /// A play was rejected. `play_cards` returns the cards to the hand;
    /// `commit_cards` leaves them staged.
    InvalidPlayAttempted {
        player: PlayerId,
        cards: Vec<(Position, Card)>,
    },
    WildCardUsed {
        player: PlayerId,
        card: Card,
        value: u32,
    },
}

/// Discriminant-only view of `GameEvent`, for filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameEventKind {
    GameStarted,
    CardsDrawn,
    CardStaged,
    CardUnstaged,
    CardPlayed,
    TurnEnded,
    GameWon,
    GameFinished,
    GamePaused,
    GameResumed,
    CardsReplaced,
    InvalidPlayAttempted,
    WildCardUsed,
}

impl GameEvent {
    /// The kind of this event.
    #[must_use]
    pub fn kind(&self) -> GameEventKind {
        match self {
            GameEvent::GameStarted { .. } => GameEventKind::GameStarted,
            GameEvent::CardsDrawn { .. } => GameEventKind::CardsDrawn,
            GameEvent::CardStaged { .. } => GameEventKind::CardStaged,
            GameEvent::CardUnstaged { .. } => GameEventKind::CardUnstaged,
            GameEvent::CardPlayed { .. } => GameEventKind::CardPlayed,
            GameEvent::TurnEnded { .. } => GameEventKind::TurnEnded,
            GameEvent::GameWon { .. } => GameEventKind::GameWon,
            GameEvent::GameFinished { .. } => GameEventKind::GameFinished,
            GameEvent::GamePaused => GameEventKind::GamePaused,
            GameEvent::GameResumed => GameEventKind::GameResumed,
            GameEvent::CardsReplaced { .. } => GameEventKind::CardsReplaced,
            GameEvent::InvalidPlayAttempted { .. } => GameEventKind::InvalidPlayAttempted,
            GameEvent::WildCardUsed { .. } => GameEventKind::WildCardUsed,
        }
    }

    /// The player the event concerns, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::CardsDrawn { player, .. }
            | GameEvent::CardStaged { player, .. }
            | GameEvent::CardUnstaged { player, .. }
            | GameEvent::CardPlayed { player, .. }
            | GameEvent::CardsReplaced { player, .. }
            | GameEvent::InvalidPlayAttempted { player, .. }
            | GameEvent::WildCardUsed { player, .. } => Some(*player),
            GameEvent::TurnEnded { previous, .. } => Some(*previous),
            GameEvent::GameWon { winner } => Some(*winner),
            GameEvent::GameStarted { first, .. } => Some(*first),
            GameEvent::GameFinished { winner } => *winner,
            GameEvent::GamePaused | GameEvent::GameResumed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_player() {
        let event = GameEvent::GameWon {
            winner: PlayerId::new(1),
        };
        assert_eq!(event.kind(), GameEventKind::GameWon);
        assert_eq!(event.player(), Some(PlayerId::new(1)));
        assert_eq!(GameEvent::GamePaused.player(), None);
    }

    #[test]
    fn test_tagged_serialization() {
        let event = GameEvent::TurnEnded {
            previous: PlayerId::new(0),
            next: PlayerId::new(1),
            turn: 2,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "TurnEnded");
        assert_eq!(json["payload"]["next"], 1);

        let back: GameEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);

        let json = serde_json::to_value(GameEvent::GamePaused).unwrap();
        assert_eq!(json["type"], "GamePaused");
    }
}
