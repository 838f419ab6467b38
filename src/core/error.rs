//! Error taxonomy for every rules-engine operation.
//!
//! All failures are synchronous and returned at the offending call. An
//! operation that fails leaves game state exactly as it was before the call.

use thiserror::Error;

use super::entity::CardId;
use super::player::PlayerId;
use super::state::GameStatus;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;

/// Everything that can go wrong inside the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("operation requires the game to be {expected}, but it is {actual}")]
    InvalidState {
        expected: GameStatus,
        actual: GameStatus,
    },

    #[error("it is not {player}'s turn")]
    NotCurrentPlayer { player: PlayerId },

    #[error("{player} is not seated in this game")]
    UnknownPlayer { player: PlayerId },

    #[error("{player} is seated more than once")]
    DuplicatePlayer { player: PlayerId },

    #[error("a game needs at least 2 players, got {count}")]
    InsufficientPlayers { count: usize },

    #[error("player IDs run out at 256 seats, got {count}")]
    TooManyPlayers { count: usize },

    #[error("{card} is neither in hand nor staged")]
    CardNotOwned { card: CardId },

    #[error("cards do not form a valid equation")]
    InvalidCombination,

    #[error("all three positions must be filled before committing")]
    IncompleteGroup,

    #[error("a play needs 2 or 3 staged cards, got {count}")]
    InvalidStageCount { count: usize },

    #[error("{count} staged card(s) must be played or unstaged first")]
    StagedCardsPending { count: usize },

    #[error("the deck is empty")]
    DeckEmpty,

    #[error("requested {requested} cards but only {remaining} remain")]
    InsufficientCards { requested: usize, remaining: usize },

    #[error("value {value} is not a valid card value")]
    InvalidValue { value: u32 },

    #[error("only wildcards can change value")]
    InvalidOperation,

    #[error("{card} is not a wildcard")]
    NotAWildcard { card: CardId },

    #[error("{card} already carries an assigned value")]
    WildcardAlreadyAssigned { card: CardId },

    #[error("wildcard value {value} outside {min}..={max}")]
    OutOfRange { value: u32, min: u32, max: u32 },

    #[error("deck built with {actual} cards, expected {expected}")]
    InvalidDeckSize { expected: usize, actual: usize },

    #[error("invalid snapshot: {0}")]
    Snapshot(String),
}

impl GameError {
    /// Shorthand for a lifecycle violation.
    #[must_use]
    pub fn invalid_state(expected: GameStatus, actual: GameStatus) -> Self {
        GameError::InvalidState { expected, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = GameError::NotCurrentPlayer {
            player: PlayerId::new(1),
        };
        assert_eq!(err.to_string(), "it is not Player 1's turn");

        let err = GameError::invalid_state(GameStatus::Init, GameStatus::Playing);
        assert_eq!(
            err.to_string(),
            "operation requires the game to be init, but it is playing"
        );

        let err = GameError::OutOfRange {
            value: 21,
            min: 1,
            max: 20,
        };
        assert_eq!(err.to_string(), "wildcard value 21 outside 1..=20");
    }
}
