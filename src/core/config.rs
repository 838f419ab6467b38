//! Game configuration types.
//!
//! - `GameMode`: which arithmetic relation equations must satisfy
//! - `GameConfig`: mode plus the tunable table rules (hand size, wildcard
//!   range, RNG seed)

use serde::{Deserialize, Serialize};

/// Arithmetic mode for a game.
///
/// Decides both the deck composition and the equation checked on the table:
/// `top = left + right` or `top = left * right`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameMode {
    #[default]
    Addition,
    Multiplication,
}

impl GameMode {
    /// Combine two operands with this mode's operator.
    ///
    /// Returns `None` on overflow.
    #[must_use]
    pub fn apply(self, left: u32, right: u32) -> Option<u32> {
        match self {
            GameMode::Addition => left.checked_add(right),
            GameMode::Multiplication => left.checked_mul(right),
        }
    }

    /// Operator symbol, used in hint explanations.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            GameMode::Addition => '+',
            GameMode::Multiplication => '×',
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Addition => write!(f, "addition"),
            GameMode::Multiplication => write!(f, "multiplication"),
        }
    }
}

/// Complete configuration for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    /// Arithmetic mode.
    pub mode: GameMode,

    /// Cards dealt to each player by `start`.
    pub hand_size: usize,

    /// Lowest value a wildcard may be assigned.
    pub wildcard_min: u32,

    /// Highest value a wildcard may be assigned.
    pub wildcard_max: u32,

    /// RNG seed. `None` seeds from entropy when the game is built.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Addition,
            hand_size: 6,
            wildcard_min: 1,
            wildcard_max: 20,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Default configuration for a mode.
    #[must_use]
    pub fn for_mode(mode: GameMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Minimum number of players a game accepts.
    pub const MIN_PLAYERS: usize = 2;
}
