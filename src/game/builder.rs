//! Fluent game setup.

use super::game::Game;
use crate::core::{GameConfig, GameError, GameMode, PlayerId, Result};
use crate::players::Player;

/// Builder for creating a `Game`.
///
/// ```
/// use equation_cards::core::GameMode;
/// use equation_cards::game::GameBuilder;
///
/// let mut game = GameBuilder::new()
///     .mode(GameMode::Multiplication)
///     .seed(42)
///     .player("Ada")
///     .player("Grace")
///     .build()
///     .unwrap();
///
/// game.start().unwrap();
/// assert_eq!(game.players()[0].hand().len(), 6);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    players: Vec<Player>,
    /// Seats requested through `player` after IDs ran out.
    unseated: usize,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: GameMode) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn hand_size(mut self, size: usize) -> Self {
        self.config.hand_size = size;
        self
    }

    /// Values a wildcard may be assigned. Checked when the game is built.
    pub fn wildcard_range(mut self, min: u32, max: u32) -> Self {
        self.config.wildcard_min = min;
        self.config.wildcard_max = max;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Seat a player with the next sequential ID.
    ///
    /// Past 256 seats there is no ID left; `build` then fails with
    /// `TooManyPlayers`.
    pub fn player(mut self, name: impl Into<String>) -> Self {
        match u8::try_from(self.players.len()) {
            Ok(raw) if self.unseated == 0 => {
                self.players.push(Player::new(PlayerId::new(raw), name));
            }
            _ => self.unseated += 1,
        }
        self
    }

    /// Seat a pre-built player.
    pub fn seat(mut self, player: Player) -> Self {
        self.players.push(player);
        self
    }

    /// Build the game in the `Init` state.
    pub fn build(self) -> Result<Game> {
        if self.unseated > 0 {
            return Err(GameError::TooManyPlayers {
                count: self.players.len() + self.unseated,
            });
        }
        Game::with_config(self.config, self.players)
    }
}
