//! Whole-game persistence.
//!
//! A `GameSnapshot` composes the per-component persistence forms (cards as
//! `{value, isWildcard}`, players, deck, table) with the orchestration
//! state. Card identities are not stored; restoring mints fresh ones and
//! re-links wildcard bookkeeping by value.
//!
//! JSON goes through `serde`; `to_bytes` / `from_bytes` give a compact
//! binary form.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::game::{Game, PlayRecord};
use crate::cards::{Deck, DeckSnapshot};
use crate::core::{
    CardIdAllocator, GameConfig, GameError, GameRng, GameRngState, GameStatus, PlayerId, Result,
};
use crate::events::EventBus;
use crate::players::{Player, PlayerSnapshot};
use crate::zones::{CardGroup, CardGroupSnapshot};

/// Serializable image of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub config: GameConfig,
    pub status: GameStatus,
    pub players: Vec<PlayerSnapshot>,
    pub current_player_index: usize,
    pub deck: DeckSnapshot,
    pub card_group: CardGroupSnapshot,
    pub winner: Option<PlayerId>,
    pub turn: u32,
    pub rng: GameRngState,
    pub history: Vec<PlayRecord>,
}

impl GameSnapshot {
    pub(super) fn capture(game: &Game) -> Self {
        Self {
            config: game.config.clone(),
            status: game.status,
            players: game.players.iter().map(Player::to_snapshot).collect(),
            current_player_index: game.current,
            deck: game.deck.to_snapshot(),
            card_group: game.group.to_snapshot(),
            winner: game.winner,
            turn: game.turn,
            rng: game.rng.state(),
            history: game.history.iter().cloned().collect(),
        }
    }

    pub(super) fn rebuild(&self) -> Result<Game> {
        let mode = self.config.mode;
        if self.deck.mode != mode || self.card_group.mode != mode {
            return Err(GameError::Snapshot(format!(
                "deck and table must both be in {mode} mode"
            )));
        }

        let mut ids = CardIdAllocator::new();
        let mut players = self
            .players
            .iter()
            .map(|p| Player::from_snapshot(p, &mut ids))
            .collect::<Result<Vec<_>>>()?;
        Game::check_seating(&players)?;

        if self.current_player_index >= players.len() {
            return Err(GameError::Snapshot(format!(
                "current player index {} out of range",
                self.current_player_index
            )));
        }
        if let Some(winner) = self.winner {
            if !players.iter().any(|p| p.id() == winner) {
                return Err(GameError::UnknownPlayer { player: winner });
            }
        }

        // The turn flag is derived from the index, never trusted on its own.
        let active = matches!(self.status, GameStatus::Playing | GameStatus::Paused);
        for (seat, player) in players.iter_mut().enumerate() {
            player.set_current_turn(active && seat == self.current_player_index);
        }

        let deck = Deck::from_snapshot(&self.deck, &mut ids)?;
        let group = CardGroup::from_snapshot(&self.card_group, &mut ids)?;

        Ok(Game {
            config: self.config.clone(),
            status: self.status,
            players,
            current: self.current_player_index,
            deck,
            group,
            ids,
            rng: GameRng::from_state(&self.rng),
            winner: self.winner,
            turn: self.turn,
            history: self.history.iter().cloned().collect::<Vector<_>>(),
            events: EventBus::new(),
        })
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| GameError::Snapshot(e.to_string()))
    }

    /// Decode the binary form produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| GameError::Snapshot(e.to_string()))
    }
}
