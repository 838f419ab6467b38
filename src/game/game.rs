//! Turn state machine.
//!
//! `Game` is the single entry point for callers. Each command checks the
//! lifecycle status and the acting player's turn before touching any state,
//! mutates players / deck / table, then announces the change as a
//! `GameEvent`. A failed command leaves state exactly as it found it.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::snapshot::GameSnapshot;
use crate::cards::{Card, Deck};
use crate::core::{
    CardId, CardIdAllocator, GameConfig, GameError, GameMode, GameRng, GameStatus, PlayerId,
    Result,
};
use crate::events::{EventBus, GameEvent, ListenerId};
use crate::hints::{find_valid_placements, Suggestion};
use crate::players::Player;
use crate::zones::{CardGroup, Position};

/// One committed equation in the game's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayRecord {
    pub player: PlayerId,
    pub turn: u32,
    /// `[top, left, right]` as committed.
    pub equation: [u32; 3],
    /// Cards the player contributed (2 or 3).
    pub cards_played: usize,
}

/// A running game.
pub struct Game {
    pub(super) config: GameConfig,
    pub(super) status: GameStatus,
    pub(super) players: Vec<Player>,
    pub(super) current: usize,
    pub(super) deck: Deck,
    pub(super) group: CardGroup,
    pub(super) ids: CardIdAllocator,
    pub(super) rng: GameRng,
    pub(super) winner: Option<PlayerId>,
    pub(super) turn: u32,
    pub(super) history: Vector<PlayRecord>,
    pub(super) events: EventBus,
}

impl Game {
    /// Create a game in `mode` with default rules.
    ///
    /// Fails with `InsufficientPlayers` for fewer than two players.
    pub fn new(mode: GameMode, players: Vec<Player>) -> Result<Self> {
        Self::with_config(GameConfig::for_mode(mode), players)
    }

    /// Create a game from an explicit configuration.
    pub fn with_config(config: GameConfig, players: Vec<Player>) -> Result<Self> {
        Self::check_seating(&players)?;
        if config.wildcard_min < 1 || config.wildcard_min > config.wildcard_max {
            return Err(GameError::OutOfRange {
                value: config.wildcard_min,
                min: 1,
                max: config.wildcard_max,
            });
        }

        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut ids = CardIdAllocator::new();
        let deck = Deck::new(config.mode, &mut ids, &mut rng)?;
        debug!(mode = %config.mode, players = players.len(), seed = rng.seed(), "game created");

        Ok(Self {
            group: CardGroup::new(config.mode),
            config,
            status: GameStatus::Init,
            players,
            current: 0,
            deck,
            ids,
            rng,
            winner: None,
            turn: 0,
            history: Vector::new(),
            events: EventBus::new(),
        })
    }

    pub(super) fn check_seating(players: &[Player]) -> Result<()> {
        if players.len() < GameConfig::MIN_PLAYERS {
            return Err(GameError::InsufficientPlayers {
                count: players.len(),
            });
        }
        for (i, player) in players.iter().enumerate() {
            if players[..i].iter().any(|p| p.id() == player.id()) {
                return Err(GameError::DuplicatePlayer { player: player.id() });
            }
        }
        Ok(())
    }

    // === Lifecycle ===

    /// Rebuild and shuffle the deck, deal every player a fresh hand and give
    /// the first seat the turn.
    pub fn start(&mut self) -> Result<()> {
        self.ensure_status(GameStatus::Init)?;

        let available = Deck::expected_size(self.config.mode);
        let needed = self.config.hand_size.checked_mul(self.players.len());
        match needed {
            Some(needed) if needed <= available => {}
            _ => {
                return Err(GameError::InsufficientCards {
                    requested: needed.unwrap_or(usize::MAX),
                    remaining: available,
                })
            }
        }

        self.deck.reset(&mut self.ids, &mut self.rng)?;
        self.group = CardGroup::new(self.config.mode);
        self.history = Vector::new();
        for player in &mut self.players {
            player.clear_hand();
            player.set_current_turn(false);
        }
        for player in &mut self.players {
            player.add_cards(self.deck.draw(self.config.hand_size)?);
        }

        self.current = 0;
        self.players[0].set_current_turn(true);
        self.status = GameStatus::Playing;
        self.turn = 1;

        let first = self.players[0].id();
        info!(mode = %self.config.mode, players = self.players.len(), "game started");
        self.emit(GameEvent::GameStarted {
            mode: self.config.mode,
            players: self.players.iter().map(Player::id).collect(),
            first,
        });
        Ok(())
    }

    /// Suspend turn commands.
    pub fn pause(&mut self) -> Result<()> {
        self.ensure_status(GameStatus::Playing)?;
        self.status = GameStatus::Paused;
        self.emit(GameEvent::GamePaused);
        Ok(())
    }

    pub fn resume(&mut self) -> Result<()> {
        self.ensure_status(GameStatus::Paused)?;
        self.status = GameStatus::Playing;
        self.emit(GameEvent::GameResumed);
        Ok(())
    }

    // === Turn commands ===

    /// Draw one card into the current player's hand.
    pub fn draw_card(&mut self, player: PlayerId) -> Result<CardId> {
        let seat = self.ensure_current(player)?;
        let card = self.deck.draw_one()?;
        let id = card.id();
        self.players[seat].add_card(card);

        debug!(%player, remaining = self.deck.remaining_count(), "card drawn");
        self.emit(GameEvent::CardsDrawn {
            player,
            count: 1,
            deck_remaining: self.deck.remaining_count(),
        });
        Ok(id)
    }

    /// Stage one of the current player's cards at a position.
    pub fn stage_card(&mut self, player: PlayerId, card: CardId, position: Position) -> Result<()> {
        let seat = self.ensure_current(player)?;
        self.players[seat].stage_card(card, position)?;

        let staged = self.players[seat]
            .staging_area()
            .get(position)
            .cloned()
            .ok_or(GameError::CardNotOwned { card })?;
        self.emit(GameEvent::CardStaged {
            player,
            card: staged,
            position,
        });
        Ok(())
    }

    /// Return the card at a position to the current player's hand.
    pub fn unstage_card(&mut self, player: PlayerId, position: Position) -> Result<Option<CardId>> {
        let seat = self.ensure_current(player)?;
        let Some(id) = self.players[seat].unstage_card(position) else {
            return Ok(None);
        };
        if let Some(card) = self.players[seat].card(id).cloned() {
            self.emit(GameEvent::CardUnstaged {
                player,
                card,
                position,
            });
        }
        Ok(Some(id))
    }

    /// Give one of the current player's wildcards its value.
    pub fn assign_wildcard(&mut self, player: PlayerId, card: CardId, value: u32) -> Result<()> {
        let seat = self.ensure_current(player)?;
        let range = self.config.wildcard_min..=self.config.wildcard_max;
        self.players[seat].set_wildcard_value_within(card, value, range)?;

        let assigned = self.players[seat]
            .card(card)
            .cloned()
            .ok_or(GameError::CardNotOwned { card })?;
        self.emit(GameEvent::WildCardUsed {
            player,
            card: assigned,
            value,
        });
        Ok(())
    }

    /// Play the current player's staged cards.
    ///
    /// Two staged cards extend the committed equation; three form a new one.
    /// An invalid combination returns the staged cards to the hand and fails
    /// with `InvalidCombination`. A successful play either wins the game or
    /// passes the turn.
    pub fn play_cards(&mut self, player: PlayerId) -> Result<()> {
        let seat = self.ensure_current(player)?;
        let count = self.players[seat].staged_count();
        if !(2..=3).contains(&count) {
            return Err(GameError::InvalidStageCount { count });
        }
        self.commit_staged(seat, true)
    }

    /// Commit the staged cards without the 2-or-3 count check.
    ///
    /// On failure the cards stay staged.
    pub fn commit_cards(&mut self, player: PlayerId) -> Result<()> {
        let seat = self.ensure_current(player)?;
        self.commit_staged(seat, false)
    }

    /// Pass the turn. Refused while cards are staged.
    pub fn end_turn(&mut self, player: PlayerId) -> Result<()> {
        let seat = self.ensure_current(player)?;
        let staged = self.players[seat].staged_count();
        if staged > 0 {
            return Err(GameError::StagedCardsPending { count: staged });
        }
        self.advance_turn();
        Ok(())
    }

    /// Pass the turn, first returning any staged cards to the hand.
    pub fn skip(&mut self, player: PlayerId) -> Result<()> {
        let seat = self.ensure_current(player)?;
        for position in Position::ALL {
            if let Some(id) = self.players[seat].unstage_card(position) {
                if let Some(card) = self.players[seat].card(id).cloned() {
                    self.emit(GameEvent::CardUnstaged {
                        player,
                        card,
                        position,
                    });
                }
            }
        }
        debug!(%player, "turn skipped");
        self.advance_turn();
        Ok(())
    }

    /// Swap a player's hand for `cards`, clearing their staging area.
    ///
    /// Returns the cards previously held. Use `mint_card` / `mint_wildcard`
    /// to create cards with identities unique to this game.
    pub fn replace_hand(&mut self, player: PlayerId, cards: Vec<Card>) -> Result<Vec<Card>> {
        if self.status == GameStatus::Finished {
            return Err(GameError::invalid_state(GameStatus::Playing, self.status));
        }
        let seat = self.seat_of(player)?;
        let previous = self.players[seat].clear_hand();
        let count = cards.len();
        self.players[seat].add_cards(cards);
        self.emit(GameEvent::CardsReplaced { player, count });
        Ok(previous)
    }

    /// A new number card with a fresh identity.
    pub fn mint_card(&mut self, value: u32) -> Result<Card> {
        Card::number(self.ids.next_id(), value)
    }

    /// A new unassigned wildcard with a fresh identity.
    pub fn mint_wildcard(&mut self) -> Card {
        Card::wildcard(self.ids.next_id())
    }

    /// Suggested plays for a player's hand (staged cards included) against
    /// the committed table.
    pub fn hint(&self, player: PlayerId) -> Result<Vec<Suggestion>> {
        let seat = self.seat_of(player)?;
        let holder = &self.players[seat];
        let owned: Vec<Card> = holder
            .hand()
            .iter()
            .chain(holder.staging_area().iter().map(|(_, card)| card))
            .cloned()
            .collect();
        Ok(find_valid_placements(
            &owned,
            &self.group.committed().slots,
            self.config.mode,
        ))
    }

    // === Events ===

    pub fn add_event_listener(&mut self, listener: impl FnMut(&GameEvent) + 'static) -> ListenerId {
        self.events.add_listener(listener)
    }

    pub fn remove_event_listener(&mut self, id: ListenerId) -> bool {
        self.events.remove_listener(id)
    }

    // === Queries ===

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The player holding the turn.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn card_group(&self) -> &CardGroup {
        &self.group
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.winner.and_then(|id| self.player(id))
    }

    #[must_use]
    pub fn has_player_won(&self, player: PlayerId) -> bool {
        self.winner == Some(player)
    }

    /// Turn counter; 1 for the first turn after `start`.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Every committed equation, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<PlayRecord> {
        &self.history
    }

    /// Capture the full game state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }

    /// Rebuild a game from a snapshot. Listeners are not persisted.
    pub fn restore(snapshot: &GameSnapshot) -> Result<Self> {
        snapshot.rebuild()
    }

    // === Internals ===

    fn emit(&mut self, event: GameEvent) {
        debug!(kind = ?event.kind(), "event");
        self.events.emit(&event);
    }

    fn ensure_status(&self, expected: GameStatus) -> Result<()> {
        if self.status != expected {
            return Err(GameError::invalid_state(expected, self.status));
        }
        Ok(())
    }

    fn seat_of(&self, player: PlayerId) -> Result<usize> {
        self.players
            .iter()
            .position(|p| p.id() == player)
            .ok_or(GameError::UnknownPlayer { player })
    }

    /// Playing, seated, and holding the turn. Returns the seat.
    fn ensure_current(&self, player: PlayerId) -> Result<usize> {
        self.ensure_status(GameStatus::Playing)?;
        let seat = self.seat_of(player)?;
        if seat != self.current {
            return Err(GameError::NotCurrentPlayer { player });
        }
        Ok(seat)
    }

    fn commit_staged(&mut self, seat: usize, return_on_failure: bool) -> Result<()> {
        let player = self.players[seat].id();
        let attempted: Vec<(Position, Card)> = self.players[seat]
            .staging_area()
            .iter()
            .map(|(position, card)| (position, card.clone()))
            .collect();

        match self.players[seat].commit_to_card_group(&mut self.group) {
            Ok(played) => {
                self.after_play(seat, played);
                Ok(())
            }
            Err(err) => {
                warn!(%player, error = %err, "play rejected");
                if return_on_failure {
                    self.players[seat].clear_staging_area();
                }
                self.emit(GameEvent::InvalidPlayAttempted {
                    player,
                    cards: attempted,
                });
                Err(err)
            }
        }
    }

    fn after_play(&mut self, seat: usize, played: Vec<(Position, Card)>) {
        let player = self.players[seat].id();
        if let Some(equation) = self.group.committed().slots.values() {
            self.history.push_back(PlayRecord {
                player,
                turn: self.turn,
                equation,
                cards_played: played.len(),
            });
        }
        info!(%player, cards = played.len(), "cards played");
        self.emit(GameEvent::CardPlayed {
            player,
            cards: played,
        });

        // Win detection happens here and only here.
        if self.players[seat].has_won() {
            self.status = GameStatus::Finished;
            self.winner = Some(player);
            info!(%player, turn = self.turn, "game won");
            self.emit(GameEvent::GameWon { winner: player });
            self.emit(GameEvent::GameFinished {
                winner: Some(player),
            });
        } else {
            self.advance_turn();
        }
    }

    fn advance_turn(&mut self) {
        let previous = self.players[self.current].id();
        self.players[self.current].set_current_turn(false);
        self.current = (self.current + 1) % self.players.len();
        self.players[self.current].set_current_turn(true);
        self.turn += 1;

        let next = self.players[self.current].id();
        debug!(%previous, %next, turn = self.turn, "turn ended");
        self.emit(GameEvent::TurnEnded {
            previous,
            next,
            turn: self.turn,
        });
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("mode", &self.config.mode)
            .field("status", &self.status)
            .field("current", &self.current)
            .field("turn", &self.turn)
            .field("players", &self.players.len())
            .field("deck_remaining", &self.deck.remaining_count())
            .field("winner", &self.winner)
            .finish_non_exhaustive()
    }
}
