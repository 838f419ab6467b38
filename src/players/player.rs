//! A seated player.
//!
//! ## Ownership
//!
//! A player owns the cards in their hand and the cards in their staging
//! area. Staging moves a card out of the hand into one of the three
//! positions; unstaging moves it back. Either way the card remains the
//! player's until it is committed to the table.
//!
//! ## Wildcards
//!
//! Assigning a wildcard value is recorded in a per-player back-reference map
//! keyed by card identity. The map survives snapshots by re-linking on
//! value + wildcard flag, since identities are not persisted.

use std::ops::RangeInclusive;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardSnapshot};
use crate::core::{CardId, CardIdAllocator, GameError, PlayerId, Result};
use crate::zones::{CardGroup, Position, SlotMap, StagedCardSnapshot};

/// Hands rarely exceed this many cards, so they stay inline.
type Hand = SmallVec<[Card; 8]>;

/// A player seated at the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    hand: Hand,
    staging: SlotMap,
    is_current_turn: bool,
    wildcard_values: FxHashMap<CardId, u32>,
}

impl Player {
    /// Values a wildcard may take when no game config narrows them.
    pub const WILDCARD_RANGE: RangeInclusive<u32> = 1..=20;

    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Hand::new(),
            staging: SlotMap::new(),
            is_current_turn: false,
            wildcard_values: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cards in hand, excluding staged cards.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn staging_area(&self) -> &SlotMap {
        &self.staging
    }

    #[must_use]
    pub fn staged_count(&self) -> usize {
        self.staging.len()
    }

    #[must_use]
    pub fn is_current_turn(&self) -> bool {
        self.is_current_turn
    }

    pub(crate) fn set_current_turn(&mut self, current: bool) {
        self.is_current_turn = current;
    }

    /// Cards held in hand or staging.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.staging.len()
    }

    /// Whether the card is in hand or staged.
    #[must_use]
    pub fn has_card(&self, card: CardId) -> bool {
        self.card(card).is_some()
    }

    /// Look up an owned card, in hand or staged.
    #[must_use]
    pub fn card(&self, card: CardId) -> Option<&Card> {
        self.hand
            .iter()
            .find(|c| c.id() == card)
            .or_else(|| self.staging.iter().map(|(_, c)| c).find(|c| c.id() == card))
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }

    /// Remove a card from the hand by identity.
    pub fn remove_card(&mut self, card: CardId) -> Option<Card> {
        let index = self.hand.iter().position(|c| c.id() == card)?;
        self.wildcard_values.remove(&card);
        Some(self.hand.remove(index))
    }

    /// Drop every card, staged or not. Returns what was held.
    pub fn clear_hand(&mut self) -> Vec<Card> {
        let mut cards: Vec<Card> = self.hand.drain(..).collect();
        cards.extend(self.staging.drain().into_iter().map(|(_, card)| card));
        self.wildcard_values.clear();
        cards
    }

    /// Stage an owned card at a position.
    ///
    /// The card may come from the hand or from another staging position.
    /// Whatever already occupies the target position goes back to the hand.
    pub fn stage_card(&mut self, card: CardId, position: Position) -> Result<()> {
        let moving = if let Some(index) = self.hand.iter().position(|c| c.id() == card) {
            self.hand.remove(index)
        } else if let Some(from) = self.staging.position_of(card) {
            if from == position {
                return Ok(());
            }
            self.staging
                .take(from)
                .ok_or(GameError::CardNotOwned { card })?
        } else {
            return Err(GameError::CardNotOwned { card });
        };

        if let Some(displaced) = self.staging.set(position, moving) {
            self.hand.push(displaced);
        }
        Ok(())
    }

    /// Return the card at a position to the hand. No-op when empty.
    pub fn unstage_card(&mut self, position: Position) -> Option<CardId> {
        let card = self.staging.take(position)?;
        let id = card.id();
        self.hand.push(card);
        Some(id)
    }

    /// Return every staged card to the hand.
    pub fn clear_staging_area(&mut self) {
        for (_, card) in self.staging.drain() {
            self.hand.push(card);
        }
    }

    /// Place the staged cards on the table and commit them.
    ///
    /// On success the staged cards leave the player for good and are
    /// returned. On failure the table's working area and this player's
    /// staging area are exactly as before.
    pub fn commit_to_card_group(&mut self, group: &mut CardGroup) -> Result<Vec<(Position, Card)>> {
        let saved = group.working().clone();

        let outcome = group
            .place_cards(self.staging.clone(), self.id)
            .and_then(|()| {
                if group.validate() {
                    group.commit()
                } else {
                    Err(GameError::InvalidCombination)
                }
            });

        if let Err(err) = outcome {
            group.restore_working(saved);
            return Err(err);
        }

        let played = self.staging.drain();
        for (_, card) in &played {
            self.wildcard_values.remove(&card.id());
        }
        Ok(played)
    }

    /// A player wins once every card has left their hand and staging area.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.hand.is_empty() && self.staging.is_empty()
    }

    /// Assign a wildcard's value within `1..=20`.
    pub fn set_wildcard_value(&mut self, card: CardId, value: u32) -> Result<()> {
        self.set_wildcard_value_within(card, value, Self::WILDCARD_RANGE)
    }

    /// Assign a wildcard's value within a custom range.
    pub fn set_wildcard_value_within(
        &mut self,
        card: CardId,
        value: u32,
        range: RangeInclusive<u32>,
    ) -> Result<()> {
        let target = self.card_mut(card).ok_or(GameError::CardNotOwned { card })?;
        if !target.is_wildcard() {
            return Err(GameError::NotAWildcard { card });
        }
        if !range.contains(&value) {
            return Err(GameError::OutOfRange {
                value,
                min: *range.start(),
                max: *range.end(),
            });
        }
        target.set_value(value)?;
        self.wildcard_values.insert(card, value);
        Ok(())
    }

    /// Value recorded for a wildcard this player assigned.
    #[must_use]
    pub fn wildcard_value(&self, card: CardId) -> Option<u32> {
        self.wildcard_values.get(&card).copied()
    }

    fn card_mut(&mut self, card: CardId) -> Option<&mut Card> {
        if let Some(index) = self.hand.iter().position(|c| c.id() == card) {
            return self.hand.get_mut(index);
        }
        let position = self.staging.position_of(card)?;
        self.staging.get_mut(position)
    }

    /// Persistence form.
    #[must_use]
    pub fn to_snapshot(&self) -> PlayerSnapshot {
        let mut linked: Vec<(CardId, u32)> = self
            .wildcard_values
            .iter()
            .map(|(&card, &value)| (card, value))
            .collect();
        linked.sort_unstable();

        PlayerSnapshot {
            id: self.id,
            name: self.name.clone(),
            hand: self.hand.iter().map(Card::to_snapshot).collect(),
            is_current_turn: self.is_current_turn,
            staging_area: self.staging.to_snapshot(),
            wildcard_values: linked
                .into_iter()
                .filter_map(|(card, value)| {
                    self.card(card).map(|c| WildcardValueSnapshot {
                        card: c.to_snapshot(),
                        value,
                    })
                })
                .collect(),
        }
    }

    /// Rebuild a player from its persistence form, minting fresh identities
    /// and re-linking wildcard values to matching wildcards.
    pub fn from_snapshot(snapshot: &PlayerSnapshot, ids: &mut CardIdAllocator) -> Result<Self> {
        let mut player = Player::new(snapshot.id, snapshot.name.clone());
        player.is_current_turn = snapshot.is_current_turn;

        for card in &snapshot.hand {
            player.hand.push(Card::from_snapshot(ids.next_id(), card)?);
        }
        for entry in &snapshot.staging_area {
            let card = Card::from_snapshot(ids.next_id(), &entry.card)?;
            if player.staging.set(entry.position, card).is_some() {
                return Err(GameError::Snapshot(format!(
                    "{} stages two cards at {}",
                    snapshot.id, entry.position
                )));
            }
        }

        for entry in &snapshot.wildcard_values {
            let target = player
                .owned_cards()
                .find(|c| {
                    c.to_snapshot() == entry.card
                        && c.value() == Some(entry.value)
                        && !player.wildcard_values.contains_key(&c.id())
                })
                .map(Card::id)
                .ok_or_else(|| {
                    GameError::Snapshot(format!(
                        "no wildcard with value {} to re-link for {}",
                        entry.value, snapshot.id
                    ))
                })?;
            player.wildcard_values.insert(target, entry.value);
        }

        Ok(player)
    }

    fn owned_cards(&self) -> impl Iterator<Item = &Card> {
        self.hand.iter().chain(self.staging.iter().map(|(_, c)| c))
    }
}

/// A player as persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub name: String,
    pub hand: Vec<CardSnapshot>,
    pub is_current_turn: bool,
    pub staging_area: Vec<StagedCardSnapshot>,
    pub wildcard_values: Vec<WildcardValueSnapshot>,
}

/// A wildcard back-reference as persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WildcardValueSnapshot {
    pub card: CardSnapshot,
    pub value: u32,
}
