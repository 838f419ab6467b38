//! The shared table.
//!
//! A `CardGroup` holds two placements:
//!
//! - **working**: the in-progress, uncommitted placement of the acting player
//! - **committed**: the last equation that was successfully committed
//!
//! Committed cards are never mutated by checks. When new cards are proposed,
//! `effective_view` merges working over committed over the proposal into a
//! temporary map, and only a *complete* view is held to the equation. A
//! partial view is always allowed, which is what lets a player extend a
//! committed equation by replacing one or two of its positions.
//!
//! ```
//! use equation_cards::cards::Card;
//! use equation_cards::core::{CardId, GameMode, PlayerId};
//! use equation_cards::zones::{CardGroup, Position, SlotMap};
//!
//! let card = |id, v| Card::number(CardId::new(id), v).unwrap();
//! let mut group = CardGroup::new(GameMode::Addition);
//!
//! let play = SlotMap::new()
//!     .with(Position::Top, card(0, 5))
//!     .with(Position::BottomLeft, card(1, 2))
//!     .with(Position::BottomRight, card(2, 3));
//! group.place_cards(play, PlayerId::new(0)).unwrap();
//! assert!(group.validate());
//! group.commit().unwrap();
//!
//! assert_eq!(group.get_card(Position::Top).and_then(Card::value), Some(5));
//! ```

use serde::{Deserialize, Serialize};

use super::slots::{Position, SlotMap, StagedCardSnapshot};
use crate::cards::Card;
use crate::core::{CardIdAllocator, GameError, GameMode, PlayerId, Result};
use crate::rules::slots_satisfy;

/// Cards at the three positions plus who placed them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub slots: SlotMap,
    pub player: Option<PlayerId>,
}

impl Placement {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn to_snapshot(&self) -> PlacementSnapshot {
        PlacementSnapshot {
            cards: self.slots.to_snapshot(),
            player_id: self.player,
        }
    }

    fn from_snapshot(snapshot: &PlacementSnapshot, ids: &mut CardIdAllocator) -> Result<Self> {
        let mut slots = SlotMap::new();
        for entry in &snapshot.cards {
            let card = Card::from_snapshot(ids.next_id(), &entry.card)?;
            if slots.set(entry.position, card).is_some() {
                return Err(GameError::Snapshot(format!(
                    "position {} listed twice",
                    entry.position
                )));
            }
        }
        Ok(Self {
            slots,
            player: snapshot.player_id,
        })
    }
}

/// Working placement layered over the last committed equation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardGroup {
    working: Placement,
    committed: Placement,
    mode: GameMode,
}

impl CardGroup {
    /// Create an empty table.
    #[must_use]
    pub fn new(mode: GameMode) -> Self {
        Self {
            working: Placement::default(),
            committed: Placement::default(),
            mode,
        }
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn working(&self) -> &Placement {
        &self.working
    }

    #[must_use]
    pub fn committed(&self) -> &Placement {
        &self.committed
    }

    /// Merge for validation: working cards, committed cards in positions the
    /// working area leaves empty, then `proposed` on top.
    #[must_use]
    pub fn effective_view(&self, proposed: &SlotMap) -> SlotMap {
        let mut view = self.working.slots.clone();
        for (position, card) in self.committed.slots.iter() {
            if !view.is_occupied(position) {
                view.set(position, card.clone());
            }
        }
        for (position, card) in proposed.iter() {
            view.set(position, card.clone());
        }
        view
    }

    /// Whether `proposed` may be placed.
    ///
    /// Rejects positions already occupied in the working area. A complete
    /// effective view must satisfy the equation; a partial one is accepted.
    #[must_use]
    pub fn can_place_cards(&self, proposed: &SlotMap) -> bool {
        if proposed
            .iter()
            .any(|(position, _)| self.working.slots.is_occupied(position))
        {
            return false;
        }

        let view = self.effective_view(proposed);
        !view.is_complete() || slots_satisfy(self.mode, &view)
    }

    /// Place cards into the working area on behalf of `player`.
    ///
    /// Committed cards are carried forward into any working position the
    /// proposal does not cover.
    pub fn place_cards(&mut self, proposed: SlotMap, player: PlayerId) -> Result<()> {
        if !self.can_place_cards(&proposed) {
            return Err(GameError::InvalidCombination);
        }
        self.working.slots = self.effective_view(&proposed);
        self.working.player = Some(player);
        Ok(())
    }

    /// Whether the working area holds a complete, satisfied equation.
    #[must_use]
    pub fn validate(&self) -> bool {
        slots_satisfy(self.mode, &self.working.slots)
    }

    /// Promote the working placement to committed and clear working.
    pub fn commit(&mut self) -> Result<()> {
        if !self.working.slots.is_complete() {
            return Err(GameError::IncompleteGroup);
        }
        self.committed = std::mem::take(&mut self.working);
        Ok(())
    }

    /// Working card at a position, falling back to the committed card.
    #[must_use]
    pub fn get_card(&self, position: Position) -> Option<&Card> {
        self.working
            .slots
            .get(position)
            .or_else(|| self.committed.slots.get(position))
    }

    /// All three working positions filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.working.slots.is_complete()
    }

    /// Reinstate a working placement saved before a failed play.
    pub fn restore_working(&mut self, working: Placement) {
        self.working = working;
    }

    /// Persistence form: `{workingArea, committedState, mode}`.
    #[must_use]
    pub fn to_snapshot(&self) -> CardGroupSnapshot {
        CardGroupSnapshot {
            working_area: self.working.to_snapshot(),
            committed_state: self.committed.to_snapshot(),
            mode: self.mode,
        }
    }

    /// Rebuild a table from its persistence form, minting fresh identities.
    pub fn from_snapshot(snapshot: &CardGroupSnapshot, ids: &mut CardIdAllocator) -> Result<Self> {
        Ok(Self {
            working: Placement::from_snapshot(&snapshot.working_area, ids)?,
            committed: Placement::from_snapshot(&snapshot.committed_state, ids)?,
            mode: snapshot.mode,
        })
    }
}

/// A placement as persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementSnapshot {
    pub cards: Vec<StagedCardSnapshot>,
    pub player_id: Option<PlayerId>,
}

/// A table as persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardGroupSnapshot {
    pub working_area: PlacementSnapshot,
    pub committed_state: PlacementSnapshot,
    pub mode: GameMode,
}
