//! The draw pile.
//!
//! A deck is built from a fixed per-mode composition table, shuffled once,
//! and drawn from the front. `reset` rebuilds the full set with fresh card
//! identities and reshuffles.
//!
//! ## Compositions
//!
//! | Mode           | Numbers                                            | Wildcards | Total |
//! |----------------|----------------------------------------------------|-----------|-------|
//! | Addition       | 1..=20 ×2                                          | 2         | 42    |
//! | Multiplication | 1..=6 ×5, {8,9,10,12} ×3, {15,...,36} ×1            | 6         | 56    |

use serde::{Deserialize, Serialize};

use super::card::{Card, CardSnapshot};
use crate::core::{CardIdAllocator, GameError, GameMode, GameRng, Result};

/// Copy counts for one mode's card set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Composition {
    /// `(value, copies)` pairs in canonical order.
    pub numbers: &'static [(u32, usize)],
    /// Number of wildcards appended after the numbers.
    pub wildcards: usize,
}

impl Composition {
    /// Total cards this composition produces.
    #[must_use]
    pub fn total(&self) -> usize {
        self.numbers.iter().map(|&(_, copies)| copies).sum::<usize>() + self.wildcards
    }

    /// Copies of a given number value.
    #[must_use]
    pub fn copies_of(&self, value: u32) -> usize {
        self.numbers
            .iter()
            .find(|&&(v, _)| v == value)
            .map_or(0, |&(_, copies)| copies)
    }
}

#[rustfmt::skip]
const ADDITION_NUMBERS: [(u32, usize); 20] = [
    (1, 2), (2, 2), (3, 2), (4, 2), (5, 2),
    (6, 2), (7, 2), (8, 2), (9, 2), (10, 2),
    (11, 2), (12, 2), (13, 2), (14, 2), (15, 2),
    (16, 2), (17, 2), (18, 2), (19, 2), (20, 2),
];

#[rustfmt::skip]
const MULTIPLICATION_NUMBERS: [(u32, usize); 18] = [
    // small
    (1, 5), (2, 5), (3, 5), (4, 5), (5, 5), (6, 5),
    // medium
    (8, 3), (9, 3), (10, 3), (12, 3),
    // large
    (15, 1), (16, 1), (18, 1), (20, 1), (24, 1), (25, 1), (30, 1), (36, 1),
];

const ADDITION: Composition = Composition {
    numbers: &ADDITION_NUMBERS,
    wildcards: 2,
};

const MULTIPLICATION: Composition = Composition {
    numbers: &MULTIPLICATION_NUMBERS,
    wildcards: 6,
};

/// Ordered draw pile for one game mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    mode: GameMode,
}

impl Deck {
    /// Composition table for a mode.
    #[must_use]
    pub fn composition(mode: GameMode) -> Composition {
        match mode {
            GameMode::Addition => ADDITION,
            GameMode::Multiplication => MULTIPLICATION,
        }
    }

    /// Full deck size for a mode: 42 for addition, 56 for multiplication.
    #[must_use]
    pub fn expected_size(mode: GameMode) -> usize {
        Self::composition(mode).total()
    }

    /// Build the canonical card set for `mode` and shuffle it once.
    pub fn new(mode: GameMode, ids: &mut CardIdAllocator, rng: &mut GameRng) -> Result<Self> {
        let mut deck = Self {
            cards: Self::canonical_cards(mode, ids)?,
            mode,
        };
        deck.shuffle(rng);
        Ok(deck)
    }

    /// Build a deck from explicit cards, in draw order. Used for restores
    /// and scripted setups; no composition check is applied.
    #[must_use]
    pub fn from_cards(mode: GameMode, cards: Vec<Card>) -> Self {
        Self { cards, mode }
    }

    /// The unshuffled canonical card set, numbers first then wildcards.
    ///
    /// Fails with `InvalidDeckSize` if the assembled set does not match the
    /// mode's expected total. That indicates a broken table, not bad input.
    pub fn canonical_cards(mode: GameMode, ids: &mut CardIdAllocator) -> Result<Vec<Card>> {
        let composition = Self::composition(mode);
        let mut cards = Vec::with_capacity(composition.total());

        for &(value, copies) in composition.numbers {
            for _ in 0..copies {
                cards.push(Card::number(ids.next_id(), value)?);
            }
        }
        for _ in 0..composition.wildcards {
            cards.push(Card::wildcard(ids.next_id()));
        }

        let expected = match mode {
            GameMode::Addition => 42,
            GameMode::Multiplication => 56,
        };
        if cards.len() != expected {
            return Err(GameError::InvalidDeckSize {
                expected,
                actual: cards.len(),
            });
        }
        Ok(cards)
    }

    /// Uniform random permutation of the remaining cards.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the first `n` cards.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>> {
        if n > self.cards.len() {
            return Err(GameError::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Remove and return the top card.
    pub fn draw_one(&mut self) -> Result<Card> {
        if self.cards.is_empty() {
            return Err(GameError::DeckEmpty);
        }
        Ok(self.cards.remove(0))
    }

    /// Rebuild the full set with fresh identities and reshuffle, discarding
    /// all prior draws.
    pub fn reset(&mut self, ids: &mut CardIdAllocator, rng: &mut GameRng) -> Result<()> {
        self.cards = Self::canonical_cards(self.mode, ids)?;
        self.shuffle(rng);
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Remaining cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Persistence form: `{cards, mode}`.
    #[must_use]
    pub fn to_snapshot(&self) -> DeckSnapshot {
        DeckSnapshot {
            cards: self.cards.iter().map(Card::to_snapshot).collect(),
            mode: self.mode,
        }
    }

    /// Rebuild a deck from its persistence form, minting fresh identities.
    pub fn from_snapshot(snapshot: &DeckSnapshot, ids: &mut CardIdAllocator) -> Result<Self> {
        let cards = snapshot
            .cards
            .iter()
            .map(|card| Card::from_snapshot(ids.next_id(), card))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_cards(snapshot.mode, cards))
    }
}

/// A deck as persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckSnapshot {
    pub cards: Vec<CardSnapshot>,
    pub mode: GameMode,
}
