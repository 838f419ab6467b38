//! Deck composition and drawing properties.

use std::collections::{BTreeMap, HashSet};

use equation_cards::{Card, CardIdAllocator, Deck, GameError, GameMode, GameRng};
use proptest::prelude::*;

fn mode_strategy() -> impl Strategy<Value = GameMode> {
    prop_oneof![Just(GameMode::Addition), Just(GameMode::Multiplication)]
}

/// `value -> copies`, with wildcards counted under 0.
fn tally(cards: &[Card]) -> BTreeMap<u32, usize> {
    let mut counts = BTreeMap::new();
    for card in cards {
        let key = if card.is_wildcard() { 0 } else { card.value().unwrap_or(0) };
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

fn fresh_deck(mode: GameMode, seed: u64) -> Deck {
    let mut ids = CardIdAllocator::new();
    let mut rng = GameRng::new(seed);
    Deck::new(mode, &mut ids, &mut rng).unwrap()
}

#[test]
fn test_addition_composition() {
    let deck = fresh_deck(GameMode::Addition, 1);
    assert_eq!(deck.remaining_count(), 42);

    let counts = tally(deck.cards());
    for value in 1..=20 {
        assert_eq!(counts.get(&value), Some(&2), "two copies of {value}");
    }
    assert_eq!(counts.get(&0), Some(&2));
    assert!(deck
        .cards()
        .iter()
        .filter(|c| c.is_wildcard())
        .all(|c| !c.is_assigned()));
}

#[test]
fn test_multiplication_composition() {
    let deck = fresh_deck(GameMode::Multiplication, 1);
    assert_eq!(deck.remaining_count(), 56);

    let counts = tally(deck.cards());
    for value in 1..=6 {
        assert_eq!(counts.get(&value), Some(&5));
    }
    for value in [8, 9, 10, 12] {
        assert_eq!(counts.get(&value), Some(&3));
    }
    for value in [15, 16, 18, 20, 24, 25, 30, 36] {
        assert_eq!(counts.get(&value), Some(&1));
    }
    for absent in [7, 11, 13, 14, 17] {
        assert_eq!(counts.get(&absent), None);
    }
    assert_eq!(counts.get(&0), Some(&6));
}

#[test]
fn test_composition_tables() {
    let addition = Deck::composition(GameMode::Addition);
    assert_eq!(addition.total(), 42);
    assert_eq!(addition.copies_of(7), 2);

    let multiplication = Deck::composition(GameMode::Multiplication);
    assert_eq!(multiplication.total(), 56);
    assert_eq!(multiplication.copies_of(36), 1);
    assert_eq!(multiplication.copies_of(7), 0);
}

#[test]
fn test_draw_errors() {
    let mut deck = fresh_deck(GameMode::Addition, 3);
    assert_eq!(
        deck.draw(43).map(|c| c.len()),
        Err(GameError::InsufficientCards {
            requested: 43,
            remaining: 42,
        })
    );
    assert_eq!(deck.remaining_count(), 42);

    assert_eq!(deck.draw(42).unwrap().len(), 42);
    assert!(deck.is_empty());
    assert_eq!(deck.draw_one(), Err(GameError::DeckEmpty));
}

#[test]
fn test_reset_refills_with_fresh_ids() {
    let mut ids = CardIdAllocator::new();
    let mut rng = GameRng::new(9);
    let mut deck = Deck::new(GameMode::Addition, &mut ids, &mut rng).unwrap();
    let before: HashSet<_> = deck.cards().iter().map(Card::id).collect();

    deck.draw(10).unwrap();
    deck.reset(&mut ids, &mut rng).unwrap();
    assert_eq!(deck.remaining_count(), 42);

    let after: HashSet<_> = deck.cards().iter().map(Card::id).collect();
    assert!(before.is_disjoint(&after));
}

proptest! {
    /// Shuffling never changes which values are in the deck.
    #[test]
    fn prop_shuffle_preserves_multiset(mode in mode_strategy(), seed in any::<u64>()) {
        let mut ids = CardIdAllocator::new();
        let canonical = Deck::canonical_cards(mode, &mut ids).unwrap();
        let deck = fresh_deck(mode, seed);
        prop_assert_eq!(tally(deck.cards()), tally(&canonical));
    }

    /// Every card has its own identity.
    #[test]
    fn prop_card_ids_unique(mode in mode_strategy(), seed in any::<u64>()) {
        let deck = fresh_deck(mode, seed);
        let unique: HashSet<_> = deck.cards().iter().map(Card::id).collect();
        prop_assert_eq!(unique.len(), deck.remaining_count());
    }

    /// Drawn plus remaining always equals the full deck.
    #[test]
    fn prop_draw_conserves_cards(
        mode in mode_strategy(),
        seed in any::<u64>(),
        take in 0usize..=42,
    ) {
        let mut deck = fresh_deck(mode, seed);
        let total = deck.remaining_count();
        let front: Vec<_> = deck.cards()[..take].iter().map(Card::id).collect();

        let drawn = deck.draw(take).unwrap();
        prop_assert_eq!(drawn.len(), take);
        prop_assert_eq!(drawn.len() + deck.remaining_count(), total);
        // Draws come off the front.
        let drawn_ids: Vec<_> = drawn.iter().map(Card::id).collect();
        prop_assert_eq!(drawn_ids, front);
    }

    /// The same seed deals the same order.
    #[test]
    fn prop_seed_determines_order(mode in mode_strategy(), seed in any::<u64>()) {
        let a = fresh_deck(mode, seed);
        let b = fresh_deck(mode, seed);
        let a_values: Vec<_> = a.cards().iter().map(Card::value).collect();
        let b_values: Vec<_> = b.cards().iter().map(Card::value).collect();
        prop_assert_eq!(a_values, b_values);
    }
}
