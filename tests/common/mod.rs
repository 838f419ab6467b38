//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use equation_cards::{CardId, Game, GameBuilder, GameEvent, GameMode, PlayerId};

pub const ALICE: PlayerId = PlayerId::new(0);
pub const BOB: PlayerId = PlayerId::new(1);
pub const CAROL: PlayerId = PlayerId::new(2);

/// A started two-player game with a fixed seed.
pub fn started_game(mode: GameMode) -> Game {
    let mut game = GameBuilder::new()
        .mode(mode)
        .seed(42)
        .player("Alice")
        .player("Bob")
        .build()
        .expect("game should build");
    game.start().expect("game should start");
    game
}

/// Replace a player's hand with fresh number cards, returning their ids in order.
pub fn give(game: &mut Game, player: PlayerId, values: &[u32]) -> Vec<CardId> {
    let cards: Vec<_> = values
        .iter()
        .map(|&v| game.mint_card(v).expect("valid card value"))
        .collect();
    let ids = cards.iter().map(|c| c.id()).collect();
    game.replace_hand(player, cards).expect("hand replaced");
    ids
}

/// Sorted face values of a player's hand (staged cards excluded).
pub fn hand_values(game: &Game, player: PlayerId) -> Vec<u32> {
    let mut values: Vec<_> = game
        .player(player)
        .expect("seated")
        .hand()
        .iter()
        .filter_map(|c| c.value())
        .collect();
    values.sort_unstable();
    values
}

/// Record every event the game emits from now on.
pub fn record_events(game: &mut Game) -> Rc<RefCell<Vec<GameEvent>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    game.add_event_listener(move |event| sink.borrow_mut().push(event.clone()));
    log
}
