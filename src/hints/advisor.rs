//! Placement search.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::GameMode;
use crate::rules::equation_holds;
use crate::zones::{Position, SlotMap};

/// Which search produced a suggestion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Three hand cards forming a fresh equation.
    NewEquation,
    /// Two hand cards completing an equation around a committed card.
    Completion { anchor: Position },
}

/// One legal play the player could stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub explanation: String,
    pub strategy: Strategy,
    /// Hand cards and where to stage them.
    pub cards: SlotMap,
}

impl Suggestion {
    /// Number of hand cards the suggestion uses.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }
}

/// List legal placements for `hand` against the committed table.
///
/// Wildcards take part only once they carry a value. No ranking is applied;
/// callers typically surface the first suggestion.
#[must_use]
pub fn find_valid_placements(hand: &[Card], committed: &SlotMap, mode: GameMode) -> Vec<Suggestion> {
    let valued: Vec<(&Card, u32)> = hand
        .iter()
        .filter_map(|card| card.value().map(|value| (card, value)))
        .collect();

    let fresh = new_equations(&valued, mode);
    if !fresh.is_empty() {
        return fresh;
    }
    completions(&valued, committed, mode)
}

fn new_equations(valued: &[(&Card, u32)], mode: GameMode) -> Vec<Suggestion> {
    let mut seen = FxHashSet::default();
    let mut out = Vec::new();

    for (i, &(left, lv)) in valued.iter().enumerate() {
        for (j, &(right, rv)) in valued.iter().enumerate() {
            if i == j {
                continue;
            }
            let Some(target) = mode.apply(lv, rv) else {
                continue;
            };
            // `a × 1 = a` would reuse an operand's value as the result.
            if target == lv || target == rv {
                continue;
            }
            let Some(&(top, _)) = valued
                .iter()
                .enumerate()
                .find(|&(k, &(_, v))| k != i && k != j && v == target)
                .map(|(_, entry)| entry)
            else {
                continue;
            };
            if !seen.insert((target, lv, rv)) {
                continue;
            }

            out.push(Suggestion {
                explanation: format!("Play {lv} {} {rv} = {target} as a new equation", mode.symbol()),
                strategy: Strategy::NewEquation,
                cards: SlotMap::new()
                    .with(Position::Top, top.clone())
                    .with(Position::BottomLeft, left.clone())
                    .with(Position::BottomRight, right.clone()),
            });
        }
    }
    out
}

fn completions(valued: &[(&Card, u32)], committed: &SlotMap, mode: GameMode) -> Vec<Suggestion> {
    let mut seen = FxHashSet::default();
    let mut out = Vec::new();

    for anchor in Position::ALL {
        let Some(anchor_value) = committed.get(anchor).and_then(Card::value) else {
            continue;
        };
        let [first, second] = anchor.others();

        for (i, &(a, av)) in valued.iter().enumerate() {
            for (j, &(b, bv)) in valued.iter().enumerate() {
                if i == j {
                    continue;
                }
                let mut values = [0u32; 3];
                values[anchor.index()] = anchor_value;
                values[first.index()] = av;
                values[second.index()] = bv;
                let [top, left, right] = values;

                if !equation_holds(mode, top, left, right) || !seen.insert((anchor, av, bv)) {
                    continue;
                }

                out.push(Suggestion {
                    explanation: format!(
                        "Keep {anchor_value} at {anchor}: {top} = {left} {} {right}",
                        mode.symbol()
                    ),
                    strategy: Strategy::Completion { anchor },
                    cards: SlotMap::new().with(first, a.clone()).with(second, b.clone()),
                });
            }
        }
    }
    out
}
