//! Equation checks.

use crate::core::GameMode;
use crate::zones::SlotMap;

/// `top == left (op) right` for the given mode.
#[must_use]
pub fn equation_holds(mode: GameMode, top: u32, left: u32, right: u32) -> bool {
    mode.apply(left, right) == Some(top)
}

/// Whether a slot map holds a complete, satisfied equation.
///
/// Incomplete maps and maps holding an unassigned wildcard are not satisfied.
#[must_use]
pub fn slots_satisfy(mode: GameMode, slots: &SlotMap) -> bool {
    slots
        .values()
        .is_some_and(|[top, left, right]| equation_holds(mode, top, left, right))
}

/// Whether three values can be arranged into a valid equation.
///
/// True iff some choice of result among the three satisfies the mode's
/// equation with the remaining two as operands.
///
/// ```
/// use equation_cards::core::GameMode;
/// use equation_cards::rules::validate_card_placement;
///
/// assert!(validate_card_placement(GameMode::Addition, [1, 2, 3]));
/// assert!(!validate_card_placement(GameMode::Addition, [1, 2, 5]));
/// assert!(validate_card_placement(GameMode::Multiplication, [6, 2, 3]));
/// ```
#[must_use]
pub fn validate_card_placement(mode: GameMode, values: [u32; 3]) -> bool {
    (0..3).any(|top| {
        let left = values[(top + 1) % 3];
        let right = values[(top + 2) % 3];
        equation_holds(mode, values[top], left, right)
    })
}
