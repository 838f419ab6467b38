//! Equation rules.
//!
//! The only arithmetic the engine knows: `top = left + right` in addition
//! mode and `top = left × right` in multiplication mode. Wildcards take part
//! with whatever value they were assigned; an unassigned wildcard never
//! satisfies an equation.

pub mod equation;

pub use equation::{equation_holds, slots_satisfy, validate_card_placement};
