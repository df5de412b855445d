//! Combat rules.
//!
//! Each resolver comes in two halves: a query that lists the legal choices
//! for a unit, and a crate-private commit that mutates a working copy of the
//! state and reports whether anything happened. The public, snapshot-
//! returning wrappers live in `engine`.
//!
//! - `movement`: Manhattan-range repositioning
//! - `attack`: flat-damage basic attacks
//! - `turn`: end-of-turn upkeep and hand-over
//! - `victory`: elimination check

pub mod attack;
pub mod movement;
pub mod turn;
pub mod victory;

pub use attack::possible_attacks;
pub use movement::possible_moves;
pub use victory::GameResult;

use crate::core::{GameState, Phase};
use crate::units::Unit;

/// Can this unit take an action right now?
///
/// True while the match is in combat, the unit belongs to the player to
/// act, is on the board, and has an action point left.
#[must_use]
pub fn can_act(state: &GameState, unit: &Unit) -> bool {
    state.phase() == Phase::Game
        && unit.owner == state.current_player()
        && unit.position.is_some()
        && unit.action_points > 0
}
