//! Ability targeting.
//!
//! Defines which tiles an ability may be aimed at:
//! - `TargetKind`: what the target tile must hold
//! - `TargetSelector`: enumerates and checks targets for a caster

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Metric, Position};
use crate::units::Unit;

/// What an ability can be aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    /// The caster's own tile. Range is ignored.
    Self_,
    /// A tile holding a unit of the caster's owner, the caster included.
    Ally,
    /// A tile holding a unit of the opponent.
    Enemy,
    /// Any tile, occupied or not.
    Tile,
    /// Any tile, as the centre of an area.
    Area,
}

impl TargetKind {
    /// Does the occupant of a tile satisfy this kind?
    ///
    /// Range is checked separately by `TargetSelector`.
    #[must_use]
    pub fn accepts(self, caster: &Unit, target: Position, occupant: Option<&Unit>) -> bool {
        match self {
            TargetKind::Self_ => caster.position == Some(target),
            TargetKind::Ally => occupant.is_some_and(|u| u.owner == caster.owner),
            TargetKind::Enemy => occupant.is_some_and(|u| u.owner != caster.owner),
            TargetKind::Tile | TargetKind::Area => true,
        }
    }
}

/// Target enumeration for a caster's ability.
pub struct TargetSelector;

impl TargetSelector {
    /// Is `target` a legal aim point for the caster's ability?
    ///
    /// Ignores readiness, action points and turn order.
    #[must_use]
    pub fn is_valid(state: &GameState, caster: &Unit, target: Position) -> bool {
        let Some(origin) = caster.position else {
            return false;
        };
        if !state.board().in_bounds(target) {
            return false;
        }

        let ability = &caster.ability;
        if ability.target != TargetKind::Self_ && origin.manhattan(target) > ability.range {
            return false;
        }

        let occupant = state.unit_at(target);
        if !ability.target.accepts(caster, target, occupant) {
            return false;
        }

        !ability.effect.requires_unit() || occupant.is_some()
    }

    /// Every legal aim point, in row-major order.
    #[must_use]
    pub fn candidates(state: &GameState, caster: &Unit) -> Vec<Position> {
        let Some(origin) = caster.position else {
            return Vec::new();
        };

        if caster.ability.target == TargetKind::Self_ {
            return if Self::is_valid(state, caster, origin) {
                vec![origin]
            } else {
                Vec::new()
            };
        }

        state
            .board()
            .area(origin, caster.ability.range, Metric::Manhattan)
            .filter(|p| Self::is_valid(state, caster, *p))
            .collect()
    }
}
