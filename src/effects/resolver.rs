//! Ability resolution - querying and committing ability use.
//!
//! `possible_targets` is the query half and `resolve` the commit half. Both
//! apply the same gate: the match is in combat, the caster belongs to the
//! player to act, has an action point left, is on the board, and its ability
//! is off cooldown.

use crate::core::{GameState, Metric, Position};
use crate::events::{DamageSource, GameEvent};
use crate::rules::{can_act, victory};
use crate::units::{Unit, UnitId};

use super::effect::AbilityEffect;
use super::targeting::TargetSelector;

/// Legal targets for a unit's ability right now. Empty if it cannot act.
#[must_use]
pub fn possible_targets(state: &GameState, caster: &Unit) -> Vec<Position> {
    if !can_act(state, caster) || !caster.ability.is_ready() {
        return Vec::new();
    }
    TargetSelector::candidates(state, caster)
}

/// Use a unit's ability on `target`. Returns false, leaving `state`
/// untouched, if the use is not legal.
pub(crate) fn resolve(state: &mut GameState, caster: UnitId, target: Position) -> bool {
    let Some(unit) = state.get_unit(caster) else {
        return false;
    };
    if !can_act(state, unit) || !unit.ability.is_ready() {
        log::trace!("{caster} cannot use its ability now");
        return false;
    }
    if !TargetSelector::is_valid(state, unit, target) {
        log::trace!("{caster} ability rejected: {target} is not a legal target");
        return false;
    }

    let owner = unit.owner;
    let effect = unit.ability.effect;
    let used = GameEvent::AbilityUsed {
        unit: caster,
        name: unit.name.clone(),
        ability: unit.ability.name.clone(),
        target,
    };
    state.emit(used);

    if let Some(unit) = state.unit_mut(caster) {
        unit.has_used_ability = true;
        unit.spend_action_point();
        unit.ability.trigger_cooldown();
    }

    match effect {
        AbilityEffect::Heal { amount } => heal(state, target, amount),
        AbilityEffect::Strike { damage } => {
            if let Some(id) = state.unit_at(target).map(|u| u.id) {
                state.damage_unit(id, damage, DamageSource::Ability);
            }
        }
        AbilityEffect::AreaDamage { damage, radius } => {
            let hit: Vec<UnitId> = state
                .units()
                .filter(|u| {
                    u.position
                        .is_some_and(|p| Metric::Chebyshev.distance(target, p) <= radius)
                })
                .map(|u| u.id)
                .collect();
            for id in hit {
                state.damage_unit(id, damage, DamageSource::Ability);
            }
        }
        AbilityEffect::Barrier { .. } | AbilityEffect::Turret { .. } => {
            if let Some((kind, duration)) = effect.hazard() {
                if state.board_mut().place_hazard(target, kind, owner, duration) {
                    state.emit(GameEvent::HazardPlaced {
                        kind,
                        position: target,
                        owner,
                        duration,
                    });
                }
            }
        }
    }

    let fallen = state.sweep_defeated();
    log::debug!("{caster} used its ability on {target}, {} defeated", fallen.len());
    victory::resolve(state);
    true
}

fn heal(state: &mut GameState, target: Position, amount: u32) {
    let Some(id) = state.unit_at(target).map(|u| u.id) else {
        return;
    };
    let Some(unit) = state.unit_mut(id) else {
        return;
    };

    let restored = unit.heal(amount);
    let event = GameEvent::UnitHealed {
        unit: id,
        name: unit.name.clone(),
        amount: restored,
        hp: unit.hp,
    };
    state.emit(event);
}
