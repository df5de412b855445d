//! Turn lifecycle.
//!
//! `end_turn` runs the end-of-turn steps strictly in order:
//!
//! 1. refresh the ending player's units (flags, action points, cooldowns)
//! 2. age every hazard on the board, clearing expired ones
//! 3. fire the surviving turrets at adjacent enemies of their owners
//! 4. remove defeated units
//! 5. check the win condition
//! 6. if the match goes on, hand control to the other player

use crate::core::{GameState, Phase, PlayerId, Selection};
use crate::events::{DamageSource, GameEvent};
use crate::units::UnitId;

use super::victory;

/// End the current player's turn. Returns false outside combat.
pub(crate) fn end_turn(state: &mut GameState) -> bool {
    if state.phase() != Phase::Game {
        log::trace!("end turn rejected in phase {:?}", state.phase());
        return false;
    }

    let ending = state.current_player();
    refresh_units(state, ending);

    let expired = state.board_mut().decay_hazards();
    for (position, hazard) in expired {
        state.emit(GameEvent::HazardExpired {
            kind: hazard.kind,
            position,
        });
    }

    fire_turrets(state);
    state.sweep_defeated();

    if victory::resolve(state).is_some() {
        return true;
    }

    let next = ending.opponent();
    if next == PlayerId::ONE {
        state.turn_number += 1;
    }
    let turn = state.turn_number;
    state.current_player = next;
    state.selection = Selection::default();
    state.emit(GameEvent::TurnStarted { player: next, turn });
    log::debug!("turn {turn} begins for {next}");
    true
}

fn refresh_units(state: &mut GameState, seat: PlayerId) {
    let ids: Vec<UnitId> = state.units_of(seat).map(|u| u.id).collect();
    for id in ids {
        if let Some(unit) = state.unit_mut(id) {
            unit.refresh();
        }
    }
}

fn fire_turrets(state: &mut GameState) {
    let mut hits = Vec::new();
    for (turret, owner, damage) in state.board().turrets() {
        for position in turret.neighbours() {
            if let Some(unit) = state.unit_at(position).filter(|u| u.owner != owner) {
                hits.push((unit.id, damage));
            }
        }
    }

    for (id, damage) in hits {
        state.damage_unit(id, damage, DamageSource::Turret);
    }
}
