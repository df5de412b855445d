//! Attack resolver.
//!
//! Basic attacks deal the attacker's flat `attack` value to one enemy in
//! range. There is no counter-attack and no friendly fire.

use crate::core::{GameState, Metric, Position};
use crate::events::GameEvent;
use crate::units::{Unit, UnitId};

use super::{can_act, victory};

/// Tiles holding an enemy within the unit's attack range.
#[must_use]
pub fn possible_attacks(state: &GameState, unit: &Unit) -> Vec<Position> {
    let Some(origin) = unit.position else {
        return Vec::new();
    };
    if !can_act(state, unit) {
        return Vec::new();
    }

    state
        .board()
        .area(origin, unit.range, Metric::Manhattan)
        .filter(|p| state.unit_at(*p).is_some_and(|target| unit.is_enemy_of(target)))
        .collect()
}

/// Attack the unit on `target`. Returns false, leaving `state` untouched, if
/// the attack is not legal.
pub(crate) fn apply_attack(state: &mut GameState, id: UnitId, target: Position) -> bool {
    let Some(attacker) = state.get_unit(id) else {
        return false;
    };
    if !possible_attacks(state, attacker).contains(&target) {
        log::trace!("{id} attack rejected: no enemy in range at {target}");
        return false;
    }
    let Some(defender) = state.unit_at(target).map(|u| u.id) else {
        return false;
    };

    let damage = attacker.attack;
    let attacker_name = attacker.name.clone();
    let Some(unit) = state.unit_mut(defender) else {
        return false;
    };
    let dealt = unit.take_damage(damage);
    let event = GameEvent::UnitAttacked {
        attacker: id,
        attacker_name,
        defender,
        defender_name: unit.name.clone(),
        damage: dealt,
        remaining_hp: unit.hp,
    };

    if let Some(unit) = state.unit_mut(id) {
        unit.has_attacked = true;
        unit.spend_action_point();
    }
    state.emit(event);

    let fallen = state.sweep_defeated();
    log::debug!("{id} attacked {defender} for {dealt}, {} defeated", fallen.len());
    victory::resolve(state);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MatchConfig, Phase, PlayerId};
    use crate::engine::{add_unit_to_game, start_battle};
    use crate::events::DamageSource;
    use crate::rules::movement::apply_move;

    fn skirmish() -> GameState {
        let state = MatchConfig::new(8).build().unwrap();
        let state =
            add_unit_to_game(&state, "berserker", PlayerId::ONE, Position::new(3, 3)).unwrap();
        let state = add_unit_to_game(&state, "medic", PlayerId::ONE, Position::new(3, 2)).unwrap();
        let state = add_unit_to_game(&state, "scout", PlayerId::TWO, Position::new(4, 3)).unwrap();
        let state =
            add_unit_to_game(&state, "bulwark", PlayerId::TWO, Position::new(7, 7)).unwrap();
        start_battle(&state).unwrap()
    }

    #[test]
    fn test_possible_attacks_enemies_only() {
        let state = skirmish();
        let berserker = state.unit(UnitId::new(1)).unwrap();

        assert_eq!(possible_attacks(&state, berserker), vec![Position::new(4, 3)]);
    }

    #[test]
    fn test_attack_deals_flat_damage() {
        let mut state = skirmish();

        assert!(apply_attack(&mut state, UnitId::new(1), Position::new(4, 3)));

        let scout = state.unit(UnitId::new(3)).unwrap();
        assert_eq!(scout.hp, scout.max_hp - 3);
        let berserker = state.unit(UnitId::new(1)).unwrap();
        assert!(berserker.has_attacked);
        assert_eq!(berserker.action_points, 2);
    }

    #[test]
    fn test_lethal_attack_removes_defender() {
        let mut state = skirmish();
        let scout = UnitId::new(3);
        let hp = state.unit(scout).unwrap().hp;
        state.damage_unit(scout, hp - 3, DamageSource::Turret);

        assert!(apply_attack(&mut state, UnitId::new(1), Position::new(4, 3)));

        assert!(state.get_unit(scout).is_none());
        assert!(state.log().iter().any(|line| line.contains("defeated")));
        // Player two still has the bulwark
        assert_eq!(state.phase(), Phase::Game);
    }

    #[test]
    fn test_action_points_are_the_only_limit() {
        let state = MatchConfig::new(8).build().unwrap();
        let state =
            add_unit_to_game(&state, "berserker", PlayerId::ONE, Position::new(3, 3)).unwrap();
        let state =
            add_unit_to_game(&state, "bulwark", PlayerId::TWO, Position::new(4, 3)).unwrap();
        let mut state = start_battle(&state).unwrap();
        let (berserker, bulwark) = (UnitId::new(1), UnitId::new(2));

        assert!(apply_attack(&mut state, berserker, Position::new(4, 3)));
        assert!(apply_attack(&mut state, berserker, Position::new(4, 3)));
        assert_eq!(state.unit(bulwark).unwrap().hp, 4);
        assert_eq!(state.unit(berserker).unwrap().action_points, 1);

        // Having attacked does not stop the last point being spent on a move
        assert!(apply_move(&mut state, berserker, Position::new(4, 4)));
        let unit = state.unit(berserker).unwrap();
        assert!(unit.has_attacked && unit.has_moved);
        assert_eq!(unit.action_points, 0);

        let before = state.clone();
        assert!(possible_attacks(&state, unit).is_empty());
        assert!(!apply_attack(&mut state, berserker, Position::new(4, 3)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_attack_ally_is_noop() {
        let mut state = skirmish();
        let before = state.clone();

        assert!(!apply_attack(&mut state, UnitId::new(1), Position::new(3, 2)));
        assert_eq!(state, before);
    }
}
