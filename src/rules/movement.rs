//! Movement resolver.

use crate::core::{GameState, Metric, Position};
use crate::events::GameEvent;
use crate::units::{Unit, UnitId};

use super::can_act;

/// Destinations a unit may move to this action, in row-major order.
///
/// A destination is within Manhattan distance `unit.movement`, inside the
/// board, passable (no obstacle, no barrier) and unoccupied.
#[must_use]
pub fn possible_moves(state: &GameState, unit: &Unit) -> Vec<Position> {
    let Some(origin) = unit.position else {
        return Vec::new();
    };
    if !can_act(state, unit) {
        return Vec::new();
    }

    let occupied = state.occupied();
    state
        .board()
        .area(origin, unit.movement, Metric::Manhattan)
        .filter(|p| *p != origin && !occupied.contains(p))
        .filter(|p| state.board().tile(*p).is_some_and(|t| t.is_passable()))
        .collect()
}

/// Move a unit. Returns false, leaving `state` untouched, if `to` is not a
/// legal destination.
pub(crate) fn apply_move(state: &mut GameState, id: UnitId, to: Position) -> bool {
    let Some(unit) = state.get_unit(id) else {
        return false;
    };
    let Some(from) = unit.position else {
        return false;
    };
    if !possible_moves(state, unit).contains(&to) {
        log::trace!("{id} move rejected: {to} is not a legal destination");
        return false;
    }

    let name = unit.name.clone();
    if let Some(unit) = state.unit_mut(id) {
        unit.position = Some(to);
        unit.has_moved = true;
        unit.spend_action_point();
    }
    state.emit(GameEvent::UnitMoved { unit: id, name, from, to });
    log::debug!("{id} moved {from} -> {to}");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TileKind;
    use crate::core::{MatchConfig, PlayerId};
    use crate::engine::{add_unit_to_game, start_battle};

    fn duel(config: MatchConfig) -> GameState {
        let state = config.build().unwrap();
        let state =
            add_unit_to_game(&state, "bulwark", PlayerId::ONE, Position::new(1, 6)).unwrap();
        let state =
            add_unit_to_game(&state, "berserker", PlayerId::TWO, Position::new(2, 1)).unwrap();
        start_battle(&state).unwrap()
    }

    #[test]
    fn test_moves_within_range() {
        let state = duel(MatchConfig::new(8));
        let bulwark = state.unit(UnitId::new(1)).unwrap();

        let moves = possible_moves(&state, bulwark);

        // 13-tile diamond, less the origin, (-1, 6) and (1, 8)
        assert_eq!(moves.len(), 10);
        assert!(moves.iter().all(|p| p.manhattan(Position::new(1, 6)) <= 2));
        assert!(!moves.contains(&Position::new(1, 6)));
        assert!(moves.contains(&Position::new(1, 4)));
        assert!(moves.contains(&Position::new(0, 7)));
        assert!(!moves.contains(&Position::new(1, 8)));
    }

    #[test]
    fn test_obstacles_block() {
        let state = duel(MatchConfig::new(8).with_tile(Position::new(1, 5), TileKind::Obstacle));
        let bulwark = state.unit(UnitId::new(1)).unwrap();

        assert!(!possible_moves(&state, bulwark).contains(&Position::new(1, 5)));
    }

    #[test]
    fn test_apply_move() {
        let mut state = duel(MatchConfig::new(8));
        let id = UnitId::new(1);

        assert!(apply_move(&mut state, id, Position::new(1, 4)));

        let unit = state.unit(id).unwrap();
        assert_eq!(unit.position, Some(Position::new(1, 4)));
        assert!(unit.has_moved);
        assert_eq!(unit.action_points, 2);
    }

    #[test]
    fn test_illegal_move_is_noop() {
        let mut state = duel(MatchConfig::new(8));
        let before = state.clone();

        assert!(!apply_move(&mut state, UnitId::new(1), Position::new(1, 2)));
        assert_eq!(state, before);
    }
}
