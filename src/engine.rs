//! Public operations.
//!
//! Every operation takes the current state by reference and returns the
//! next state. The input is never modified: a working copy is taken (O(1),
//! thanks to the persistent collections inside `GameState`), the intent is
//! applied to it, and it is returned.
//!
//! ## Errors
//!
//! Rule violations are not errors. Moving to an illegal tile, acting out of
//! turn, acting without action points or after the match ended all return
//! `Ok` with a state equal to the input. `Err(EngineError)` is reserved for
//! inputs no well-behaved client can produce: coordinates outside the grid,
//! unknown unit IDs, unknown templates, invalid seats.
//!
//! ## Example
//!
//! ```
//! use tactics_core::core::{PlayerId, Position};
//! use tactics_core::engine;
//! use tactics_core::units::UnitId;
//!
//! let state = engine::create_initial_game_state(8, "p1", "Alice", "p2", "Bob").unwrap();
//! let state =
//!     engine::add_unit_to_game(&state, "bulwark", PlayerId::ONE, Position::new(1, 6)).unwrap();
//! let state =
//!     engine::add_unit_to_game(&state, "berserker", PlayerId::TWO, Position::new(2, 1)).unwrap();
//! let state = engine::start_battle(&state).unwrap();
//!
//! let bulwark = UnitId::new(1);
//! assert!(engine::possible_moves(&state, bulwark).unwrap().contains(&Position::new(1, 4)));
//!
//! let next = engine::move_unit(&state, bulwark, 1, 4).unwrap();
//! assert_eq!(next.unit(bulwark).unwrap().position, Some(Position::new(1, 4)));
//! assert_eq!(state.unit(bulwark).unwrap().position, Some(Position::new(1, 6)));
//! ```

use crate::core::{
    EngineError, GameState, Intent, MatchConfig, Phase, PlayerId, Position, Result, Selection,
};
use crate::effects;
use crate::events::GameEvent;
use crate::rules::{self, attack, movement, turn};
use crate::units::{TemplateId, UnitId};

// === Setup ===

/// Create a match on an open `grid_size × grid_size` board with the
/// standard catalog.
pub fn create_initial_game_state(
    grid_size: i32,
    p1_id: &str,
    p1_name: &str,
    p2_id: &str,
    p2_name: &str,
) -> Result<GameState> {
    MatchConfig::new(grid_size)
        .with_player(PlayerId::ONE, p1_id, p1_name)
        .with_player(PlayerId::TWO, p2_id, p2_name)
        .build()
}

/// Deploy a fresh unit of `template` for `owner` at `position`.
///
/// Only allowed before the battle starts; the target tile must be
/// passable and empty. The first deployment moves the match from draft
/// to placement.
pub fn add_unit_to_game(
    state: &GameState,
    template: impl Into<TemplateId>,
    owner: PlayerId,
    position: Position,
) -> Result<GameState> {
    let template = template.into();
    let archetype = state.catalog().require(&template)?;
    if !owner.is_valid() {
        return Err(EngineError::UnknownPlayer(owner));
    }
    let position = state.checked_position(position.x, position.y)?;

    if !matches!(state.phase(), Phase::Draft | Phase::Placement) {
        log::trace!("deploy of {template} rejected in phase {:?}", state.phase());
        return Ok(state.clone());
    }
    let open = state.board().tile(position).is_some_and(|t| t.is_passable());
    if !open || state.unit_at(position).is_some() {
        log::trace!("deploy of {template} rejected: {position} is blocked");
        return Ok(state.clone());
    }

    let archetype = archetype.clone();
    let mut next = state.clone();
    let id = next.alloc_unit_id();
    let mut unit = archetype.instantiate(id, owner);
    unit.position = Some(position);
    let name = unit.name.clone();
    next.insert_unit(unit);
    next.phase = Phase::Placement;
    next.emit(GameEvent::UnitDeployed {
        unit: id,
        name,
        owner,
        position,
    });
    log::debug!("{owner} deployed {template} as {id} at {position}");
    Ok(next)
}

/// Begin combat. Requires the placement phase and at least one unit on
/// each side; player one acts first.
pub fn start_battle(state: &GameState) -> Result<GameState> {
    let both_sides = PlayerId::all().all(|seat| state.units_of(seat).next().is_some());
    if state.phase() != Phase::Placement || !both_sides {
        log::trace!("start battle rejected in phase {:?}", state.phase());
        return Ok(state.clone());
    }

    let mut next = state.clone();
    next.phase = Phase::Game;
    next.current_player = PlayerId::ONE;
    next.selection = Selection::default();
    next.emit(GameEvent::BattleStarted { first: PlayerId::ONE });
    log::debug!("battle started");
    Ok(next)
}

// === Selection ===

/// Select a unit and compute its possible moves, attacks and ability
/// targets. The sets are empty if the unit cannot act now.
pub fn select_unit(state: &GameState, unit: UnitId) -> Result<GameState> {
    state.unit(unit)?;
    let mut next = state.clone();
    refresh_selection(&mut next, unit);
    Ok(next)
}

/// Select a tile. Keeps the unit selection.
pub fn select_tile(state: &GameState, x: i32, y: i32) -> Result<GameState> {
    let position = state.checked_position(x, y)?;
    let mut next = state.clone();
    next.selection.tile = Some(position);
    Ok(next)
}

#[must_use]
pub fn clear_selection(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.selection = Selection::default();
    next
}

fn refresh_selection(state: &mut GameState, id: UnitId) {
    state.selection = match state.get_unit(id) {
        Some(unit) => Selection {
            unit: Some(id),
            tile: unit.position,
            possible_moves: movement::possible_moves(state, unit),
            possible_attacks: attack::possible_attacks(state, unit),
            possible_ability_targets: effects::possible_targets(state, unit),
        },
        None => Selection::default(),
    };
}

// === Queries ===

/// Legal destinations for a unit. Empty if it cannot act.
pub fn possible_moves(state: &GameState, unit: UnitId) -> Result<Vec<Position>> {
    Ok(movement::possible_moves(state, state.unit(unit)?))
}

/// Enemy-occupied tiles the unit can attack. Empty if it cannot act.
pub fn possible_attacks(state: &GameState, unit: UnitId) -> Result<Vec<Position>> {
    Ok(attack::possible_attacks(state, state.unit(unit)?))
}

/// Legal ability targets. Empty if the unit cannot act or its ability is
/// on cooldown.
pub fn possible_ability_targets(state: &GameState, unit: UnitId) -> Result<Vec<Position>> {
    Ok(effects::possible_targets(state, state.unit(unit)?))
}

// === Commits ===

/// Move a unit to `(x, y)`.
pub fn move_unit(state: &GameState, unit: UnitId, x: i32, y: i32) -> Result<GameState> {
    commit(state, unit, x, y, movement::apply_move)
}

/// Attack the unit standing on `(x, y)`.
pub fn attack_unit(state: &GameState, unit: UnitId, x: i32, y: i32) -> Result<GameState> {
    commit(state, unit, x, y, attack::apply_attack)
}

/// Use a unit's ability on `(x, y)`.
pub fn use_ability(state: &GameState, unit: UnitId, x: i32, y: i32) -> Result<GameState> {
    commit(state, unit, x, y, effects::resolve)
}

fn commit(
    state: &GameState,
    unit: UnitId,
    x: i32,
    y: i32,
    apply: fn(&mut GameState, UnitId, Position) -> bool,
) -> Result<GameState> {
    let target = state.checked_position(x, y)?;
    state.unit(unit)?;

    let mut next = state.clone();
    if !apply(&mut next, unit, target) {
        return Ok(state.clone());
    }
    refresh_selection(&mut next, unit);
    Ok(next)
}

/// End the current player's turn.
pub fn end_turn(state: &GameState) -> Result<GameState> {
    let mut next = state.clone();
    if !turn::end_turn(&mut next) {
        return Ok(state.clone());
    }
    Ok(next)
}

// === Intents ===

/// Apply one intent. Does not check who submitted it; see `Session`.
pub fn apply_intent(state: &GameState, intent: &Intent) -> Result<GameState> {
    match intent {
        Intent::Deploy {
            template,
            owner,
            position,
        } => add_unit_to_game(state, template.clone(), *owner, *position),
        Intent::StartBattle => start_battle(state),
        Intent::Select { unit } => select_unit(state, *unit),
        Intent::Move { unit, to } => move_unit(state, *unit, to.x, to.y),
        Intent::Attack { unit, target } => attack_unit(state, *unit, target.x, target.y),
        Intent::UseAbility { unit, target } => use_ability(state, *unit, target.x, target.y),
        Intent::EndTurn => end_turn(state),
    }
}

/// Every combat intent the current player could submit right now,
/// `EndTurn` last. Empty outside combat.
#[must_use]
pub fn legal_intents(state: &GameState) -> Vec<Intent> {
    if state.phase() != Phase::Game {
        return Vec::new();
    }

    let mut intents = Vec::new();
    for unit in state.units_of(state.current_player()) {
        if !rules::can_act(state, unit) {
            continue;
        }
        let id = unit.id;
        intents.extend(
            movement::possible_moves(state, unit)
                .into_iter()
                .map(|to| Intent::Move { unit: id, to }),
        );
        intents.extend(
            attack::possible_attacks(state, unit)
                .into_iter()
                .map(|target| Intent::Attack { unit: id, target }),
        );
        intents.extend(
            effects::possible_targets(state, unit)
                .into_iter()
                .map(|target| Intent::UseAbility { unit: id, target }),
        );
    }
    intents.push(Intent::EndTurn);
    intents
}
