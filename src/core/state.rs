//! Game state: the complete, self-contained value describing a match.
//!
//! ## Snapshots
//!
//! `GameState` uses `im` persistent collections, so `clone()` is O(1) and
//! shares structure with its source. Every public operation clones the
//! input, applies the intent to the clone, and returns it; the caller's
//! state is never touched. History, undo and replay fall out of this.
//!
//! ## Invariants
//!
//! - every live unit has `0 < hp <= max_hp` (defeated units are removed,
//!   never kept as zero-HP corpses)
//! - each player's roster lists exactly the live units it owns
//! - `log` and `events` are append-only and stay in lockstep: entry `i` of
//!   `log` is the display form of entry `i` of `events`

use im::{OrdMap, Vector};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{EngineError, Result};
use super::player::{Player, PlayerId, PlayerMap};
use super::position::Position;
use crate::board::Board;
use crate::events::{DamageSource, GameEvent};
use crate::units::{Unit, UnitCatalog, UnitId};

/// Match lifecycle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Created; no unit deployed yet.
    #[default]
    Draft,
    /// At least one unit deployed; waiting for the battle to start.
    Placement,
    /// Combat in progress.
    Game,
    /// A win condition fired.
    End,
}

/// The renderer-facing selection: a unit and/or tile plus the three
/// possible-X sets computed for the selected unit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub unit: Option<UnitId>,
    pub tile: Option<Position>,
    pub possible_moves: Vec<Position>,
    pub possible_attacks: Vec<Position>,
    pub possible_ability_targets: Vec<Position>,
}

impl Selection {
    /// Is nothing selected?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.unit.is_none() && self.tile.is_none()
    }
}

/// Complete match state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,

    /// Authoritative unit collection, ordered by deployment.
    units: OrdMap<UnitId, Unit>,

    players: PlayerMap<Player>,

    pub(crate) current_player: PlayerId,
    pub(crate) turn_number: u32,
    pub(crate) phase: Phase,
    pub(crate) winner: Option<PlayerId>,
    pub(crate) selection: Selection,

    log: Vector<String>,
    events: Vector<GameEvent>,

    catalog: UnitCatalog,
    next_unit_id: u32,
    seed: u64,
    wager: Option<u64>,
}

impl GameState {
    /// Create a fresh state in the draft phase.
    ///
    /// Prefer `MatchConfig::build`, which validates its inputs first.
    #[must_use]
    pub fn new(
        board: Board,
        players: PlayerMap<Player>,
        catalog: UnitCatalog,
        seed: u64,
        wager: Option<u64>,
    ) -> Self {
        Self {
            board,
            units: OrdMap::new(),
            players,
            current_player: PlayerId::ONE,
            turn_number: 1,
            phase: Phase::Draft,
            winner: None,
            selection: Selection::default(),
            log: Vector::new(),
            events: Vector::new(),
            catalog,
            next_unit_id: 1,
            seed,
            wager,
        }
    }

    // === Progression ===

    /// Seat whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Turn number (starts at 1, advances when player one regains control).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Winning seat once `phase == End`; `None` before that or on a draw.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    // === Board ===

    #[must_use]
    pub fn grid_size(&self) -> i32 {
        self.board.size()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Validate caller-supplied coordinates.
    pub fn checked_position(&self, x: i32, y: i32) -> Result<Position> {
        let position = Position::new(x, y);
        if self.board.in_bounds(position) {
            Ok(position)
        } else {
            Err(EngineError::OutOfBounds {
                position,
                grid_size: self.grid_size(),
            })
        }
    }

    // === Players ===

    /// Get a seated player.
    #[must_use]
    pub fn player(&self, seat: PlayerId) -> &Player {
        &self.players[seat]
    }

    /// Both players in seat order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().map(|(_, p)| p)
    }

    /// Find the seat of a lobby account id.
    #[must_use]
    pub fn seat_of(&self, account_id: &str) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, p)| p.id == account_id)
            .map(|(seat, _)| seat)
    }

    // === Units ===

    /// All live units in deployment order.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    /// Look up a live unit.
    pub fn unit(&self, id: UnitId) -> Result<&Unit> {
        self.units.get(&id).ok_or(EngineError::UnknownUnit(id))
    }

    /// Look up a live unit, `None` if it does not exist.
    #[must_use]
    pub fn get_unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(&id)
    }

    /// The unit standing on a tile.
    #[must_use]
    pub fn unit_at(&self, position: Position) -> Option<&Unit> {
        self.units.values().find(|u| u.position == Some(position))
    }

    /// Live units owned by a seat, in deployment order.
    pub fn units_of(&self, seat: PlayerId) -> impl Iterator<Item = &Unit> {
        self.players[seat]
            .roster
            .iter()
            .filter_map(move |id| self.units.get(id))
    }

    /// Every occupied tile.
    #[must_use]
    pub fn occupied(&self) -> FxHashSet<Position> {
        self.units.values().filter_map(|u| u.position).collect()
    }

    pub(crate) fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.get_mut(&id)
    }

    pub(crate) fn alloc_unit_id(&mut self) -> UnitId {
        let id = UnitId::new(self.next_unit_id);
        self.next_unit_id += 1;
        id
    }

    /// Add a unit to the master collection and its owner's roster.
    pub(crate) fn insert_unit(&mut self, unit: Unit) {
        self.players[unit.owner].roster.push_back(unit.id);
        self.units.insert(unit.id, unit);
    }

    /// Remove a unit from the master collection and its owner's roster.
    pub(crate) fn remove_unit(&mut self, id: UnitId) -> Option<Unit> {
        let unit = self.units.remove(&id)?;
        self.players[unit.owner].roster.retain(|u| *u != id);
        if self.selection.unit == Some(id) {
            self.selection = Selection::default();
        }
        Some(unit)
    }

    /// Deal damage to a unit and record it. Returns false if the unit is
    /// missing or already down.
    pub(crate) fn damage_unit(&mut self, id: UnitId, amount: u32, source: DamageSource) -> bool {
        let Some(unit) = self.units.get_mut(&id) else {
            return false;
        };
        if !unit.is_alive() {
            return false;
        }

        let dealt = unit.take_damage(amount);
        let event = GameEvent::UnitDamaged {
            unit: id,
            name: unit.name.clone(),
            amount: dealt,
            remaining_hp: unit.hp,
            source,
        };
        self.emit(event);
        true
    }

    /// Remove every unit at 0 HP, recording each defeat.
    pub(crate) fn sweep_defeated(&mut self) -> SmallVec<[UnitId; 4]> {
        let fallen: SmallVec<[UnitId; 4]> = self
            .units
            .values()
            .filter(|u| !u.is_alive())
            .map(|u| u.id)
            .collect();

        for id in &fallen {
            if let Some(unit) = self.remove_unit(*id) {
                self.emit(GameEvent::UnitDefeated {
                    unit: unit.id,
                    name: unit.name,
                    owner: unit.owner,
                });
            }
        }

        fallen
    }

    // === Narration ===

    /// Human-readable match narration, one line per event.
    #[must_use]
    pub fn log(&self) -> &Vector<String> {
        &self.log
    }

    /// Typed event stream.
    #[must_use]
    pub fn events(&self) -> &Vector<GameEvent> {
        &self.events
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.log.push_back(event.to_string());
        self.events.push_back(event);
    }

    // === Context ===

    #[must_use]
    pub fn catalog(&self) -> &UnitCatalog {
        &self.catalog
    }

    /// Board generation seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn wager(&self) -> Option<u64> {
        self.wager
    }

    // === Encoding ===

    /// Encode a snapshot with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
