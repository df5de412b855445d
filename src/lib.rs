//! # tactics-core
//!
//! A deterministic rules engine for turn-based tactical combat on a square
//! grid: unit placement, movement, attacks, abilities, timed tile hazards,
//! turn progression and victory.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not mutation**: every operation takes a `GameState` and
//!    returns a new one. State is built on `im` persistent collections, so
//!    snapshots are O(1) and history, undo and replay come for free.
//!
//! 2. **Rule violations are no-ops**: an illegal intent returns the input
//!    state unchanged. `EngineError` is reserved for programmer errors.
//!
//! 3. **Deterministic**: randomness is confined to seeded board setup. A
//!    `MatchConfig` plus the ordered intents reproduce a match exactly.
//!
//! 4. **Passive observers**: every change is recorded as a typed
//!    `GameEvent`; logging, audio and rendering subscribe to the stream and
//!    never reach into the rules.
//!
//! ## Modules
//!
//! - `core`: seats, positions, errors, intents, RNG, configuration, state
//! - `board`: tiles, terrain and hazards
//! - `units`: archetypes, the catalog and deployed units
//! - `effects`: ability effects, targeting and resolution
//! - `rules`: movement, attack, turn lifecycle and victory
//! - `events`: the event stream and subscribers
//! - `engine`: the public operation set
//! - `session`: host-side trust checks, undo and replay

pub mod board;
pub mod core;
pub mod effects;
pub mod engine;
pub mod events;
pub mod rules;
pub mod session;
pub mod units;

// Re-export commonly used types
pub use crate::core::{
    EngineError, GameRng, GameState, Intent, IntentRecord, MatchConfig, Metric, Phase, Player,
    PlayerId, PlayerMap, Position, Result, Selection,
};

pub use crate::board::{Board, Hazard, HazardKind, Tile, TileKind};

pub use crate::units::{Ability, Archetype, Stats, TemplateId, Unit, UnitCatalog, UnitId};

pub use crate::effects::{AbilityEffect, TargetKind};

pub use crate::rules::GameResult;

pub use crate::events::{DamageSource, EventRecorder, EventSubscriber, GameEvent, LogSubscriber};

pub use crate::engine::{
    add_unit_to_game, apply_intent, attack_unit, clear_selection, create_initial_game_state,
    end_turn, legal_intents, move_unit, possible_ability_targets, possible_attacks,
    possible_moves, select_tile, select_unit, start_battle, use_ability,
};

pub use crate::session::{replay, Outcome, Rejection, Session};
