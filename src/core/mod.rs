//! Core engine types: seats, positions, state, intents, RNG, configuration.
//!
//! This module holds the building blocks shared by every resolver. Matches
//! are described by a `MatchConfig` and live as `GameState` values.

pub mod config;
pub mod error;
pub mod intent;
pub mod player;
pub mod position;
pub mod rng;
pub mod state;

pub use config::{MatchConfig, MAX_GRID_SIZE};
pub use error::{EngineError, Result};
pub use intent::{Intent, IntentRecord};
pub use player::{Player, PlayerId, PlayerMap, SEAT_COUNT};
pub use position::{Metric, Position};
pub use rng::GameRng;
pub use state::{GameState, Phase, Selection};
