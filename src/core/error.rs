//! Engine errors.
//!
//! Only programmer and data errors are reported here. Rule violations
//! (illegal destination, acting out of turn, ability on cooldown) are not
//! errors: the operation returns the input state unchanged.

use thiserror::Error;

use super::{PlayerId, Position};
use crate::units::{TemplateId, UnitId};

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("grid size must be between 1 and {max}, got {size}")]
    InvalidGridSize { size: i32, max: i32 },

    #[error("layout requests {requested} special tiles but the board only has {available}")]
    InvalidLayout { requested: usize, available: usize },

    #[error("unknown unit template [{0}]")]
    UnknownTemplate(TemplateId),

    #[error("template [{0}] is already registered")]
    DuplicateTemplate(TemplateId),

    #[error("template [{template}] is unusable: {reason}")]
    InvalidArchetype {
        template: TemplateId,
        reason: &'static str,
    },

    #[error("no live unit with id {0}")]
    UnknownUnit(UnitId),

    #[error("{0} is not a seat in this match")]
    UnknownPlayer(PlayerId),

    #[error("position {position} is outside the {grid_size}x{grid_size} grid")]
    OutOfBounds { position: Position, grid_size: i32 },

    #[error("failed to encode or decode game state: {0}")]
    Codec(#[from] bincode::Error),
}
