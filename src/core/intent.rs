//! Player intents: the unit of input to the engine.
//!
//! Every state change in a match is caused by exactly one intent. Recording
//! the intents in order, together with the `MatchConfig`, is enough to
//! reproduce the match.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::position::Position;
use crate::units::{TemplateId, UnitId};

/// A single player intent.
///
/// ## Example
///
/// ```
/// use tactics_core::core::{Intent, Position};
/// use tactics_core::units::UnitId;
///
/// let advance = Intent::Move { unit: UnitId::new(1), to: Position::new(1, 4) };
/// assert!(advance.acting_unit().is_some());
/// assert!(Intent::EndTurn.acting_unit().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Place a unit from the catalog.
    Deploy {
        template: TemplateId,
        owner: PlayerId,
        position: Position,
    },

    /// Leave placement and begin combat.
    StartBattle,

    /// Select a unit (fills the possible-move/attack/target sets).
    Select { unit: UnitId },

    /// Move a unit.
    Move { unit: UnitId, to: Position },

    /// Attack the unit on a tile.
    Attack { unit: UnitId, target: Position },

    /// Use a unit's ability on a tile.
    UseAbility { unit: UnitId, target: Position },

    /// Finish the current player's turn.
    EndTurn,
}

impl Intent {
    /// The unit performing this intent, if any.
    #[must_use]
    pub fn acting_unit(&self) -> Option<UnitId> {
        match self {
            Intent::Select { unit }
            | Intent::Move { unit, .. }
            | Intent::Attack { unit, .. }
            | Intent::UseAbility { unit, .. } => Some(*unit),
            Intent::Deploy { .. } | Intent::StartBattle | Intent::EndTurn => None,
        }
    }

    /// The tile a combat intent aims at.
    #[must_use]
    pub fn target(&self) -> Option<Position> {
        match self {
            Intent::Move { to, .. } => Some(*to),
            Intent::Attack { target, .. } | Intent::UseAbility { target, .. } => Some(*target),
            Intent::Deploy { .. }
            | Intent::StartBattle
            | Intent::Select { .. }
            | Intent::EndTurn => None,
        }
    }

    /// Does this intent belong to the setup phases?
    #[must_use]
    pub fn is_setup(&self) -> bool {
        matches!(self, Intent::Deploy { .. } | Intent::StartBattle)
    }
}

/// A recorded intent with metadata for replay and audit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRecord {
    /// The seat that submitted the intent.
    pub seat: PlayerId,

    /// The intent submitted.
    pub intent: Intent,

    /// Turn number when the intent was applied.
    pub turn: u32,

    /// Sequence number across the whole match.
    pub sequence: u32,
}

impl IntentRecord {
    /// Create a new intent record.
    #[must_use]
    pub fn new(seat: PlayerId, intent: Intent, turn: u32, sequence: u32) -> Self {
        Self {
            seat,
            intent,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acting_unit() {
        let unit = UnitId::new(3);
        assert_eq!(Intent::Select { unit }.acting_unit(), Some(unit));
        assert_eq!(
            Intent::Attack { unit, target: Position::new(0, 0) }.acting_unit(),
            Some(unit)
        );
        assert_eq!(Intent::StartBattle.acting_unit(), None);
    }

    #[test]
    fn test_is_setup() {
        let deploy = Intent::Deploy {
            template: TemplateId::new("bulwark"),
            owner: PlayerId::ONE,
            position: Position::new(1, 6),
        };
        assert!(deploy.is_setup());
        assert!(Intent::StartBattle.is_setup());
        assert!(!Intent::EndTurn.is_setup());
    }

    #[test]
    fn test_record_serialization() {
        let record = IntentRecord::new(
            PlayerId::TWO,
            Intent::UseAbility {
                unit: UnitId::new(2),
                target: Position::new(4, 4),
            },
            3,
            17,
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: IntentRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
