//! Ability effect definitions.
//!
//! The effect set is closed: every ability in the catalog resolves to one of
//! these variants, and the resolver matches on them exhaustively.

use serde::{Deserialize, Serialize};

use crate::board::HazardKind;

/// What an ability does to its target.
///
/// ## Unit Effects
///
/// Require a unit on the target tile:
/// - `Heal`: restore HP, capped at max HP
/// - `Strike`: single-target damage
///
/// ## Tile Effects
///
/// Place a timed hazard on the target tile:
/// - `Barrier`: blocks the tile for movement and deployment
/// - `Turret`: damages adjacent enemies of its owner at end of turn
///
/// ## Area Effects
///
/// - `AreaDamage`: damage to every unit in a square around the target,
///   allies included
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityEffect {
    Heal { amount: u32 },
    Barrier { duration: u32 },
    Turret { duration: u32, damage: u32 },
    /// `radius` is a Chebyshev distance: radius 1 is the 3x3 square.
    AreaDamage { damage: u32, radius: u32 },
    Strike { damage: u32 },
}

impl AbilityEffect {
    /// Does the effect need a unit standing on the target tile?
    #[must_use]
    pub fn requires_unit(self) -> bool {
        matches!(self, AbilityEffect::Heal { .. } | AbilityEffect::Strike { .. })
    }

    /// The hazard this effect places, with its duration.
    #[must_use]
    pub fn hazard(self) -> Option<(HazardKind, u32)> {
        match self {
            AbilityEffect::Barrier { duration } => Some((HazardKind::Barrier, duration)),
            AbilityEffect::Turret { duration, damage } => {
                Some((HazardKind::Turret { damage }, duration))
            }
            AbilityEffect::Heal { .. }
            | AbilityEffect::AreaDamage { .. }
            | AbilityEffect::Strike { .. } => None,
        }
    }
}
