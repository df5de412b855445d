//! Typed match events.
//!
//! Every state change the rules make is recorded as a `GameEvent`. The
//! `Display` form of an event is its line in the match narration
//! (`GameState::log`), so the two streams never drift apart.

use serde::{Deserialize, Serialize};

use crate::board::HazardKind;
use crate::core::{PlayerId, Position};
use crate::units::UnitId;

/// What dealt non-attack damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageSource {
    Ability,
    Turret,
}

impl std::fmt::Display for DamageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DamageSource::Ability => f.write_str("an ability"),
            DamageSource::Turret => f.write_str("a turret"),
        }
    }
}

/// Something that happened in a match.
///
/// Names are captured at emission time so a line stays readable after the
/// unit it mentions has been removed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    // === Setup ===

    UnitDeployed {
        unit: UnitId,
        name: String,
        owner: PlayerId,
        position: Position,
    },
    BattleStarted {
        first: PlayerId,
    },

    // === Actions ===

    UnitMoved {
        unit: UnitId,
        name: String,
        from: Position,
        to: Position,
    },
    UnitAttacked {
        attacker: UnitId,
        attacker_name: String,
        defender: UnitId,
        defender_name: String,
        damage: u32,
        remaining_hp: u32,
    },
    AbilityUsed {
        unit: UnitId,
        name: String,
        ability: String,
        target: Position,
    },

    // === Consequences ===

    UnitHealed {
        unit: UnitId,
        name: String,
        amount: u32,
        hp: u32,
    },
    UnitDamaged {
        unit: UnitId,
        name: String,
        amount: u32,
        remaining_hp: u32,
        source: DamageSource,
    },
    UnitDefeated {
        unit: UnitId,
        name: String,
        owner: PlayerId,
    },
    HazardPlaced {
        kind: HazardKind,
        position: Position,
        owner: PlayerId,
        duration: u32,
    },
    HazardExpired {
        kind: HazardKind,
        position: Position,
    },

    // === Progression ===

    TurnStarted {
        player: PlayerId,
        turn: u32,
    },
    /// `winner` is `None` on a draw.
    GameOver {
        winner: Option<PlayerId>,
    },
}

impl GameEvent {
    /// The unit the event is about, if any. For attacks, the defender.
    #[must_use]
    pub fn subject(&self) -> Option<UnitId> {
        match self {
            GameEvent::UnitDeployed { unit, .. }
            | GameEvent::UnitMoved { unit, .. }
            | GameEvent::AbilityUsed { unit, .. }
            | GameEvent::UnitHealed { unit, .. }
            | GameEvent::UnitDamaged { unit, .. }
            | GameEvent::UnitDefeated { unit, .. } => Some(*unit),
            GameEvent::UnitAttacked { defender, .. } => Some(*defender),
            GameEvent::BattleStarted { .. }
            | GameEvent::HazardPlaced { .. }
            | GameEvent::HazardExpired { .. }
            | GameEvent::TurnStarted { .. }
            | GameEvent::GameOver { .. } => None,
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::UnitDeployed { name, owner, position, .. } => {
                write!(f, "{owner} deployed {name} at {position}")
            }
            GameEvent::BattleStarted { first } => write!(f, "Battle started. {first} acts first"),
            GameEvent::UnitMoved { name, from, to, .. } => {
                write!(f, "{name} moved from {from} to {to}")
            }
            GameEvent::UnitAttacked {
                attacker_name,
                defender_name,
                damage,
                remaining_hp,
                ..
            } => {
                write!(f, "{attacker_name} attacked {defender_name} for {damage} damage")?;
                write!(f, " ({remaining_hp} HP left)")
            }
            GameEvent::AbilityUsed { name, ability, target, .. } => {
                write!(f, "{name} used {ability} on {target}")
            }
            GameEvent::UnitHealed { name, amount, hp, .. } => {
                write!(f, "{name} recovered {amount} HP ({hp} HP)")
            }
            GameEvent::UnitDamaged {
                name,
                amount,
                remaining_hp,
                source,
                ..
            } => write!(f, "{name} took {amount} damage from {source} ({remaining_hp} HP left)"),
            GameEvent::UnitDefeated { name, owner, .. } => {
                write!(f, "{name} ({owner}) was defeated")
            }
            GameEvent::HazardPlaced {
                kind,
                position,
                owner,
                duration,
            } => write!(f, "{owner} placed a {kind} at {position} for {duration} turns"),
            GameEvent::HazardExpired { kind, position } => {
                write!(f, "The {kind} at {position} expired")
            }
            GameEvent::TurnStarted { player, turn } => write!(f, "Turn {turn}: {player} to act"),
            GameEvent::GameOver { winner: Some(winner) } => write!(f, "{winner} wins"),
            GameEvent::GameOver { winner: None } => f.write_str("The match ended in a draw"),
        }
    }
}
