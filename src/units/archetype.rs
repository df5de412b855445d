//! Archetypes - static unit templates.
//!
//! An `Archetype` holds the unchanging data of a unit type: base stats and
//! its ability. Deploying one deep-copies it into a `Unit` with a fresh
//! `UnitId`; the `TemplateId` stays on the unit only as a reference back to
//! the catalog.

use serde::{Deserialize, Serialize};

use super::ability::Ability;
use super::unit::{Unit, UnitId};
use crate::core::PlayerId;

/// Catalog key of an archetype, e.g. `"bulwark"`.
///
/// Not unique per unit: a player may field several units of one archetype.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub String);

impl TemplateId {
    /// Create a new template ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TemplateId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Base combat stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    pub max_hp: u32,
    /// Tiles per move.
    pub movement: u32,
    /// Flat damage per attack.
    pub attack: u32,
    /// Attack range in tiles.
    pub range: u32,
    pub action_points: u32,
}

/// Static unit template.
///
/// ## Example
///
/// ```
/// use tactics_core::core::PlayerId;
/// use tactics_core::effects::{AbilityEffect, TargetKind};
/// use tactics_core::units::{Ability, Archetype, Stats, UnitId};
///
/// let sentry = Archetype::new(
///     "sentry",
///     "Sentry",
///     Stats { max_hp: 6, movement: 1, attack: 2, range: 3, action_points: 2 },
///     Ability::new("Overwatch", TargetKind::Enemy, 3, 2, AbilityEffect::Strike { damage: 2 }),
/// );
///
/// let unit = sentry.instantiate(UnitId::new(7), PlayerId::TWO);
/// assert_eq!(unit.hp, 6);
/// assert!(unit.position.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Archetype {
    pub template_id: TemplateId,
    pub name: String,
    pub stats: Stats,
    pub ability: Ability,
}

impl Archetype {
    #[must_use]
    pub fn new(
        template_id: impl Into<TemplateId>,
        name: impl Into<String>,
        stats: Stats,
        ability: Ability,
    ) -> Self {
        Self {
            template_id: template_id.into(),
            name: name.into(),
            stats,
            ability,
        }
    }

    /// Create a fresh, unplaced unit from this template.
    #[must_use]
    pub fn instantiate(&self, id: UnitId, owner: PlayerId) -> Unit {
        let mut ability = self.ability.clone();
        ability.current_cooldown = 0;

        Unit {
            id,
            template_id: self.template_id.clone(),
            name: self.name.clone(),
            hp: self.stats.max_hp,
            max_hp: self.stats.max_hp,
            movement: self.stats.movement,
            attack: self.stats.attack,
            range: self.stats.range,
            action_points: self.stats.action_points,
            max_action_points: self.stats.action_points,
            ability,
            owner,
            position: None,
            has_moved: false,
            has_attacked: false,
            has_used_ability: false,
        }
    }
}
