//! Unit catalog for archetype lookup.
//!
//! The `UnitCatalog` stores every archetype a match may deploy. It is held
//! inside `GameState`, so a recorded match replays against exactly the
//! templates it was played with.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use super::ability::Ability;
use super::archetype::{Archetype, Stats, TemplateId};
use crate::core::{EngineError, Result};
use crate::effects::{AbilityEffect, TargetKind};

/// Registry of archetypes keyed by `TemplateId`.
///
/// ## Example
///
/// ```
/// use tactics_core::units::{TemplateId, UnitCatalog};
///
/// let catalog = UnitCatalog::standard();
/// let bulwark = catalog.get(&TemplateId::new("bulwark")).unwrap();
/// assert_eq!(bulwark.stats.movement, 2);
/// assert_eq!(bulwark.stats.range, 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCatalog {
    archetypes: OrdMap<TemplateId, Archetype>,
}

impl UnitCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The reference rule set.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for archetype in standard_archetypes() {
            catalog.archetypes.insert(archetype.template_id.clone(), archetype);
        }
        catalog
    }

    /// Register an archetype. Template IDs must be unique, and a unit must
    /// deploy with at least one HP and one action point.
    pub fn register(&mut self, archetype: Archetype) -> Result<()> {
        if self.archetypes.contains_key(&archetype.template_id) {
            return Err(EngineError::DuplicateTemplate(archetype.template_id));
        }
        let reason = if archetype.stats.max_hp == 0 {
            Some("max_hp must be at least 1")
        } else if archetype.stats.action_points == 0 {
            Some("action_points must be at least 1")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(EngineError::InvalidArchetype {
                template: archetype.template_id,
                reason,
            });
        }
        self.archetypes.insert(archetype.template_id.clone(), archetype);
        Ok(())
    }

    /// Register an archetype (builder pattern).
    pub fn with(mut self, archetype: Archetype) -> Result<Self> {
        self.register(archetype)?;
        Ok(self)
    }

    #[must_use]
    pub fn get(&self, id: &TemplateId) -> Option<&Archetype> {
        self.archetypes.get(id)
    }

    /// Look up an archetype, failing on unknown IDs.
    pub fn require(&self, id: &TemplateId) -> Result<&Archetype> {
        self.get(id).ok_or_else(|| EngineError::UnknownTemplate(id.clone()))
    }

    #[must_use]
    pub fn contains(&self, id: &TemplateId) -> bool {
        self.archetypes.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }

    /// Iterate over archetypes in template ID order.
    pub fn iter(&self) -> impl Iterator<Item = &Archetype> {
        self.archetypes.values()
    }
}

fn standard_archetypes() -> [Archetype; 6] {
    [
        Archetype::new(
            "bulwark",
            "Bulwark",
            Stats {
                max_hp: 10,
                movement: 2,
                attack: 2,
                range: 1,
                action_points: 3,
            },
            Ability::new(
                "Shield Wall",
                TargetKind::Tile,
                2,
                3,
                AbilityEffect::Barrier { duration: 2 },
            )
                .with_description("Raises a barrier that blocks a tile for two turns."),
        ),
        Archetype::new(
            "berserker",
            "Berserker",
            Stats {
                max_hp: 8,
                movement: 3,
                attack: 3,
                range: 1,
                action_points: 3,
            },
            Ability::new("Cleave", TargetKind::Enemy, 1, 2, AbilityEffect::Strike { damage: 4 })
                .with_description("A heavy blow against an adjacent enemy."),
        ),
        Archetype::new(
            "medic",
            "Medic",
            Stats {
                max_hp: 6,
                movement: 3,
                attack: 1,
                range: 2,
                action_points: 3,
            },
            Ability::new(
                "Field Dressing",
                TargetKind::Ally,
                2,
                2,
                AbilityEffect::Heal { amount: 3 },
            )
                .with_description("Restores 3 HP to a nearby ally."),
        ),
        Archetype::new(
            "engineer",
            "Engineer",
            Stats {
                max_hp: 7,
                movement: 2,
                attack: 2,
                range: 2,
                action_points: 3,
            },
            Ability::new(
                "Sentry Turret",
                TargetKind::Tile,
                2,
                4,
                AbilityEffect::Turret {
                    duration: 3,
                    damage: 1,
                },
            )
            .with_description("Builds a turret that shoots adjacent enemies at each turn end."),
        ),
        Archetype::new(
            "grenadier",
            "Grenadier",
            Stats {
                max_hp: 7,
                movement: 2,
                attack: 2,
                range: 3,
                action_points: 3,
            },
            Ability::new(
                "Grenade",
                TargetKind::Area,
                3,
                3,
                AbilityEffect::AreaDamage { damage: 2, radius: 1 },
            )
            .with_description("Damages every unit in a 3x3 blast, friend or foe."),
        ),
        Archetype::new(
            "scout",
            "Scout",
            Stats {
                max_hp: 5,
                movement: 4,
                attack: 2,
                range: 2,
                action_points: 3,
            },
            Ability::new("Second Wind", TargetKind::Self_, 0, 3, AbilityEffect::Heal { amount: 2 })
                .with_description("Patches up the scout's own wounds."),
        ),
    ]
}
