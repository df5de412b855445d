//! Deployed units - runtime combat state.
//!
//! A `Unit` is one archetype instance on the board. Its identity is the
//! `UnitId` assigned at deployment, never the `(template, owner)` pair.

use serde::{Deserialize, Serialize};

use super::ability::Ability;
use super::archetype::TemplateId;
use crate::core::{PlayerId, Position};

/// Per-deployment unit identifier, unique within a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl UnitId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unit({})", self.0)
    }
}

/// A unit in play.
///
/// Invariants: `hp <= max_hp` and `action_points <= max_action_points`.
/// A unit at `hp == 0` is removed from the match by the resolver that
/// brought it down.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    /// Archetype this unit was copied from.
    pub template_id: TemplateId,
    pub name: String,

    pub hp: u32,
    pub max_hp: u32,
    /// Tiles per move.
    pub movement: u32,
    pub attack: u32,
    pub range: u32,
    pub action_points: u32,
    pub max_action_points: u32,

    pub ability: Ability,
    pub owner: PlayerId,
    /// `None` until placed.
    pub position: Option<Position>,

    pub has_moved: bool,
    pub has_attacked: bool,
    pub has_used_ability: bool,
}

impl Unit {
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    #[must_use]
    pub fn is_enemy_of(&self, other: &Unit) -> bool {
        self.owner != other.owner
    }

    /// Spend one action point. Returns false if none are left.
    pub(crate) fn spend_action_point(&mut self) -> bool {
        if self.action_points == 0 {
            return false;
        }
        self.action_points -= 1;
        true
    }

    /// Lose HP, clamped at 0. Returns the damage actually taken.
    pub(crate) fn take_damage(&mut self, amount: u32) -> u32 {
        let dealt = amount.min(self.hp);
        self.hp -= dealt;
        dealt
    }

    /// Regain HP, capped at `max_hp`. Returns the HP actually restored.
    pub(crate) fn heal(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.max_hp - self.hp);
        self.hp += restored;
        restored
    }

    /// End-of-turn upkeep: clear the action flags, refill action points,
    /// and tick the ability cooldown.
    pub(crate) fn refresh(&mut self) {
        self.has_moved = false;
        self.has_attacked = false;
        self.has_used_ability = false;
        self.action_points = self.max_action_points;
        self.ability.tick_cooldown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::UnitCatalog;

    fn berserker() -> Unit {
        UnitCatalog::standard()
            .get(&TemplateId::new("berserker"))
            .unwrap()
            .instantiate(UnitId::new(1), PlayerId::TWO)
    }

    #[test]
    fn test_take_damage_clamps() {
        let mut unit = berserker();
        let hp = unit.hp;

        assert_eq!(unit.take_damage(3), 3);
        assert_eq!(unit.hp, hp - 3);

        assert_eq!(unit.take_damage(100), hp - 3);
        assert_eq!(unit.hp, 0);
        assert!(!unit.is_alive());
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut unit = berserker();
        unit.take_damage(1);

        assert_eq!(unit.heal(3), 1);
        assert_eq!(unit.hp, unit.max_hp);
    }

    #[test]
    fn test_spend_action_point() {
        let mut unit = berserker();
        unit.action_points = 1;

        assert!(unit.spend_action_point());
        assert!(!unit.spend_action_point());
        assert_eq!(unit.action_points, 0);
    }

    #[test]
    fn test_refresh() {
        let mut unit = berserker();
        unit.has_moved = true;
        unit.has_attacked = true;
        unit.has_used_ability = true;
        unit.action_points = 0;
        unit.ability.trigger_cooldown();
        let cooldown = unit.ability.cooldown;

        unit.refresh();

        assert!(!unit.has_moved && !unit.has_attacked && !unit.has_used_ability);
        assert_eq!(unit.action_points, unit.max_action_points);
        assert_eq!(unit.ability.current_cooldown, cooldown - 1);
    }

    #[test]
    fn test_unit_id_display() {
        assert_eq!(format!("{}", UnitId::new(42)), "Unit(42)");
    }
}
