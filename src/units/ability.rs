//! Unit abilities: a target kind, a range, a cooldown and one effect.

use serde::{Deserialize, Serialize};

use crate::effects::{AbilityEffect, TargetKind};

/// A unit's special ability.
///
/// `current_cooldown` is 0 when the ability is ready, is set to `cooldown`
/// on use, and counts down by one at the end of each of the owner's turns.
///
/// ```
/// use tactics_core::effects::{AbilityEffect, TargetKind};
/// use tactics_core::units::Ability;
///
/// let heal = Ability::new(
///     "Field Dressing",
///     TargetKind::Ally,
///     2,
///     2,
///     AbilityEffect::Heal { amount: 3 },
/// );
/// assert!(heal.is_ready());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub description: String,
    /// Turns the ability is locked after use.
    pub cooldown: u32,
    /// Turns until usable again.
    pub current_cooldown: u32,
    pub target: TargetKind,
    /// Maximum Manhattan distance from the caster to the target tile.
    pub range: u32,
    pub effect: AbilityEffect,
}

impl Ability {
    /// Create a ready ability.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        target: TargetKind,
        range: u32,
        cooldown: u32,
        effect: AbilityEffect,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            cooldown,
            current_cooldown: 0,
            target,
            range,
            effect,
        }
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Is the ability off cooldown?
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.current_cooldown == 0
    }

    pub(crate) fn trigger_cooldown(&mut self) {
        self.current_cooldown = self.cooldown;
    }

    pub(crate) fn tick_cooldown(&mut self) {
        self.current_cooldown = self.current_cooldown.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cooldown_cycle() {
        let mut ability = Ability::new(
            "Grenade",
            TargetKind::Area,
            3,
            2,
            AbilityEffect::AreaDamage { damage: 2, radius: 1 },
        );

        ability.trigger_cooldown();
        assert_eq!(ability.current_cooldown, 2);
        assert!(!ability.is_ready());

        ability.tick_cooldown();
        ability.tick_cooldown();
        assert!(ability.is_ready());

        // Floors at zero
        ability.tick_cooldown();
        assert_eq!(ability.current_cooldown, 0);
    }
}
