//! Tiles and the timed hazards that can sit on them.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Position};

/// Static terrain type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    #[default]
    Normal,
    /// Impassable; never holds a unit.
    Obstacle,
    /// Passable marker tile.
    Objective,
}

/// What a hazard does while it lasts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HazardKind {
    /// The tile cannot be entered by movement or deployment.
    Barrier,
    /// At end of turn, deals `damage` to each enemy of the owner standing
    /// in the eight surrounding tiles.
    Turret { damage: u32 },
}

impl HazardKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            HazardKind::Barrier => "barrier",
            HazardKind::Turret { .. } => "turret",
        }
    }
}

impl std::fmt::Display for HazardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A timed tile effect. `remaining` is at least 1 while the hazard exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hazard {
    pub kind: HazardKind,
    /// Player whose ability placed it.
    pub owner: PlayerId,
    /// Turns remaining.
    pub remaining: u32,
}

/// A single board cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub position: Position,
    pub kind: TileKind,
    pub(crate) hazard: Option<Hazard>,
}

impl Tile {
    #[must_use]
    pub fn new(position: Position, kind: TileKind) -> Self {
        Self {
            position,
            kind,
            hazard: None,
        }
    }

    /// The active hazard, if any.
    #[must_use]
    pub fn effect(&self) -> Option<&Hazard> {
        self.hazard.as_ref()
    }

    /// Turns the hazard has left; 0 when there is none.
    #[must_use]
    pub fn effect_duration(&self) -> u32 {
        self.hazard.map_or(0, |h| h.remaining)
    }

    #[must_use]
    pub fn is_obstacle(&self) -> bool {
        self.kind == TileKind::Obstacle
    }

    /// Can a unit enter or be deployed onto this tile (ignoring occupancy)?
    #[must_use]
    pub fn is_passable(&self) -> bool {
        let barrier = matches!(
            self.hazard,
            Some(Hazard {
                kind: HazardKind::Barrier,
                ..
            })
        );
        !self.is_obstacle() && !barrier
    }

    /// Set a hazard. A zero duration places nothing.
    pub(crate) fn set_hazard(&mut self, kind: HazardKind, owner: PlayerId, duration: u32) -> bool {
        if duration == 0 {
            return false;
        }
        self.hazard = Some(Hazard {
            kind,
            owner,
            remaining: duration,
        });
        true
    }

    /// Tick the hazard down one turn. Returns the hazard if it expired.
    pub(crate) fn decay(&mut self) -> Option<Hazard> {
        let hazard = self.hazard.as_mut()?;
        hazard.remaining = hazard.remaining.saturating_sub(1);
        if hazard.remaining == 0 {
            self.hazard.take()
        } else {
            None
        }
    }
}
