//! The square board: `size × size` tiles stored row-major.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::tile::{Hazard, HazardKind, Tile, TileKind};
use crate::core::{GameRng, Metric, PlayerId, Position};

/// Board of tiles. Tile `(x, y)` lives at index `y * size + x`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: i32,
    tiles: Vector<Tile>,
}

impl Board {
    /// Create an open board of normal tiles.
    #[must_use]
    pub fn new(size: i32) -> Self {
        let tiles = (0..size)
            .flat_map(|y| (0..size).map(move |x| Tile::new(Position::new(x, y), TileKind::Normal)))
            .collect();
        Self { size, tiles }
    }

    /// Create a board with obstacles and objectives scattered by `rng`.
    ///
    /// Callers validate that `obstacles + objectives` fits on the board;
    /// any excess is dropped.
    pub fn generate(size: i32, obstacles: usize, objectives: usize, rng: &mut GameRng) -> Self {
        let mut board = Self::new(size);
        if obstacles + objectives == 0 {
            return board;
        }

        let mut cells: Vec<usize> = (0..board.tiles.len()).collect();
        rng.shuffle(&mut cells);

        let kinds = std::iter::repeat(TileKind::Obstacle)
            .take(obstacles)
            .chain(std::iter::repeat(TileKind::Objective).take(objectives));
        for (index, kind) in cells.into_iter().zip(kinds) {
            if let Some(tile) = board.tiles.get_mut(index) {
                tile.kind = kind;
            }
        }

        board
    }

    /// Edge length.
    #[must_use]
    pub fn size(&self) -> i32 {
        self.size
    }

    #[must_use]
    pub fn in_bounds(&self, position: Position) -> bool {
        (0..self.size).contains(&position.x) && (0..self.size).contains(&position.y)
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.in_bounds(position)
            .then(|| (position.y * self.size + position.x) as usize)
    }

    /// Get a tile.
    #[must_use]
    pub fn tile(&self, position: Position) -> Option<&Tile> {
        self.index(position).and_then(|i| self.tiles.get(i))
    }

    pub(crate) fn tile_mut(&mut self, position: Position) -> Option<&mut Tile> {
        let index = self.index(position)?;
        self.tiles.get_mut(index)
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Change the terrain of a tile.
    pub(crate) fn set_kind(&mut self, position: Position, kind: TileKind) -> bool {
        match self.tile_mut(position) {
            Some(tile) => {
                tile.kind = kind;
                true
            }
            None => false,
        }
    }

    /// In-bounds positions within `radius` of `center`, row-major.
    pub fn area(
        &self,
        center: Position,
        radius: u32,
        metric: Metric,
    ) -> impl Iterator<Item = Position> + '_ {
        let r = radius.min(self.size.max(0) as u32) as i32;
        (center.y - r..=center.y + r)
            .flat_map(move |y| (center.x - r..=center.x + r).map(move |x| Position::new(x, y)))
            .filter(move |p| self.in_bounds(*p) && metric.distance(center, *p) <= radius)
    }

    /// Place a hazard on a tile, replacing any hazard already there.
    pub(crate) fn place_hazard(
        &mut self,
        position: Position,
        kind: HazardKind,
        owner: PlayerId,
        duration: u32,
    ) -> bool {
        self.tile_mut(position)
            .is_some_and(|tile| tile.set_hazard(kind, owner, duration))
    }

    /// Tick every hazard down one turn. Returns the hazards that expired.
    pub(crate) fn decay_hazards(&mut self) -> Vec<(Position, Hazard)> {
        let mut expired = Vec::new();
        for tile in self.tiles.iter_mut() {
            if let Some(hazard) = tile.decay() {
                expired.push((tile.position, hazard));
            }
        }
        expired
    }

    /// Active turrets as `(position, owner, damage)`.
    #[must_use]
    pub fn turrets(&self) -> Vec<(Position, PlayerId, u32)> {
        self.tiles
            .iter()
            .filter_map(|tile| match tile.hazard {
                Some(Hazard {
                    kind: HazardKind::Turret { damage },
                    owner,
                    ..
                }) => Some((tile.position, owner, damage)),
                _ => None,
            })
            .collect()
    }
}
