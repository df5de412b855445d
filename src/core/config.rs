//! Match configuration.
//!
//! Hosts describe a match with a `MatchConfig` and turn it into the initial
//! `GameState` with `build`:
//! - grid size and the two seated players (from the lobby)
//! - how many obstacle and objective tiles to scatter, and the seed to use
//! - tiles whose terrain is fixed regardless of the seed
//! - the unit catalog deployments are drawn from
//! - the wager, carried as read-only context

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};
use super::player::{Player, PlayerId, PlayerMap};
use super::position::Position;
use super::rng::GameRng;
use super::state::GameState;
use crate::board::{Board, TileKind};
use crate::units::UnitCatalog;

/// Largest supported board edge.
pub const MAX_GRID_SIZE: i32 = 64;

/// Complete match configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Board edge length; the board has `grid_size²` tiles.
    pub grid_size: i32,

    /// Seated players, indexed by seat.
    pub players: PlayerMap<Player>,

    /// Obstacle tiles to scatter at setup.
    pub obstacles: usize,

    /// Objective tiles to scatter at setup.
    pub objectives: usize,

    /// Tiles with a fixed terrain type, applied after scattering.
    pub fixed_tiles: Vec<(Position, TileKind)>,

    /// Seed for board generation.
    pub seed: u64,

    /// Archetypes available for deployment.
    pub catalog: UnitCatalog,

    /// Stake agreed in the lobby. The engine never reads it.
    pub wager: Option<u64>,
}

impl MatchConfig {
    /// Create a configuration with default seats, an open board, and the
    /// standard catalog.
    pub fn new(grid_size: i32) -> Self {
        Self {
            grid_size,
            players: PlayerMap::new(|seat| {
                Player::new(seat, format!("player{}", seat.index() + 1), seat.to_string())
            }),
            obstacles: 0,
            objectives: 0,
            fixed_tiles: Vec::new(),
            seed: 0,
            catalog: UnitCatalog::standard(),
            wager: None,
        }
    }

    /// Seat a player.
    #[must_use]
    pub fn with_player(
        mut self,
        seat: PlayerId,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        if seat.is_valid() {
            self.players[seat] = Player::new(seat, id, name);
        }
        self
    }

    /// Scatter this many obstacle tiles.
    #[must_use]
    pub fn with_obstacles(mut self, count: usize) -> Self {
        self.obstacles = count;
        self
    }

    /// Scatter this many objective tiles.
    #[must_use]
    pub fn with_objectives(mut self, count: usize) -> Self {
        self.objectives = count;
        self
    }

    /// Pin the terrain of one tile.
    #[must_use]
    pub fn with_tile(mut self, position: Position, kind: TileKind) -> Self {
        self.fixed_tiles.push((position, kind));
        self
    }

    /// Set the board generation seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the unit catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: UnitCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Record the lobby wager.
    #[must_use]
    pub fn with_wager(mut self, amount: u64) -> Self {
        self.wager = Some(amount);
        self
    }

    /// Check the configuration without building a state.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(EngineError::InvalidGridSize {
                size: self.grid_size,
                max: MAX_GRID_SIZE,
            });
        }

        let available = (self.grid_size * self.grid_size) as usize;
        let requested = self.obstacles + self.objectives;
        if requested > available {
            return Err(EngineError::InvalidLayout { requested, available });
        }

        let on_grid = |p: &Position| {
            (0..self.grid_size).contains(&p.x) && (0..self.grid_size).contains(&p.y)
        };
        if let Some((position, _)) = self.fixed_tiles.iter().find(|(p, _)| !on_grid(p)) {
            return Err(EngineError::OutOfBounds {
                position: *position,
                grid_size: self.grid_size,
            });
        }

        Ok(())
    }

    /// Build the initial game state: generated board, empty rosters,
    /// `phase = draft`, player one to act, turn 1.
    pub fn build(&self) -> Result<GameState> {
        self.validate()?;

        let rng = GameRng::new(self.seed);
        let mut board = Board::generate(
            self.grid_size,
            self.obstacles,
            self.objectives,
            &mut rng.for_context("board"),
        );
        for (position, kind) in &self.fixed_tiles {
            board.set_kind(*position, *kind);
        }

        log::debug!(
            "building {}x{} match (seed {}, {} obstacles, {} objectives)",
            self.grid_size,
            self.grid_size,
            self.seed,
            self.obstacles,
            self.objectives
        );

        Ok(GameState::new(
            board,
            self.players.clone(),
            self.catalog.clone(),
            self.seed,
            self.wager,
        ))
    }
}
