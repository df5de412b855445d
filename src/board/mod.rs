//! Board and tile model.
//!
//! - `Board`: the square grid, row-major, with area queries
//! - `Tile`: terrain type plus an optional timed `Hazard`
//! - `HazardKind`: barrier and turret effects placed by abilities

mod grid;
mod tile;

pub use grid::Board;
pub use tile::{Hazard, HazardKind, Tile, TileKind};
