//! Grid coordinates and distance metrics.
//!
//! Coordinates are signed so that a caller-supplied `(x, y)` outside the
//! board is representable and can be rejected, rather than wrapping.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A cell on the board. `(0, 0)` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan (taxicab) distance.
    ///
    /// ```
    /// use tactics_core::core::Position;
    ///
    /// assert_eq!(Position::new(1, 6).manhattan(Position::new(1, 4)), 2);
    /// assert_eq!(Position::new(0, 0).manhattan(Position::new(2, 3)), 5);
    /// ```
    #[must_use]
    pub fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Chebyshev (king-move) distance.
    #[must_use]
    pub fn chebyshev(self, other: Position) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// The eight surrounding cells, unclipped.
    #[must_use]
    pub fn neighbours(self) -> SmallVec<[Position; 8]> {
        let mut out = SmallVec::new();
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx != 0 || dy != 0 {
                    out.push(Position::new(self.x + dx, self.y + dy));
                }
            }
        }
        out
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Distance metric used to shape an area on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    /// Diamond-shaped areas: movement, attack and ability ranges.
    Manhattan,
    /// Square areas: blast radii.
    Chebyshev,
}

impl Metric {
    /// Distance between two positions under this metric.
    #[must_use]
    pub fn distance(self, a: Position, b: Position) -> u32 {
        match self {
            Metric::Manhattan => a.manhattan(b),
            Metric::Chebyshev => a.chebyshev(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distances() {
        let a = Position::new(2, 2);
        let b = Position::new(4, 3);
        assert_eq!(a.manhattan(b), 3);
        assert_eq!(a.chebyshev(b), 2);
        assert_eq!(Metric::Manhattan.distance(a, b), 3);
        assert_eq!(Metric::Chebyshev.distance(a, b), 2);
    }

    #[test]
    fn test_neighbours() {
        let n = Position::new(0, 0).neighbours();
        assert_eq!(n.len(), 8);
        assert!(!n.contains(&Position::new(0, 0)));
        assert!(n.contains(&Position::new(-1, -1)));
        assert!(n.contains(&Position::new(1, 1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Position::new(3, 7)), "(3, 7)");
    }
}
