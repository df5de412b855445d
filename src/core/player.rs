//! Player seats and per-seat data storage.
//!
//! ## PlayerId
//!
//! A match always has exactly two seats. `PlayerId::ONE` moves first;
//! turn numbers advance when control returns to it.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by a `Vec` for O(1) indexing by `PlayerId`.
//!
//! ## Player
//!
//! The external identity (lobby id and display name) of a seat plus the
//! roster of its live units.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::units::UnitId;

/// Number of seats in a match.
pub const SEAT_COUNT: usize = 2;

/// Seat identifier. Indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The seat that opens the match.
    pub const ONE: PlayerId = PlayerId(0);

    /// The second seat.
    pub const TWO: PlayerId = PlayerId(1);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check that this ID names one of the two seats.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        (self.0 as usize) < SEAT_COUNT
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        if self.0 == 0 {
            Self::TWO
        } else {
            Self::ONE
        }
    }

    /// Iterate over both seats in turn order.
    ///
    /// ```
    /// use tactics_core::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(seats, vec![PlayerId::ONE, PlayerId::TWO]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..SEAT_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use tactics_core::core::{PlayerId, PlayerMap};
///
/// let mut kills: PlayerMap<u32> = PlayerMap::with_value(0);
/// kills[PlayerId::TWO] += 1;
///
/// assert_eq!(kills[PlayerId::ONE], 0);
/// assert_eq!(kills[PlayerId::TWO], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::all().map(factory).collect(),
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// The seat this player occupies.
    pub seat: PlayerId,

    /// External identifier supplied by the lobby.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Live units owned by this player, in deployment order.
    ///
    /// Maintained by `GameState` alongside the master unit collection.
    pub(crate) roster: Vector<UnitId>,
}

impl Player {
    /// Create a player with an empty roster.
    #[must_use]
    pub fn new(seat: PlayerId, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            seat,
            id: id.into(),
            name: name.into(),
            roster: Vector::new(),
        }
    }

    /// Live unit IDs owned by this player.
    pub fn roster(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.roster.iter().copied()
    }

    /// Number of live units.
    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.roster.len()
    }

    /// Has this player lost every unit?
    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.roster.is_empty()
    }
}
