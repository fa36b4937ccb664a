//! The two sides of a match and per-side storage.
//!
//! ## Side
//!
//! `Human` or `Computer`. Every score and tally in the engine is keyed by
//! `Side`.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`, used for round scores and game
//! tallies alike.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Human,
    Computer,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Side::Human => "Human",
            Side::Computer => "Computer",
        })
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use rpsls::core::{Side, SideMap};
///
/// let mut wins: SideMap<u32> = SideMap::default();
/// wins[Side::Human] += 1;
///
/// assert_eq!(wins[Side::Human], 1);
/// assert_eq!(wins[Side::Computer], 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    pub human: T,
    pub computer: T,
}

impl<T> SideMap<T> {
    /// Create from explicit per-side values.
    pub const fn new(human: T, computer: T) -> Self {
        Self { human, computer }
    }

    /// Get a reference to a side's value.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        }
    }

    /// Get a mutable reference to a side's value.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Human => &mut self.human,
            Side::Computer => &mut self.computer,
        }
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

/// Rounds won by each side within one game.
pub type Score = SideMap<u8>;
