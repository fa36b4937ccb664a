//! Move vocabulary.
//!
//! ## Weapon
//!
//! A `Weapon` is any fixed, ordered, enumerated set of moves. The rule table
//! and the match engine are written against this trait, so a larger variant
//! only needs a new enum and a new table.
//!
//! ## Move
//!
//! The canonical five-move set: Rock, Paper, Scissors, Lizard, Spock.
//!
//! ```
//! use rpsls::core::{Move, Weapon};
//!
//! assert_eq!(Move::ALL.len(), 5);
//! assert_eq!(Move::Lizard.index(), 3);
//! assert_eq!(Move::from_selection(1).unwrap(), Move::Rock);
//! assert!(Move::from_selection(6).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

use crate::error::{GameError, Result};

/// A fixed, ordered set of moves.
///
/// `ALL` lists every move exactly once; `index()` is the position of a move
/// in `ALL`.
pub trait Weapon: Copy + Eq + Hash + fmt::Debug + fmt::Display + 'static {
    /// Every move, in menu order.
    const ALL: &'static [Self];

    /// Position of this move in `ALL` (0-based).
    fn index(self) -> usize;

    /// Move at a 0-based position, if any.
    #[must_use]
    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Move for a 1-based menu selection.
    ///
    /// Selections outside `1..=ALL.len()` are `GameError::InvalidMove`.
    fn from_selection(selection: usize) -> Result<Self> {
        selection
            .checked_sub(1)
            .and_then(Self::from_index)
            .ok_or_else(|| GameError::invalid_move(selection))
    }

    /// Number of moves in the set.
    #[must_use]
    fn count() -> usize {
        Self::ALL.len()
    }
}

/// Rock, Paper, Scissors, Lizard, Spock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

impl Move {
    /// Name as shown in prompts and result lines.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
            Move::Lizard => "Lizard",
            Move::Spock => "Spock",
        }
    }
}

impl Weapon for Move {
    const ALL: &'static [Self] = &[
        Move::Rock,
        Move::Paper,
        Move::Scissors,
        Move::Lizard,
        Move::Spock,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
