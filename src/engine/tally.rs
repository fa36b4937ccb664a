//! Running tally of games across a match.
//!
//! Lives for one process run; nothing is persisted.

use serde::{Deserialize, Serialize};

use super::game::GameResult;
use crate::core::{Side, SideMap};

/// Games won by each side so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTally {
    games_won: SideMap<u32>,
}

impl MatchTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit a finished game to its winner.
    pub fn record<M>(&mut self, result: &GameResult<M>) {
        self.games_won[result.winner] += 1;
    }

    #[must_use]
    pub fn games_won(&self, side: Side) -> u32 {
        self.games_won[side]
    }

    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.games_won.human + self.games_won.computer
    }

    #[must_use]
    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            human_games_won: self.games_won.human,
            computer_games_won: self.games_won.computer,
            games_played: self.games_played(),
        }
    }
}

/// Final tallies, produced when the match ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub human_games_won: u32,
    pub computer_games_won: u32,
    pub games_played: u32,
}

impl MatchSummary {
    /// Side with more games, `None` when level.
    #[must_use]
    pub fn leader(&self) -> Option<Side> {
        match self.human_games_won.cmp(&self.computer_games_won) {
            std::cmp::Ordering::Greater => Some(Side::Human),
            std::cmp::Ordering::Less => Some(Side::Computer),
            std::cmp::Ordering::Equal => None,
        }
    }
}
