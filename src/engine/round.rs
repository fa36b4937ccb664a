//! Single-round resolution.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Side, Weapon};
use crate::rules::RuleTable;

/// Outcome of one round, from the human's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    HumanWins,
    ComputerWins,
    Draw,
}

impl RoundOutcome {
    /// Side that took the round, `None` on a draw.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            RoundOutcome::HumanWins => Some(Side::Human),
            RoundOutcome::ComputerWins => Some(Side::Computer),
            RoundOutcome::Draw => None,
        }
    }

    /// The same round seen with the sides swapped.
    #[must_use]
    pub const fn swapped(self) -> Self {
        match self {
            RoundOutcome::HumanWins => RoundOutcome::ComputerWins,
            RoundOutcome::ComputerWins => RoundOutcome::HumanWins,
            RoundOutcome::Draw => RoundOutcome::Draw,
        }
    }
}

/// Both moves of a round and how it ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord<M> {
    pub human: M,
    pub computer: M,
    pub outcome: RoundOutcome,
}

impl<M: Weapon> RoundRecord<M> {
    /// The move that won the round, if any.
    #[must_use]
    pub fn winning_move(&self) -> Option<M> {
        self.outcome.winner().map(|side| match side {
            Side::Human => self.human,
            Side::Computer => self.computer,
        })
    }

    /// The move that lost the round, if any.
    #[must_use]
    pub fn losing_move(&self) -> Option<M> {
        self.outcome.winner().map(|side| match side {
            Side::Human => self.computer,
            Side::Computer => self.human,
        })
    }
}

/// Resolve one round.
///
/// Equal moves draw. Otherwise the relation decides: if the human's move
/// does not beat the computer's, the computer's beats the human's, because
/// the table is a complete tournament.
#[must_use]
pub fn resolve_round<M: Weapon>(table: &RuleTable<M>, human: M, computer: M) -> RoundOutcome {
    let outcome = if human == computer {
        RoundOutcome::Draw
    } else if table.beats(human, computer) {
        RoundOutcome::HumanWins
    } else {
        RoundOutcome::ComputerWins
    };

    debug!(%human, %computer, ?outcome, "round resolved");
    outcome
}
