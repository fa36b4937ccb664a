//! Hooks through which the engine reports progress upward.
//!
//! Every method has a default that does nothing, so a presentation layer
//! implements only what it prints. Errors (a closed stdout, say) abort the
//! match.

use super::game::GameResult;
use super::round::RoundRecord;
use super::tally::{MatchSummary, MatchTally};
use crate::core::{MatchConfig, Score, Weapon};
use crate::error::Result;

/// Receives game and match events as they happen.
pub trait MatchObserver<M: Weapon> {
    /// A new game is about to ask for its first move.
    fn game_started(&mut self, _config: &MatchConfig) -> Result<()> {
        Ok(())
    }

    /// A round was resolved. `score` already includes it.
    fn round_played(&mut self, _record: &RoundRecord<M>, _score: &Score) -> Result<()> {
        Ok(())
    }

    /// The human withdrew from the current game.
    fn game_withdrawn(&mut self, _score: &Score) -> Result<()> {
        Ok(())
    }

    /// A game ended and was added to `tally`.
    fn game_finished(&mut self, _result: &GameResult<M>, _tally: &MatchTally) -> Result<()> {
        Ok(())
    }

    /// The match is over.
    fn match_finished(&mut self, _summary: &MatchSummary) -> Result<()> {
        Ok(())
    }
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl<M: Weapon> MatchObserver<M> for NoopObserver {}
