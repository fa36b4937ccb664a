//! A match: games played back to back with a running tally.
//!
//! `MatchSession` lets an outer caller play one game at a time and stop
//! whenever it likes; `run_match` drives it until the frontend declines
//! another game.

use tracing::info;

use super::frontend::Frontend;
use super::game::{play_game, GameResult};
use super::observer::MatchObserver;
use super::sources::{ComputerMoveSource, HumanMoveSource};
use super::tally::{MatchSummary, MatchTally};
use crate::core::{MatchConfig, Weapon};
use crate::error::Result;
use crate::rules::RuleTable;

/// Match state owned by the single driving loop.
#[derive(Clone, Debug)]
pub struct MatchSession<'t, M: Weapon> {
    table: &'t RuleTable<M>,
    config: MatchConfig,
    tally: MatchTally,
}

impl<'t, M: Weapon> MatchSession<'t, M> {
    /// Start a match with an empty tally.
    pub fn new(table: &'t RuleTable<M>, config: MatchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            table,
            config,
            tally: MatchTally::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn tally(&self) -> &MatchTally {
        &self.tally
    }

    /// Play one game and credit its winner.
    pub fn play_game<H, C>(&mut self, human: &mut H, computer: &mut C) -> Result<GameResult<M>>
    where
        H: HumanMoveSource<M> + MatchObserver<M> + ?Sized,
        C: ComputerMoveSource<M> + ?Sized,
    {
        let result = play_game(self.table, &self.config, human, computer)?;
        self.tally.record(&result);
        human.game_finished(&result, &self.tally)?;
        Ok(result)
    }

    /// Final tallies, however many games were played.
    #[must_use]
    pub fn summary(&self) -> MatchSummary {
        self.tally.summary()
    }
}

/// Play games until the frontend declines another.
///
/// At least one game is always played.
pub fn run_match<M, F, C>(
    table: &RuleTable<M>,
    config: MatchConfig,
    frontend: &mut F,
    computer: &mut C,
) -> Result<MatchSummary>
where
    M: Weapon,
    F: Frontend<M> + ?Sized,
    C: ComputerMoveSource<M> + ?Sized,
{
    let mut session = MatchSession::new(table, config)?;

    loop {
        session.play_game(frontend, computer)?;
        if !frontend.play_again()? {
            break;
        }
    }

    let summary = session.summary();
    info!(
        human = summary.human_games_won,
        computer = summary.computer_games_won,
        games = summary.games_played,
        "match finished"
    );
    frontend.match_finished(&summary)?;
    Ok(summary)
}
