//! The human's side of the table as one collaborator.
//!
//! A console reads moves, answers "play again" and prints results through
//! the same handles, so the engine takes it as a single `&mut`. Sources that
//! live apart are combined with `SplitFrontend`.

use super::game::GameResult;
use super::observer::{MatchObserver, NoopObserver};
use super::round::RoundRecord;
use super::sources::{HumanChoice, HumanMoveSource, PlayAgainSource};
use super::tally::{MatchSummary, MatchTally};
use crate::core::{MatchConfig, Score, Weapon};
use crate::error::Result;

/// Human moves, play-again decisions and result reporting.
pub trait Frontend<M: Weapon>: HumanMoveSource<M> + PlayAgainSource + MatchObserver<M> {}

impl<M, T> Frontend<M> for T
where
    M: Weapon,
    T: HumanMoveSource<M> + PlayAgainSource + MatchObserver<M> + ?Sized,
{
}

/// A `Frontend` assembled from three separate parts.
#[derive(Clone, Debug, Default)]
pub struct SplitFrontend<H, A, O = NoopObserver> {
    pub human: H,
    pub play_again: A,
    pub observer: O,
}

impl<H, A> SplitFrontend<H, A> {
    /// Parts with a silent observer.
    pub fn new(human: H, play_again: A) -> Self {
        Self {
            human,
            play_again,
            observer: NoopObserver,
        }
    }
}

impl<H, A, O> SplitFrontend<H, A, O> {
    /// Replace the observer.
    pub fn with_observer<P>(self, observer: P) -> SplitFrontend<H, A, P> {
        SplitFrontend {
            human: self.human,
            play_again: self.play_again,
            observer,
        }
    }
}

impl<M: Weapon, H: HumanMoveSource<M>, A, O> HumanMoveSource<M> for SplitFrontend<H, A, O> {
    fn next_choice(&mut self) -> Result<HumanChoice<M>> {
        self.human.next_choice()
    }
}

impl<H, A: PlayAgainSource, O> PlayAgainSource for SplitFrontend<H, A, O> {
    fn play_again(&mut self) -> Result<bool> {
        self.play_again.play_again()
    }
}

impl<M: Weapon, H, A, O: MatchObserver<M>> MatchObserver<M> for SplitFrontend<H, A, O> {
    fn game_started(&mut self, config: &MatchConfig) -> Result<()> {
        self.observer.game_started(config)
    }

    fn round_played(&mut self, record: &RoundRecord<M>, score: &Score) -> Result<()> {
        self.observer.round_played(record, score)
    }

    fn game_withdrawn(&mut self, score: &Score) -> Result<()> {
        self.observer.game_withdrawn(score)
    }

    fn game_finished(&mut self, result: &GameResult<M>, tally: &MatchTally) -> Result<()> {
        self.observer.game_finished(result, tally)
    }

    fn match_finished(&mut self, summary: &MatchSummary) -> Result<()> {
        self.observer.match_finished(summary)
    }
}
