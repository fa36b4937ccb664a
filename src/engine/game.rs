//! One best-of-N game as an explicit state machine.
//!
//! ## States
//!
//! ```text
//!              round won, winner < N
//!            ┌─────────────────────┐
//!            ▼                     │
//!       InProgress ────────────────┘
//!        │   │   │
//!        │   │   └─ withdraw ─────► Abandoned    (computer takes the game)
//!        │   └───── human hits N ─► HumanWon
//!        └───────── computer hits N ► ComputerWon
//! ```
//!
//! `InProgress` is the only non-terminal state. A draw changes nothing.
//! A withdrawal concedes the game even when the human leads on rounds.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use super::observer::MatchObserver;
use super::round::{resolve_round, RoundRecord};
use super::sources::{ComputerMoveSource, HumanChoice, HumanMoveSource};
use crate::core::{MatchConfig, Score, Side, Weapon};
use crate::error::{GameError, Result};
use crate::rules::RuleTable;

/// Rounds kept inline before spilling to the heap.
type RoundHistory<M> = SmallVec<[RoundRecord<M>; 4]>;

/// Where a game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    HumanWon,
    ComputerWon,
    Abandoned,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Winner of a terminal game. An abandoned game goes to the computer.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::HumanWon => Some(Side::Human),
            GameStatus::ComputerWon | GameStatus::Abandoned => Some(Side::Computer),
        }
    }

    const fn won_by(side: Side) -> Self {
        match side {
            Side::Human => GameStatus::HumanWon,
            Side::Computer => GameStatus::ComputerWon,
        }
    }
}

/// Final record of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult<M> {
    /// Round score when the game ended.
    pub score: Score,
    pub winner: Side,
    /// True if the human withdrew.
    pub abandoned: bool,
    /// Every round played, draws included.
    pub rounds: RoundHistory<M>,
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game<'t, M: Weapon> {
    table: &'t RuleTable<M>,
    rounds_to_win: u8,
    score: Score,
    status: GameStatus,
    rounds: RoundHistory<M>,
}

impl<'t, M: Weapon> Game<'t, M> {
    /// Fresh game at 0-0.
    #[must_use]
    pub fn new(table: &'t RuleTable<M>, rounds_to_win: u8) -> Self {
        Self {
            table,
            rounds_to_win,
            score: Score::default(),
            status: GameStatus::InProgress,
            rounds: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn score(&self) -> &Score {
        &self.score
    }

    #[must_use]
    pub fn rounds(&self) -> &[RoundRecord<M>] {
        &self.rounds
    }

    /// Resolve a round and advance the state machine.
    ///
    /// Fails with `GameError::GameOver` on a terminal game.
    pub fn apply_round(&mut self, human: M, computer: M) -> Result<RoundRecord<M>> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }

        let outcome = resolve_round(self.table, human, computer);
        if let Some(side) = outcome.winner() {
            self.score[side] += 1;
            if self.score[side] >= self.rounds_to_win {
                self.status = GameStatus::won_by(side);
            }
        }

        let record = RoundRecord {
            human,
            computer,
            outcome,
        };
        self.rounds.push(record);
        Ok(record)
    }

    /// Human leaves. The computer takes the game.
    pub fn withdraw(&mut self) -> Result<()> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }
        debug!(human = self.score.human, computer = self.score.computer, "human withdrew");
        self.status = GameStatus::Abandoned;
        Ok(())
    }

    /// The result, once the game is terminal.
    #[must_use]
    pub fn result(&self) -> Option<GameResult<M>> {
        self.status.winner().map(|winner| GameResult {
            score: self.score,
            winner,
            abandoned: self.status == GameStatus::Abandoned,
            rounds: self.rounds.clone(),
        })
    }
}

/// Play one game to a terminal state.
///
/// Each round draws the computer's move first, then asks the human. The
/// human side also observes every round, draws included, and any withdrawal.
pub fn play_game<M, H, C>(
    table: &RuleTable<M>,
    config: &MatchConfig,
    human: &mut H,
    computer: &mut C,
) -> Result<GameResult<M>>
where
    M: Weapon,
    H: HumanMoveSource<M> + MatchObserver<M> + ?Sized,
    C: ComputerMoveSource<M> + ?Sized,
{
    config.validate()?;

    let mut game = Game::new(table, config.rounds_to_win);
    human.game_started(config)?;

    loop {
        let computer_move = computer.next_move();
        match human.next_choice()? {
            HumanChoice::Withdraw => {
                game.withdraw()?;
                human.game_withdrawn(game.score())?;
            }
            HumanChoice::Play(human_move) => {
                let record = game.apply_round(human_move, computer_move)?;
                human.round_played(&record, game.score())?;
            }
        }

        if let Some(result) = game.result() {
            info!(
                winner = %result.winner,
                human = result.score.human,
                computer = result.score.computer,
                abandoned = result.abandoned,
                rounds = result.rounds.len(),
                "game finished"
            );
            return Ok(result);
        }
    }
}
