//! Sources fed from fixed sequences.
//!
//! Used to replay a recorded session and to drive the engine in tests
//! without a terminal.

use std::collections::VecDeque;

use super::sources::{ComputerMoveSource, HumanChoice, HumanMoveSource, PlayAgainSource};
use crate::core::Weapon;
use crate::error::Result;

/// Human choices from a queue. Withdraws once the queue is empty.
#[derive(Clone, Debug, Default)]
pub struct ScriptedHuman<M> {
    choices: VecDeque<HumanChoice<M>>,
}

impl<M: Weapon> ScriptedHuman<M> {
    pub fn new(choices: impl IntoIterator<Item = HumanChoice<M>>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
        }
    }

    /// Only moves, no withdrawal.
    pub fn moves(moves: impl IntoIterator<Item = M>) -> Self {
        Self::new(moves.into_iter().map(HumanChoice::Play))
    }

    /// Choices not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.choices.len()
    }
}

impl<M: Weapon> HumanMoveSource<M> for ScriptedHuman<M> {
    fn next_choice(&mut self) -> Result<HumanChoice<M>> {
        Ok(self.choices.pop_front().unwrap_or(HumanChoice::Withdraw))
    }
}

/// Computer moves repeated in a cycle.
#[derive(Clone, Debug)]
pub struct ScriptedComputer<M> {
    moves: Vec<M>,
    next: usize,
}

impl<M: Weapon> ScriptedComputer<M> {
    /// # Panics
    ///
    /// If `moves` is empty.
    pub fn new(moves: impl IntoIterator<Item = M>) -> Self {
        let moves: Vec<M> = moves.into_iter().collect();
        assert!(!moves.is_empty(), "Scripted computer needs at least one move");
        Self { moves, next: 0 }
    }

    /// Number of moves drawn so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl<M: Weapon> ComputerMoveSource<M> for ScriptedComputer<M> {
    fn next_move(&mut self) -> M {
        let m = self.moves[self.next % self.moves.len()];
        self.next += 1;
        m
    }
}

/// Play-again answers from a queue. Declines once the queue is empty.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPlayAgain {
    answers: VecDeque<bool>,
}

impl ScriptedPlayAgain {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
        }
    }
}

impl PlayAgainSource for ScriptedPlayAgain {
    fn play_again(&mut self) -> Result<bool> {
        Ok(self.answers.pop_front().unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Move::{self, *};

    #[test]
    fn test_scripted_human_withdraws_when_exhausted() {
        let mut human = ScriptedHuman::moves([Rock]);
        assert_eq!(human.next_choice().unwrap(), HumanChoice::Play(Rock));
        assert_eq!(human.remaining(), 0);
        assert_eq!(human.next_choice().unwrap(), HumanChoice::Withdraw);
    }

    #[test]
    fn test_scripted_computer_cycles() {
        let mut computer = ScriptedComputer::new([Paper, Spock]);
        let drawn: Vec<Move> = (0..5).map(|_| computer.next_move()).collect();
        assert_eq!(drawn, vec![Paper, Spock, Paper, Spock, Paper]);
        assert_eq!(computer.drawn(), 5);
    }

    #[test]
    fn test_scripted_play_again_declines_when_exhausted() {
        let mut again = ScriptedPlayAgain::new([true]);
        assert!(again.play_again().unwrap());
        assert!(!again.play_again().unwrap());
    }
}
