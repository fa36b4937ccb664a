//! Collaborators that feed moves and decisions into the engine.
//!
//! The engine never reads a terminal. It asks a `HumanMoveSource` for the
//! human's choice, a `ComputerMoveSource` for the opponent's move, and a
//! `PlayAgainSource` whether to start another game. The console layer and
//! the scripted sources in `engine::scripted` implement these.

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use crate::core::{GameRng, GameRngState, Weapon};
use crate::error::Result;

/// What the human did when asked for a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HumanChoice<M> {
    /// Play this move.
    Play(M),
    /// Leave the current game. Concedes it to the computer.
    Withdraw,
}

/// Source of the human's moves.
///
/// Implementations re-prompt on invalid raw input themselves; the engine
/// only ever sees a valid move or a withdrawal.
pub trait HumanMoveSource<M: Weapon> {
    fn next_choice(&mut self) -> Result<HumanChoice<M>>;
}

/// Source of the computer's moves.
pub trait ComputerMoveSource<M: Weapon> {
    fn next_move(&mut self) -> M;
}

/// Asked after every game. `true` unless the user declines.
pub trait PlayAgainSource {
    fn play_again(&mut self) -> Result<bool>;
}

/// Uniformly random opponent. Each draw is independent.
#[derive(Clone, Debug)]
pub struct RandomOpponent<M> {
    rng: GameRng,
    _moves: PhantomData<M>,
}

impl<M: Weapon> RandomOpponent<M> {
    /// # Panics
    ///
    /// If `M::ALL` is empty.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        assert!(!M::ALL.is_empty(), "Move set must not be empty");
        Self {
            rng,
            _moves: PhantomData,
        }
    }

    /// Seeded opponent, reproducible across runs.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Seed in use, for replaying a session.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Snapshot of the RNG position.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl<M: Weapon> ComputerMoveSource<M> for RandomOpponent<M> {
    fn next_move(&mut self) -> M {
        *self.rng.choose(M::ALL).expect("move set checked non-empty in new")
    }
}
