//! # rpsls
//!
//! Best-of-three Rock, Paper, Scissors, Lizard, Spock against a uniformly
//! random computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Rules as data**: the dominance relation is an immutable `RuleTable`
//!    validated as a complete tournament at construction. Nothing global.
//!
//! 2. **Explicit state machine**: a game is `InProgress` until a side reaches
//!    the round target or the human withdraws.
//!
//! 3. **I/O at the edge**: the engine talks to `HumanMoveSource`,
//!    `ComputerMoveSource`, `PlayAgainSource` and `MatchObserver`. The console
//!    is one implementation; scripted sources are another.
//!
//! ## Modules
//!
//! - `core`: moves, sides, scores, RNG, configuration
//! - `rules`: the rule table
//! - `engine`: round resolution, games, match tally, collaborator traits
//! - `console`: stdin/stdout frontend
//! - `error`: crate error type
//!
//! ## Example
//!
//! ```
//! use rpsls::core::{MatchConfig, Move::*};
//! use rpsls::engine::{
//!     run_match, ScriptedComputer, ScriptedHuman, ScriptedPlayAgain, SplitFrontend,
//! };
//! use rpsls::rules::RuleTable;
//!
//! let table = RuleTable::canonical().unwrap();
//! let mut frontend = SplitFrontend::new(
//!     ScriptedHuman::moves([Rock, Rock]),
//!     ScriptedPlayAgain::new([false]),
//! );
//! let mut computer = ScriptedComputer::new([Lizard]);
//!
//! let summary = run_match(&table, MatchConfig::new(), &mut frontend, &mut computer).unwrap();
//! assert_eq!(summary.human_games_won, 1);
//! ```

pub mod core;
pub mod rules;
pub mod engine;
pub mod console;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Move, Weapon,
    Side, SideMap, Score,
    GameRng, GameRngState,
    MatchConfig,
};

pub use crate::rules::{RuleTable, RuleTableBuilder};

pub use crate::engine::{
    resolve_round, RoundOutcome, RoundRecord,
    play_game, Game, GameResult, GameStatus,
    run_match, MatchSession, MatchSummary, MatchTally,
    HumanChoice, HumanMoveSource, ComputerMoveSource, PlayAgainSource, RandomOpponent,
    MatchObserver, NoopObserver, Frontend, SplitFrontend,
};

pub use crate::console::Console;

pub use crate::error::{GameError, Result};
