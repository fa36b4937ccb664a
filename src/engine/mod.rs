//! Match engine: rounds, best-of-N games, and the cross-game tally.
//!
//! Control flow for one round:
//!
//! 1. draw the computer's move from a `ComputerMoveSource`
//! 2. ask a `HumanMoveSource` for a move or a withdrawal
//! 3. resolve through the `RuleTable`
//! 4. update the `Game` state machine and tell the `MatchObserver`
//!
//! The human's side of the table (move source, play-again source and
//! observer) is one `Frontend`, since a console serves all three roles.
//!
//! All state is owned by the caller's single thread. The rule table is only
//! borrowed.

pub mod round;
pub mod game;
pub mod tally;
pub mod sources;
pub mod observer;
pub mod frontend;
pub mod scripted;
pub mod session;

pub use round::{resolve_round, RoundOutcome, RoundRecord};
pub use game::{play_game, Game, GameResult, GameStatus};
pub use tally::{MatchSummary, MatchTally};
pub use sources::{
    ComputerMoveSource, HumanChoice, HumanMoveSource, PlayAgainSource, RandomOpponent,
};
pub use observer::{MatchObserver, NoopObserver};
pub use frontend::{Frontend, SplitFrontend};
pub use scripted::{ScriptedComputer, ScriptedHuman, ScriptedPlayAgain};
pub use session::{run_match, MatchSession};
