//! Line-oriented console frontend.
//!
//! Reads single-character answers from any `BufRead` and prints to any
//! `Write`, so the same code serves stdin/stdout and in-memory tests.
//!
//! - Move prompt: numbered menu plus `q) Quit`. An empty line quits too.
//! - Anything else prints `Invalid move <c>` and asks again.
//! - Play-again prompt: only `n` declines; an empty line means yes.
//! - End of input withdraws from the game and declines another.

use std::io::{self, BufRead, Stdin, Stdout, Write};
use tracing::warn;

use crate::core::{MatchConfig, Score, Side, Weapon, DEFAULT_ROUNDS_TO_WIN};
use crate::engine::{
    GameResult, HumanChoice, HumanMoveSource, MatchObserver, MatchSummary, MatchTally,
    PlayAgainSource, RoundOutcome, RoundRecord,
};
use crate::error::{GameError, Result};

/// Key that withdraws from the current game.
pub const QUIT_KEY: char = 'q';

/// Key that declines another game.
pub const DECLINE_KEY: char = 'n';

/// The numbered move menu, e.g. `     -> 1) Rock 2) Paper ...  q) Quit`.
#[must_use]
pub fn move_prompt<M: Weapon>() -> String {
    let mut prompt = String::from("     -> ");
    for (i, m) in M::ALL.iter().enumerate() {
        prompt.push_str(&format!("{}) {} ", i + 1, m));
    }
    prompt.push_str(&format!(" {QUIT_KEY}) Quit"));
    prompt
}

/// Interpret the first character of a move answer.
///
/// `q` withdraws; a digit selects from the menu. Anything else, including
/// digits outside the menu, is `GameError::InvalidMove`.
pub fn parse_selection<M: Weapon>(key: char) -> Result<HumanChoice<M>> {
    if key == QUIT_KEY {
        return Ok(HumanChoice::Withdraw);
    }
    let selection = key
        .to_digit(10)
        .ok_or_else(|| GameError::invalid_move(key))?;
    M::from_selection(selection as usize)
        .map(HumanChoice::Play)
        .map_err(|_| GameError::invalid_move(key))
}

/// "Best-Of-Three" for the usual game, "Best-Of-5" otherwise.
fn best_of_label(best_of: u8) -> String {
    match best_of {
        3 => "Best-Of-Three".to_string(),
        n => format!("Best-Of-{n}"),
    }
}

/// Console frontend over a reader and a writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    best_of: u8,
}

impl Console<io::StdinLock<'static>, Stdout> {
    /// Console on the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            best_of: DEFAULT_ROUNDS_TO_WIN * 2 - 1,
        }
    }

    /// Give back the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print `prompt: ` and read one line.
    ///
    /// Returns the first character, `default` for an empty line, or `None`
    /// at end of input. Bytes that are not UTF-8 read as U+FFFD.
    fn prompt(&mut self, prompt: &str, default: char) -> Result<Option<char>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\r', '\n']);
        Ok(Some(line.chars().next().unwrap_or(default)))
    }
}

impl<M: Weapon, R: BufRead, W: Write> HumanMoveSource<M> for Console<R, W> {
    fn next_choice(&mut self) -> Result<HumanChoice<M>> {
        let prompt = move_prompt::<M>();
        loop {
            let Some(key) = self.prompt(&prompt, QUIT_KEY)? else {
                return Ok(HumanChoice::Withdraw);
            };

            match parse_selection::<M>(key) {
                Ok(choice) => return Ok(choice),
                Err(err) if err.is_recoverable() => {
                    warn!(%key, "invalid move selection");
                    writeln!(self.output, "{err}")?;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

/// End of input declines, so a closed stdin ends the match.
impl<R: BufRead, W: Write> PlayAgainSource for Console<R, W> {
    fn play_again(&mut self) -> Result<bool> {
        Ok(self
            .prompt("\nPlay Again (y/n)?", 'y')?
            .map_or(false, |key| key != DECLINE_KEY))
    }
}

impl<M: Weapon, R: BufRead, W: Write> MatchObserver<M> for Console<R, W> {
    fn game_started(&mut self, config: &MatchConfig) -> Result<()> {
        self.best_of = config.best_of();
        let names: Vec<String> = M::ALL.iter().map(ToString::to_string).collect();

        writeln!(self.output, "\nReady to play {}?", names.join(", "))?;
        writeln!(self.output, "\nBest of {}.... Go!", self.best_of)?;
        writeln!(self.output, "\nChoose your weapon")?;
        Ok(())
    }

    fn round_played(&mut self, record: &RoundRecord<M>, _score: &Score) -> Result<()> {
        let (human, computer) = (record.human, record.computer);
        match record.outcome {
            RoundOutcome::Draw => {
                writeln!(self.output, "  DRAW... play again!! ({human} same as {computer})")?;
            }
            RoundOutcome::HumanWins => {
                writeln!(self.output, "  HUMAN beats Computer ({human} beats {computer})")?;
            }
            RoundOutcome::ComputerWins => {
                writeln!(self.output, "  COMPUTER beats Human ({computer} beats {human})")?;
            }
        }
        Ok(())
    }

    fn game_withdrawn(&mut self, _score: &Score) -> Result<()> {
        writeln!(self.output, "Human quits Best-of-{}...", self.best_of)?;
        Ok(())
    }

    fn game_finished(&mut self, result: &GameResult<M>, tally: &MatchTally) -> Result<()> {
        let winner = result.winner.to_string();
        writeln!(
            self.output,
            "\n {}\n **** {} wins {} (Human={}, Computer={} - game total is Human={} Computer={})",
            winner.to_uppercase(),
            winner,
            best_of_label(self.best_of),
            result.score.human,
            result.score.computer,
            tally.games_won(Side::Human),
            tally.games_won(Side::Computer),
        )?;
        Ok(())
    }

    fn match_finished(&mut self, summary: &MatchSummary) -> Result<()> {
        writeln!(
            self.output,
            "Thank you for playing. The final game score was Human={} and Computer={}",
            summary.human_games_won, summary.computer_games_won
        )?;
        self.output.flush()?;
        Ok(())
    }
}
