//! Match configuration.
//!
//! The rule set itself is fixed; a match is configured only by its length
//! (rounds needed to win a game) and the opponent's seed.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Rounds needed to take a best-of-three game.
pub const DEFAULT_ROUNDS_TO_WIN: u8 = 2;

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Round wins that end a game. Best of `2n - 1` needs `n`.
    pub rounds_to_win: u8,

    /// Seed for the computer opponent. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rounds_to_win: DEFAULT_ROUNDS_TO_WIN,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Best-of-three with an unseeded opponent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set game length as "best of `n`". `n` must be odd and at least 1.
    pub fn with_best_of(mut self, n: u8) -> Result<Self> {
        if n == 0 || n % 2 == 0 {
            return Err(GameError::InvalidConfig(format!(
                "best-of must be an odd number of rounds, got {n}"
            )));
        }
        self.rounds_to_win = n / 2 + 1;
        Ok(self)
    }

    /// Seed the computer opponent.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The "best of" number matching `rounds_to_win`.
    #[must_use]
    pub fn best_of(&self) -> u8 {
        self.rounds_to_win.saturating_mul(2).saturating_sub(1)
    }

    /// Check that the configuration can drive a game.
    pub fn validate(&self) -> Result<()> {
        if self.rounds_to_win == 0 {
            return Err(GameError::InvalidConfig(
                "rounds_to_win must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
