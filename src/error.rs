//! Crate error type.
//!
//! Only two kinds of failure reach a player: an out-of-range move selection
//! (recovered by re-prompting) and I/O failure of the console. A rule table
//! that is not a complete tournament is a configuration defect and is
//! reported once, at construction.

/// Errors produced by the rule table, the match engine and the console.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// A raw selection that does not name a move in the fixed set.
    #[error("Invalid move {selection}")]
    InvalidMove { selection: String },

    /// The dominance relation is not a complete tournament.
    #[error("Rule table invariant violated: {reason}")]
    RuleTableInvariant { reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A round was applied to a game that already reached a terminal state.
    #[error("Game is already over")]
    GameOver,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    pub(crate) fn invalid_move(selection: impl ToString) -> Self {
        Self::InvalidMove {
            selection: selection.to_string(),
        }
    }

    pub(crate) fn invariant(reason: impl Into<String>) -> Self {
        Self::RuleTableInvariant {
            reason: reason.into(),
        }
    }

    /// True for errors a player can recover from by choosing again.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidMove { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_message() {
        let err = GameError::invalid_move('7');
        assert_eq!(err.to_string(), "Invalid move 7");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_invariant_is_not_recoverable() {
        let err = GameError::invariant("Rock beats itself");
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("Rock beats itself"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "closed");
        let err: GameError = io.into();
        assert!(matches!(err, GameError::Io(_)));
    }
}
