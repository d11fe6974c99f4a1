//! Error types for the round layer.

use crate::RoundOutcome;

/// Errors that can occur while creating or playing a round.
///
/// None of these are fatal to the process. A rejected word means the
/// caller should supply another one; a rejected guess leaves the round
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    /// The secret word was empty or contained something other than ASCII
    /// letters.
    #[error("invalid secret word {word:?}: {reason}")]
    InvalidWord {
        word: String,
        reason: &'static str,
    },

    /// The guess was not a single alphabetic character.
    #[error("invalid guess {0:?}: expected a single letter A-Z")]
    InvalidGuess(String),

    /// The round already reached a terminal outcome.
    #[error("round is already finished ({0})")]
    AlreadyFinished(RoundOutcome),

    /// The round configuration cannot produce a playable round.
    #[error("invalid round configuration: {0}")]
    InvalidConfig(String),
}
