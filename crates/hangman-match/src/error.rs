//! Error types for the match layer.

use hangman_round::{RoundError, RoundOutcome};
use hangman_words::WordSourceError;

/// Errors that can occur during match operations.
///
/// Every variant leaves the controller unchanged, so the caller can fix
/// the problem and retry.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// The match is in a state that doesn't allow this operation.
    /// For example, starting a round before `start_match` or after
    /// `end_match`.
    #[error("invalid match state for this operation: {0}")]
    InvalidState(String),

    /// The requested role assignment is not allowed in this mode.
    #[error("invalid role assignment: {0}")]
    InvalidRole(String),

    /// No round has been started (or the last one was cleared).
    #[error("no active round")]
    NoActiveRound,

    /// The active round has not reached a terminal outcome yet.
    #[error("the current round is still in progress")]
    RoundInProgress,

    /// The active round is finished but its outcome has not been scored.
    #[error("the current round's outcome has not been applied")]
    OutcomeNotApplied,

    /// The active round has already been scored.
    #[error("the current round's outcome was already applied")]
    OutcomeAlreadyApplied,

    /// The outcome passed to `apply_outcome` differs from the round's own.
    #[error("outcome mismatch: round ended {expected}, got {got}")]
    OutcomeMismatch {
        expected: RoundOutcome,
        got: RoundOutcome,
    },

    /// The round engine rejected a word or a guess.
    #[error(transparent)]
    Round(#[from] RoundError),

    /// The word source could not supply a word.
    #[error(transparent)]
    Words(#[from] WordSourceError),
}
