//! Unified error type for the Hangman crates.

use hangman_match::MatchError;
use hangman_round::RoundError;
use hangman_words::WordSourceError;

/// Top-level error that wraps all crate-specific errors.
///
/// Front-ends using the `hangman` crate deal with this single type; `?`
/// converts the layer errors through the `#[from]` impls.
#[derive(Debug, thiserror::Error)]
pub enum HangmanError {
    /// A round rejected a word or a guess.
    #[error(transparent)]
    Round(#[from] RoundError),

    /// The match controller rejected an operation.
    #[error(transparent)]
    Match(#[from] MatchError),

    /// The word source failed (empty list, unreadable file).
    #[error(transparent)]
    Words(#[from] WordSourceError),
}

impl HangmanError {
    /// Returns `true` if the error came from bad player input (a malformed
    /// guess or an unusable secret word) rather than from misuse of the API.
    ///
    /// Front-ends use this to re-prompt instead of bailing out.
    pub fn is_input_error(&self) -> bool {
        let round = match self {
            Self::Round(e) => e,
            Self::Match(MatchError::Round(e)) => e,
            _ => return false,
        };
        matches!(
            round,
            RoundError::InvalidGuess(_) | RoundError::InvalidWord { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hangman_round::RoundOutcome;

    #[test]
    fn test_from_round_error() {
        let err = RoundError::InvalidGuess("7".into());
        let hangman_err: HangmanError = err.into();
        assert!(matches!(hangman_err, HangmanError::Round(_)));
        assert!(hangman_err.to_string().contains('7'));
    }

    #[test]
    fn test_from_match_error() {
        let err = MatchError::NoActiveRound;
        let hangman_err: HangmanError = err.into();
        assert!(matches!(hangman_err, HangmanError::Match(_)));
    }

    #[test]
    fn test_from_word_source_error() {
        let err = WordSourceError::EmptyWordList;
        let hangman_err: HangmanError = err.into();
        assert!(matches!(hangman_err, HangmanError::Words(_)));
    }

    #[test]
    fn test_is_input_error_sees_through_match_wrapper() {
        let nested: HangmanError = MatchError::Round(RoundError::InvalidGuess("?".into())).into();
        assert!(nested.is_input_error());

        let finished: HangmanError = RoundError::AlreadyFinished(RoundOutcome::Won).into();
        assert!(!finished.is_input_error());

        let state: HangmanError = MatchError::RoundInProgress.into();
        assert!(!state.is_input_error());
    }
}
