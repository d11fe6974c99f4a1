//! The round engine: one secret word, one stream of guesses.
//!
//! The engine is a plain value with no I/O. The caller feeds it letters via
//! [`RoundEngine::guess`] and reads back whatever it needs to render:
//! the reveal state, the mistake count, the outcome.
//!
//! # Replay policy
//!
//! - Guessing a letter that was already guessed is a no-op. It is reported
//!   as [`GuessKind::Repeated`], not as an error, and costs nothing.
//! - Guessing after the round is over is rejected with
//!   [`RoundError::AlreadyFinished`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{Letter, RoundConfig, RoundError, RoundOutcome, RoundView};

/// How a single guess was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessKind {
    /// The letter appears in the word this many times (at least once).
    Hit { occurrences: usize },
    /// The letter does not appear in the word. One mistake was recorded.
    Miss,
    /// The letter had already been guessed. Nothing changed.
    Repeated,
}

/// The result of a guess: what happened, and the state to render next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessReport {
    pub letter: Letter,
    pub kind: GuessKind,
    /// Outcome after this guess.
    pub outcome: RoundOutcome,
    /// One entry per position in the word; `None` is still hidden.
    pub reveal: Vec<Option<Letter>>,
    /// Mistakes made so far (see [`RoundEngine::progress_indicator`]).
    pub progress: u8,
}

/// State machine for a single round of Hangman.
///
/// ## Invariants
///
/// - `word` is non-empty and made of [`Letter`]s only.
/// - `guessed` only grows.
/// - `mistakes <= max_mistakes`.
/// - `outcome == Won` iff every letter of `word` is in `guessed`.
/// - `outcome == Lost` iff `mistakes == max_mistakes` and the word is not
///   fully revealed.
/// - Once `Won` or `Lost`, the engine never changes again.
#[derive(Debug, Clone)]
pub struct RoundEngine {
    word: Vec<Letter>,
    guessed: BTreeSet<Letter>,
    /// Wrong guesses, in the order they were made.
    missed: Vec<Letter>,
    mistakes: u8,
    max_mistakes: u8,
    outcome: RoundOutcome,
}

impl RoundEngine {
    /// Creates a round with the default limit of 10 mistakes.
    ///
    /// # Errors
    /// Returns [`RoundError::InvalidWord`] if `secret_word` is empty or
    /// contains anything other than ASCII letters.
    pub fn new(secret_word: &str) -> Result<Self, RoundError> {
        Self::with_config(secret_word, &RoundConfig::default())
    }

    /// Creates a round with a custom mistake limit.
    ///
    /// # Errors
    /// Returns [`RoundError::InvalidWord`] for a bad word and
    /// [`RoundError::InvalidConfig`] if `max_mistakes` is 0 or larger than
    /// [`RoundConfig::MAX_MISTAKES_LIMIT`].
    pub fn with_max_mistakes(
        secret_word: &str,
        max_mistakes: u8,
    ) -> Result<Self, RoundError> {
        Self::with_config(secret_word, &RoundConfig { max_mistakes })
    }

    /// Creates a round from a [`RoundConfig`].
    pub fn with_config(
        secret_word: &str,
        config: &RoundConfig,
    ) -> Result<Self, RoundError> {
        if config.max_mistakes == 0
            || config.max_mistakes > RoundConfig::MAX_MISTAKES_LIMIT
        {
            return Err(RoundError::InvalidConfig(format!(
                "max_mistakes must be between 1 and {}, got {}",
                RoundConfig::MAX_MISTAKES_LIMIT,
                config.max_mistakes
            )));
        }

        let word = parse_word(secret_word)?;
        tracing::debug!(
            word_len = word.len(),
            max_mistakes = config.max_mistakes,
            "round created"
        );

        Ok(Self {
            word,
            guessed: BTreeSet::new(),
            missed: Vec::new(),
            mistakes: 0,
            max_mistakes: config.max_mistakes,
            outcome: RoundOutcome::InProgress,
        })
    }

    /// Processes a guess.
    ///
    /// # Errors
    /// Returns [`RoundError::AlreadyFinished`] if the round is over. The
    /// round is left untouched.
    pub fn guess(&mut self, letter: Letter) -> Result<GuessReport, RoundError> {
        if self.outcome.is_finished() {
            tracing::debug!(%letter, outcome = %self.outcome, "guess after round finished");
            return Err(RoundError::AlreadyFinished(self.outcome));
        }

        let kind = if !self.guessed.insert(letter) {
            GuessKind::Repeated
        } else {
            let occurrences = self.word.iter().filter(|&&l| l == letter).count();
            if occurrences > 0 {
                if self.is_fully_revealed() {
                    self.outcome = RoundOutcome::Won;
                    tracing::info!(word_len = self.word.len(), mistakes = self.mistakes, "round won");
                }
                GuessKind::Hit { occurrences }
            } else {
                self.missed.push(letter);
                self.mistakes += 1;
                if self.mistakes == self.max_mistakes {
                    self.outcome = RoundOutcome::Lost;
                    tracing::info!(word_len = self.word.len(), mistakes = self.mistakes, "round lost");
                }
                GuessKind::Miss
            }
        };

        tracing::debug!(%letter, ?kind, mistakes = self.mistakes, "guess processed");

        Ok(GuessReport {
            letter,
            kind,
            outcome: self.outcome,
            reveal: self.reveal_state(),
            progress: self.mistakes,
        })
    }

    /// Validates `c` and guesses it.
    ///
    /// # Errors
    /// Returns [`RoundError::InvalidGuess`] for a non-letter (no state
    /// change), otherwise the same errors as [`guess`](Self::guess).
    pub fn guess_char(&mut self, c: char) -> Result<GuessReport, RoundError> {
        self.guess(Letter::new(c)?)
    }

    /// For each position of the word, the letter if guessed, else `None`.
    pub fn reveal_state(&self) -> Vec<Option<Letter>> {
        self.word
            .iter()
            .map(|l| self.guessed.contains(l).then_some(*l))
            .collect()
    }

    /// Current mistake count, in `0..=max_mistakes`.
    ///
    /// Presentation layers map this to a gallows drawing: 0 is an empty
    /// gallows, `max_mistakes` is the complete figure.
    pub fn progress_indicator(&self) -> u8 {
        self.mistakes
    }

    pub fn max_mistakes(&self) -> u8 {
        self.max_mistakes
    }

    /// Wrong guesses still allowed before the round is lost.
    pub fn remaining_attempts(&self) -> u8 {
        self.max_mistakes - self.mistakes
    }

    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    pub fn guessed_letters(&self) -> &BTreeSet<Letter> {
        &self.guessed
    }

    /// Wrong guesses in the order they were made.
    pub fn missed_letters(&self) -> &[Letter] {
        &self.missed
    }

    pub fn is_guessed(&self, letter: Letter) -> bool {
        self.guessed.contains(&letter)
    }

    /// The full secret word, upper case.
    ///
    /// Presentation layers should only show this once the round is over;
    /// [`view`](Self::view) does that automatically.
    pub fn secret_word(&self) -> String {
        self.word.iter().map(|l| l.as_char()).collect()
    }

    /// Serializable snapshot of everything a renderer needs.
    pub fn view(&self) -> RoundView {
        RoundView {
            reveal: self.reveal_state(),
            progress: self.mistakes,
            max_mistakes: self.max_mistakes,
            outcome: self.outcome,
            missed: self.missed.clone(),
            solution: self.outcome.is_finished().then(|| self.secret_word()),
        }
    }

    fn is_fully_revealed(&self) -> bool {
        self.word.iter().all(|l| self.guessed.contains(l))
    }
}

/// Turns a raw word into letters, normalizing case.
fn parse_word(secret_word: &str) -> Result<Vec<Letter>, RoundError> {
    if secret_word.is_empty() {
        return Err(RoundError::InvalidWord {
            word: secret_word.to_string(),
            reason: "word is empty",
        });
    }
    secret_word
        .chars()
        .map(|c| {
            Letter::new(c).map_err(|_| RoundError::InvalidWord {
                word: secret_word.to_string(),
                reason: "word must contain only letters A-Z",
            })
        })
        .collect()
}
