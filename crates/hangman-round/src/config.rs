//! Round configuration and outcome state machine.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RoundConfig
// ---------------------------------------------------------------------------

/// Configuration for a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Wrong guesses allowed before the round is lost. The gallows drawing
    /// has one stage per mistake.
    pub max_mistakes: u8,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            max_mistakes: Self::DEFAULT_MAX_MISTAKES,
        }
    }
}

impl RoundConfig {
    /// Mistake limit used when nothing else is configured.
    pub const DEFAULT_MAX_MISTAKES: u8 = 10;

    /// Upper bound for `max_mistakes`. There are only 26 letters, so a
    /// higher limit could never be reached.
    pub const MAX_MISTAKES_LIMIT: u8 = 26;

    /// Clamps `max_mistakes` into `1..=MAX_MISTAKES_LIMIT`.
    pub fn validated(mut self) -> Self {
        let clamped = self.max_mistakes.clamp(1, Self::MAX_MISTAKES_LIMIT);
        if clamped != self.max_mistakes {
            tracing::warn!(
                requested = self.max_mistakes,
                clamped,
                "max_mistakes out of range, clamping"
            );
            self.max_mistakes = clamped;
        }
        self
    }
}

// ---------------------------------------------------------------------------
// RoundOutcome
// ---------------------------------------------------------------------------

/// The outcome of a round.
///
/// ```text
///              ┌──(all letters revealed)──→ Won
/// InProgress ──┤
///              └──(mistakes == max)───────→ Lost
/// ```
///
/// `Won` and `Lost` are terminal: once reached, the outcome never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    InProgress,
    Won,
    Lost,
}

impl RoundOutcome {
    /// Returns `true` for `Won` and `Lost`.
    pub fn is_finished(&self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InProgress => write!(f, "InProgress"),
            Self::Won => write!(f, "Won"),
            Self::Lost => write!(f, "Lost"),
        }
    }
}
