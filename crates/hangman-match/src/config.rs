//! Match configuration, modes and the match state machine.

use hangman_round::RoundConfig;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ScoringRules
// ---------------------------------------------------------------------------

/// Points exchanged when a round is settled.
///
/// The winner of a round (guesser or word-setter) gains `win_award`; the
/// loser loses `loss_penalty`, never dropping below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub win_award: u32,
    pub loss_penalty: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            win_award: 100,
            loss_penalty: 10,
        }
    }
}

// ---------------------------------------------------------------------------
// MatchConfig
// ---------------------------------------------------------------------------

/// Configuration for a match.
///
/// Deserializable so front-ends can read it from a file; missing fields
/// fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Mistake limit for every round in the match.
    pub max_mistakes: u8,
    pub scoring: ScoringRules,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_mistakes: RoundConfig::DEFAULT_MAX_MISTAKES,
            scoring: ScoringRules::default(),
        }
    }
}

impl MatchConfig {
    /// Clamps out-of-range values so the config is safe to use.
    ///
    /// Called automatically by [`MatchController::new`](crate::MatchController::new).
    pub fn validated(mut self) -> Self {
        self.max_mistakes = self.round_config().validated().max_mistakes;
        self
    }

    /// The per-round configuration derived from this match config.
    pub fn round_config(&self) -> RoundConfig {
        RoundConfig {
            max_mistakes: self.max_mistakes,
        }
    }
}

// ---------------------------------------------------------------------------
// MatchMode
// ---------------------------------------------------------------------------

/// Who plays against whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchMode {
    /// Player vs computer. The player always guesses; the computer always
    /// supplies the word.
    PvC,
    /// Player vs player. The two players take turns guessing and setting.
    PvP,
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PvC => write!(f, "PvC"),
            Self::PvP => write!(f, "PvP"),
        }
    }
}

// ---------------------------------------------------------------------------
// MatchState
// ---------------------------------------------------------------------------

/// The lifecycle state of a match.
///
/// ```text
/// NotStarted → InProgress → Finished
/// ```
///
/// - **NotStarted**: Controller exists, scores are zero, no rounds yet.
/// - **InProgress**: Rounds can be started, played and scored.
/// - **Finished**: The match was ended explicitly. The final result is
///   fixed; nothing else is accepted. No transition leaves this state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchState {
    NotStarted,
    InProgress,
    Finished,
}

impl MatchState {
    /// Returns `true` while rounds can be played.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::InProgress)
    }

    /// Returns the next state, or `None` from `Finished`.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::NotStarted => Some(Self::InProgress),
            Self::InProgress => Some(Self::Finished),
            Self::Finished => None,
        }
    }

    /// Returns `true` if transitioning to `target` is valid.
    pub fn can_transition_to(self, target: Self) -> bool {
        self.next() == Some(target)
    }
}

impl std::fmt::Display for MatchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotStarted => write!(f, "NotStarted"),
            Self::InProgress => write!(f, "InProgress"),
            Self::Finished => write!(f, "Finished"),
        }
    }
}

// ---------------------------------------------------------------------------
// MatchResult
// ---------------------------------------------------------------------------

/// Final classification of a match, by comparing scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    PrimaryWins,
    SecondaryWins,
    Draw,
}

impl MatchResult {
    pub fn from_scores(primary: u32, secondary: u32) -> Self {
        match primary.cmp(&secondary) {
            std::cmp::Ordering::Greater => Self::PrimaryWins,
            std::cmp::Ordering::Less => Self::SecondaryWins,
            std::cmp::Ordering::Equal => Self::Draw,
        }
    }

    /// The winning seat, or `None` for a draw.
    pub fn winner(&self) -> Option<crate::Seat> {
        match self {
            Self::PrimaryWins => Some(crate::Seat::Primary),
            Self::SecondaryWins => Some(crate::Seat::Secondary),
            Self::Draw => None,
        }
    }
}
