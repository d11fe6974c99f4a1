//! Seats and display names.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::MatchMode;

/// One of the two fixed positions in a match.
///
/// Seats never move; roles (guesser, word-setter) rotate over them. The
/// primary seat is the person who opened the app. The secondary seat is the
/// computer in [`MatchMode::PvC`] and the opponent in [`MatchMode::PvP`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    Primary,
    Secondary,
}

impl Seat {
    /// The other seat.
    pub fn other(self) -> Self {
        match self {
            Self::Primary => Self::Secondary,
            Self::Secondary => Self::Primary,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Secondary => write!(f, "secondary"),
        }
    }
}

/// Display names for both seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub primary: String,
    pub secondary: String,
}

impl Roster {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    /// Default names used when the front-end didn't ask for any.
    pub fn for_mode(mode: MatchMode) -> Self {
        match mode {
            MatchMode::PvC => Self::new("Player", "Computer"),
            MatchMode::PvP => Self::new("Player 1", "Player 2"),
        }
    }

    pub fn name(&self, seat: Seat) -> &str {
        match seat {
            Seat::Primary => &self.primary,
            Seat::Secondary => &self.secondary,
        }
    }
}
