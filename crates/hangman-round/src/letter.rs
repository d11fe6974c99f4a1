//! The `Letter` newtype: the only thing a player can guess.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::RoundError;

/// A single upper-case ASCII letter, `A` through `Z`.
///
/// Constructing a `Letter` is the validation step for both secret words and
/// guesses: once you hold one, it is known to be guessable. Lower-case input
/// is normalized to upper case, so `'c'` and `'C'` are the same letter.
///
/// Serializes as a one-character string (`"C"`), and deserialization runs
/// the same validation as [`Letter::new`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(u8);

impl Letter {
    /// Validates and normalizes a character.
    ///
    /// # Errors
    /// Returns [`RoundError::InvalidGuess`] for anything outside `a-z`/`A-Z`,
    /// including digits, punctuation and non-ASCII letters.
    pub fn new(c: char) -> Result<Self, RoundError> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_uppercase() as u8))
        } else {
            Err(RoundError::InvalidGuess(c.to_string()))
        }
    }

    /// Returns the letter as an upper-case `char`.
    pub fn as_char(self) -> char {
        self.0 as char
    }

    /// All 26 letters in alphabetical order.
    pub fn alphabet() -> impl Iterator<Item = Letter> {
        (b'A'..=b'Z').map(Letter)
    }
}

impl TryFrom<char> for Letter {
    type Error = RoundError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

/// Parses user input such as `"e"` or `" E "`.
///
/// Surrounding whitespace is ignored; anything other than exactly one
/// alphabetic character is rejected.
impl FromStr for Letter {
    type Err = RoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::new(c).map_err(|_| RoundError::InvalidGuess(s.to_string()))
            }
            _ => Err(RoundError::InvalidGuess(s.to_string())),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
