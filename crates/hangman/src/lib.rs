//! # Hangman
//!
//! Rules engine for the classic word-guessing game.
//!
//! The engine is split into layers, each in its own crate and re-exported
//! here:
//!
//! - **Round** ([`RoundEngine`]): one secret word, a set of guessed
//!   letters and a mistake limit. Decides win/loss and nothing else.
//! - **Match** ([`MatchController`]): a sequence of rounds between two
//!   seats. Owns scores, rotates roles and scores each round exactly once.
//! - **Words** ([`WordSource`], [`WordList`]): where secret words come from.
//!
//! Presentation (menus, drawing the gallows) is left to front-ends.
//!
//! ## Quick Start
//!
//! ```rust
//! use hangman::prelude::*;
//!
//! # fn main() -> Result<(), HangmanError> {
//! let mut words = WordQueue::new(["RUST"]);
//! let mut ctl = MatchController::new(MatchConfig::default());
//! ctl.start_match(MatchMode::PvC)?;
//! ctl.start_round_from(&mut words)?;
//!
//! for c in ['R', 'U', 'S', 'T'] {
//!     let report = ctl.guess_char(c)?;
//!     println!("{}", mask(&report.reveal, '_'));
//! }
//!
//! let delta = ctl.settle_round()?;
//! assert_eq!(delta.get(Seat::Primary), 100);
//! # Ok(())
//! # }
//! ```

mod error;
pub mod logging;

pub use error::HangmanError;

pub use hangman_match::{
    MatchConfig, MatchController, MatchError, MatchMode, MatchResult, MatchSnapshot, MatchState,
    Roster, ScoreDelta, ScoreLedger, ScoringRules, Seat,
};
pub use hangman_round::{
    GuessKind, GuessReport, Letter, RoundConfig, RoundEngine, RoundError, RoundOutcome,
    RoundView, mask,
};
pub use hangman_words::{WordList, WordQueue, WordSource, WordSourceError};

/// Everything a front-end usually needs, in one import.
pub mod prelude {
    pub use crate::HangmanError;
    pub use hangman_match::{
        MatchConfig, MatchController, MatchMode, MatchResult, MatchState, Roster, ScoreDelta,
        Seat,
    };
    pub use hangman_round::{GuessKind, Letter, RoundEngine, RoundOutcome, RoundView, mask};
    pub use hangman_words::{WordList, WordQueue, WordSource};
}
