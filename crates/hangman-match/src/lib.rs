//! Match management for Hangman: roles, scoring, and the match lifecycle.
//!
//! A match is a sequence of rounds between two seats. The
//! [`MatchController`] creates one [`RoundEngine`](hangman_round::RoundEngine)
//! per round, forwards guesses to it, settles its outcome into the score
//! ledger exactly once, and rotates roles between rounds.
//!
//! # Key types
//!
//! - [`MatchController`] — owns scores, roles and the active round
//! - [`MatchMode`] — player-vs-computer or player-vs-player
//! - [`MatchState`] — `NotStarted → InProgress → Finished`
//! - [`Seat`] / [`Roster`] — who sits where, and their display names
//! - [`ScoreLedger`] / [`ScoreDelta`] — scores and per-round changes
//! - [`MatchConfig`] / [`ScoringRules`] — mistake limit and point values

mod config;
mod controller;
mod error;
mod score;
mod seat;

pub use config::{MatchConfig, MatchMode, MatchResult, MatchState, ScoringRules};
pub use controller::{MatchController, MatchSnapshot};
pub use error::MatchError;
pub use score::{ScoreDelta, ScoreLedger};
pub use seat::{Roster, Seat};
