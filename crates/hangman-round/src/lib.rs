//! Single-round rules for Hangman.
//!
//! A round is one attempt to guess one secret word before the gallows is
//! fully drawn. This crate owns nothing beyond that: no scores, no players,
//! no word lists.
//!
//! # Key types
//!
//! - [`RoundEngine`] — the state machine for one round
//! - [`Letter`] — a validated, upper-cased ASCII letter
//! - [`RoundOutcome`] — `InProgress`, `Won` or `Lost`
//! - [`GuessReport`] — what a guess did, plus the state to render afterwards
//! - [`RoundView`] — a serializable snapshot for presentation layers
//! - [`RoundConfig`] — the mistake limit

mod config;
mod engine;
mod error;
mod letter;
mod view;

pub use config::{RoundConfig, RoundOutcome};
pub use engine::{GuessKind, GuessReport, RoundEngine};
pub use error::RoundError;
pub use letter::Letter;
pub use view::{RoundView, mask};
