//! Where secret words come from.
//!
//! The round and match layers never read files or touch randomness. They
//! ask a [`WordSource`] for a word right before a round starts, and treat
//! an empty source as a failure to start that round.
//!
//! # Feature Flags
//!
//! - `tokio` — enables [`WordList::load_async`] for loading a word file
//!   without blocking an async runtime.

mod error;
mod list;
mod source;

pub use error::WordSourceError;
pub use list::WordList;
pub use source::{WordQueue, WordSource};
