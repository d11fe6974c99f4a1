//! Render-ready snapshot of a round.

use serde::{Deserialize, Serialize};

use crate::{Letter, RoundOutcome};

/// Everything a presentation layer needs to draw a round.
///
/// Produced by [`RoundEngine::view`](crate::RoundEngine::view). The
/// secret word is only included once the round is over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    pub reveal: Vec<Option<Letter>>,
    pub progress: u8,
    pub max_mistakes: u8,
    pub outcome: RoundOutcome,
    pub missed: Vec<Letter>,
    pub solution: Option<String>,
}

impl RoundView {
    /// The reveal state as text, e.g. `"C _ T"`.
    pub fn masked(&self) -> String {
        mask(&self.reveal, '_')
    }
}

/// Formats a reveal state with `blank` for hidden positions, one space
/// between positions.
pub fn mask(reveal: &[Option<Letter>], blank: char) -> String {
    let mut out = String::with_capacity(reveal.len() * 2);
    for (i, slot) in reveal.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(slot.map_or(blank, Letter::as_char));
    }
    out
}
