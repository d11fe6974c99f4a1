//! Score ledger with a floor at zero.

use serde::{Deserialize, Serialize};

use crate::Seat;

/// Cumulative scores for both seats.
///
/// Scores are unsigned: a deduction larger than the current score leaves
/// it at zero. The floor is applied at the moment of the deduction, so a
/// later award starts from zero, not from a hidden negative balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLedger {
    pub primary: u32,
    pub secondary: u32,
}

impl ScoreLedger {
    pub fn get(&self, seat: Seat) -> u32 {
        match seat {
            Seat::Primary => self.primary,
            Seat::Secondary => self.secondary,
        }
    }

    fn slot(&mut self, seat: Seat) -> &mut u32 {
        match seat {
            Seat::Primary => &mut self.primary,
            Seat::Secondary => &mut self.secondary,
        }
    }

    /// Adds `points` to `seat`. Returns the change actually applied.
    pub fn award(&mut self, seat: Seat, points: u32) -> i64 {
        let slot = self.slot(seat);
        let before = *slot;
        *slot = before.saturating_add(points);
        i64::from(*slot) - i64::from(before)
    }

    /// Removes up to `points` from `seat`, stopping at zero. Returns the
    /// change actually applied (zero or negative).
    pub fn deduct(&mut self, seat: Seat, points: u32) -> i64 {
        let slot = self.slot(seat);
        let before = *slot;
        *slot = before.saturating_sub(points);
        i64::from(*slot) - i64::from(before)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The score change produced by settling one round.
///
/// Values are the changes actually applied after the floor, so a
/// penalty against a zero score shows up as `0`, not `-10`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDelta {
    pub primary: i64,
    pub secondary: i64,
}

impl ScoreDelta {
    pub fn get(&self, seat: Seat) -> i64 {
        match seat {
            Seat::Primary => self.primary,
            Seat::Secondary => self.secondary,
        }
    }

    pub(crate) fn set(&mut self, seat: Seat, value: i64) {
        match seat {
            Seat::Primary => self.primary = value,
            Seat::Secondary => self.secondary = value,
        }
    }
}
