//! Calendar-day boundary detection.
//!
//! The tracker checks the local calendar date on every heartbeat; when it
//! changes, the expiring date is surfaced exactly once so the caller can
//! snapshot, persist and upload the old day's counters before any time is
//! accounted against the new date.

use chrono::NaiveDate;

/// Tracks the current calendar date and detects day changes.
#[derive(Debug, Clone)]
pub struct DayRollover {
    current: NaiveDate,
}

impl DayRollover {
    pub fn new(today: NaiveDate) -> Self {
        DayRollover { current: today }
    }

    /// The date currently being tracked.
    pub fn current(&self) -> NaiveDate {
        self.current
    }

    /// Compares `today` against the tracked date.
    ///
    /// On a change, adopts the new date and returns the expired one. The new
    /// date is adopted immediately, so repeated checks on the same tick
    /// return `None` — exactly one rollover per date change.
    pub fn check(&mut self, today: NaiveDate) -> Option<NaiveDate> {
        if today != self.current {
            let expired = std::mem::replace(&mut self.current, today);
            Some(expired)
        } else {
            None
        }
    }
}
