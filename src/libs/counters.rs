//! Daily counters and their persistence adapter.
//!
//! `DailyCounters` is the per-calendar-day aggregate the tracker mutates;
//! `DayStore` maps it onto a plain key-value store using date-qualified keys
//! so totals survive restarts and remain addressable after rollover.

use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;
use chrono::NaiveDate;
use std::str::FromStr;

/// Fixed namespace under which daily counters are stored.
pub const STORE_NAMESPACE: &str = "dailyplaytime";

/// The key-value persistence interface the tracker writes through.
///
/// Kept deliberately minimal so alternative backends (or a host
/// application's own settings store) can stand in for the bundled SQLite
/// implementation.
pub trait KeyValueStore {
    fn set(&mut self, namespace: &str, key: &str, value: &str) -> Result<()>;
    fn get(&self, namespace: &str, key: &str) -> Result<Option<String>>;
}

/// Per-calendar-day aggregate of tracked time.
///
/// Both counters are monotonically non-decreasing within a day and reset to
/// zero on rollover. Only the tracker mutates them.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyCounters {
    /// The calendar date these counters belong to.
    pub date: NaiveDate,
    /// Accumulated non-idle seconds.
    pub active_seconds: f64,
    /// Number of sessions started this day.
    pub session_count: u32,
}

impl DailyCounters {
    pub fn new(date: NaiveDate) -> Self {
        DailyCounters {
            date,
            active_seconds: 0.0,
            session_count: 0,
        }
    }

    /// Whole minutes played, as reported to the collector.
    pub fn minutes_played(&self) -> u64 {
        (self.active_seconds / 60.0) as u64
    }
}

/// Persistence adapter writing daily counters through a key-value store.
///
/// Keys are `"{date}_seconds"` and `"{date}_sessions"` under the
/// [`STORE_NAMESPACE`] namespace. Loading degrades to zero on unparseable
/// values instead of failing: corrupted persisted state means the day starts
/// over, not that tracking stops.
pub struct DayStore<S> {
    store: S,
}

impl<S: KeyValueStore> DayStore<S> {
    pub fn new(store: S) -> Self {
        DayStore { store }
    }

    fn seconds_key(date: NaiveDate) -> String {
        format!("{}_seconds", date.format("%Y-%m-%d"))
    }

    fn sessions_key(date: NaiveDate) -> String {
        format!("{}_sessions", date.format("%Y-%m-%d"))
    }

    /// Writes both counters for the counters' date.
    pub fn save(&mut self, counters: &DailyCounters) -> Result<()> {
        self.store
            .set(STORE_NAMESPACE, &Self::seconds_key(counters.date), &counters.active_seconds.to_string())?;
        self.store
            .set(STORE_NAMESPACE, &Self::sessions_key(counters.date), &counters.session_count.to_string())?;
        Ok(())
    }

    /// Reads the counters stored for `date`.
    ///
    /// Missing entries load as zero; unparseable entries load as zero with a
    /// warning. Neither is an error.
    pub fn load(&self, date: NaiveDate) -> Result<DailyCounters> {
        let seconds_key = Self::seconds_key(date);
        let sessions_key = Self::sessions_key(date);

        let active_seconds = Self::parse_or_zero::<f64>(&seconds_key, self.store.get(STORE_NAMESPACE, &seconds_key)?);
        let session_count = Self::parse_or_zero::<u32>(&sessions_key, self.store.get(STORE_NAMESPACE, &sessions_key)?);

        Ok(DailyCounters {
            date,
            active_seconds,
            session_count,
        })
    }

    fn parse_or_zero<T: FromStr + Default>(key: &str, raw: Option<String>) -> T {
        match raw {
            Some(value) => value.parse::<T>().unwrap_or_else(|_| {
                msg_warning!(Message::StoredValueInvalid(key.to_string(), value.clone()));
                T::default()
            }),
            None => T::default(),
        }
    }
}
