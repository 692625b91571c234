//! The session and idle tracking state machine.
//!
//! Converts activation/deactivation signals and heartbeats into accumulated
//! active seconds and session counts. A session is open between activation
//! and deactivation; within a session the idle flag marks stretches with no
//! observed activity, which are never credited. All timestamps are supplied
//! by the caller, which keeps the machine deterministic and directly
//! testable.
//!
//! Persistence happens synchronously on every state transition (activation,
//! deactivation, rollover, flush) so the stored copy always reflects the
//! in-memory counters as of the last transition. Heartbeats mutate memory
//! only.

use crate::libs::config::TrackerConfig;
use crate::libs::counters::{DailyCounters, DayStore, KeyValueStore};
use crate::libs::formatter::format_playtime;
use crate::libs::messages::Message;
use crate::libs::rollover::DayRollover;
use crate::msg_debug;
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};

/// Transient per-session state; exactly one live instance while logged in.
#[derive(Debug, Clone)]
struct SessionState {
    session_start: NaiveDateTime,
    last_activity: NaiveDateTime,
    /// End of the window already paid out by heartbeat credits. Deactivation
    /// settles only the remainder past this point, so per-tick credit and
    /// logout credit partition the session without overlap.
    credited_until: NaiveDateTime,
}

/// Read-only value copy of tracker state for display and upload consumers.
#[derive(Debug, Clone)]
pub struct TrackerSnapshot {
    pub date: NaiveDate,
    pub active_seconds: f64,
    pub session_count: u32,
    pub idle: bool,
    pub logged_in: bool,
}

impl TrackerSnapshot {
    /// The daily total in the overlay's compact form ("2h 05m" / "45m").
    pub fn formatted_playtime(&self) -> String {
        format_playtime(self.active_seconds)
    }
}

pub struct PlaytimeTracker<S> {
    config: TrackerConfig,
    store: DayStore<S>,
    counters: DailyCounters,
    session: Option<SessionState>,
    idle: bool,
    rollover: DayRollover,
}

impl<S: KeyValueStore> PlaytimeTracker<S> {
    /// Creates a tracker for the current day, resuming any persisted totals
    /// so restarts within a day keep accumulating instead of starting over.
    pub fn new(config: TrackerConfig, store: S, now: NaiveDateTime) -> Result<Self> {
        let today = now.date();
        let store = DayStore::new(store);
        let counters = store.load(today)?;
        Ok(PlaytimeTracker {
            config,
            store,
            counters,
            session: None,
            idle: false,
            rollover: DayRollover::new(today),
        })
    }

    /// Starts a session. A second activation while a session is open is a
    /// no-op so sessions are never double-counted.
    pub fn on_activation(&mut self, now: NaiveDateTime) -> Result<()> {
        if self.session.is_some() {
            return Ok(());
        }
        self.session = Some(SessionState {
            session_start: now,
            last_activity: now,
            credited_until: now,
        });
        self.idle = false;
        self.counters.session_count += 1;
        msg_debug!(Message::SessionStarted(self.counters.date.format("%Y-%m-%d").to_string()));
        self.store.save(&self.counters)
    }

    /// Ends the open session, crediting time up to the last confirmed
    /// activity. Deactivation while idle credits nothing; deactivation while
    /// logged out is a no-op.
    pub fn on_deactivation(&mut self, now: NaiveDateTime) -> Result<()> {
        let Some(session) = self.session.take() else {
            return Ok(());
        };
        if !self.idle {
            // Settle the tail the heartbeats have not paid out yet, capped at
            // the last confirmed activity. Clamped because credited ticks can
            // outrun the last activity while input has stopped but the idle
            // threshold has not been reached.
            let tail_seconds = seconds_between(session.credited_until, now);
            let active_tail = seconds_between(session.credited_until, session.last_activity);
            self.counters.active_seconds += active_tail.min(tail_seconds).max(0.0);
        }
        self.idle = false;
        msg_debug!(Message::SessionEnded(format_playtime(self.counters.active_seconds)));
        self.store.save(&self.counters)
    }

    /// Processes one heartbeat.
    ///
    /// The day-boundary check runs first so no seconds leak across midnight.
    /// Idle is recomputed against the activity time recorded before this
    /// heartbeat, and strictly before the crediting decision — the tick that
    /// crosses the idle threshold is never credited.
    ///
    /// Returns the expired day's counters when this heartbeat crossed a
    /// calendar-day boundary; the caller owes that snapshot one forced
    /// upload. Heartbeats while logged out are ignored.
    pub fn on_heartbeat(&mut self, now: NaiveDateTime, active: bool) -> Result<Option<DailyCounters>> {
        if self.session.is_none() {
            return Ok(None);
        }

        let expired = self.roll_day(now.date())?;

        let Some(session) = self.session.as_mut() else {
            return Ok(expired);
        };
        let previous_activity = session.last_activity;
        if active {
            session.last_activity = now;
        }

        let idle = seconds_between(previous_activity, now) >= self.config.idle_threshold as f64;
        if !idle {
            session.credited_until = now;
        }

        let was_idle = self.idle;
        self.idle = idle;
        if was_idle != idle {
            msg_debug!(Message::IdleStatusChanged(idle));
        }

        if !idle {
            self.counters.active_seconds += self.config.tick_interval as f64 / 1000.0;
        }

        Ok(expired)
    }

    /// Orderly shutdown: ends any open session and persists, returning the
    /// final counters for the forced upload.
    pub fn flush(&mut self, now: NaiveDateTime) -> Result<DailyCounters> {
        if self.session.is_some() {
            self.on_deactivation(now)?;
        } else {
            self.store.save(&self.counters)?;
        }
        Ok(self.counters.clone())
    }

    /// Value copy of the current state for display and periodic uploads.
    pub fn snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            date: self.counters.date,
            active_seconds: self.counters.active_seconds,
            session_count: self.counters.session_count,
            idle: self.idle,
            logged_in: self.session.is_some(),
        }
    }

    /// The current day's counters as a value copy.
    pub fn counters(&self) -> DailyCounters {
        self.counters.clone()
    }

    fn roll_day(&mut self, today: NaiveDate) -> Result<Option<DailyCounters>> {
        let Some(expired_date) = self.rollover.check(today) else {
            return Ok(None);
        };
        // Counters still carry the old date here; persist them under the old
        // key before resetting for the new day.
        self.store.save(&self.counters)?;
        let expired = self.counters.clone();
        self.counters = DailyCounters::new(today);
        msg_debug!(Message::DayRolledOver(
            expired_date.format("%Y-%m-%d").to_string(),
            today.format("%Y-%m-%d").to_string()
        ));
        Ok(Some(expired))
    }
}

fn seconds_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_milliseconds() as f64 / 1000.0
}
