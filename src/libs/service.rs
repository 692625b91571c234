//! The tracking service loop.
//!
//! One task owns the tracker and drains a channel of typed events, so state
//! transitions and heartbeats are strictly serialized — no two events are
//! ever processed concurrently and the counters need no synchronization.
//! A periodic timer triggers uploads on value snapshots only; the network
//! I/O itself runs on spawned tasks and can never delay event processing.

use crate::db::settings::SettingsDb;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::tracker::PlaytimeTracker;
use crate::libs::uploader::{log_outcome, UploadTrigger, Uploader};
use crate::{msg_info, msg_warning};
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use tokio::sync::{mpsc, oneshot};
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};

/// Typed events consumed by the tracking loop.
#[derive(Debug, Clone)]
pub enum TrackerEvent {
    /// A tracked session opened (login, connect, watcher start).
    Activation(NaiveDateTime),
    /// The session closed.
    Deactivation(NaiveDateTime),
    /// Periodic tick; `active` reports whether input was observed since the
    /// previous tick.
    Heartbeat { now: NaiveDateTime, active: bool },
}

pub struct TrackerService {
    tracker: PlaytimeTracker<SettingsDb>,
    uploader: Option<Uploader>,
    upload_interval: u64,
    events: mpsc::Receiver<TrackerEvent>,
}

impl TrackerService {
    pub fn new(config: &Config, events: mpsc::Receiver<TrackerEvent>) -> Result<Self> {
        let tracker_config = config.tracker.clone().unwrap_or_default();
        let server_config = config.server.clone().unwrap_or_default();
        let tracker = PlaytimeTracker::new(tracker_config, SettingsDb::new()?, Local::now().naive_local())?;
        let uploader = if server_config.url.is_empty() {
            None
        } else {
            Some(Uploader::new(&server_config)?)
        };
        Ok(TrackerService {
            tracker,
            uploader,
            upload_interval: server_config.upload_interval,
            events,
        })
    }

    /// Runs until the shutdown signal fires or every event sender is gone,
    /// then flushes the session and issues the final forced upload.
    pub async fn run(mut self, mut shutdown: oneshot::Receiver<()>) -> Result<()> {
        let period = Duration::from_secs(self.upload_interval.max(1));
        let mut upload_timer = interval_at(Instant::now() + period, period);
        upload_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                maybe_event = self.events.recv() => {
                    match maybe_event {
                        Some(event) => self.handle(event),
                        None => break,
                    }
                }
                _ = upload_timer.tick() => {
                    if let Some(uploader) = &self.uploader {
                        uploader.spawn(self.tracker.counters(), UploadTrigger::Periodic);
                    }
                }
                _ = &mut shutdown => break,
            }
        }

        self.flush().await
    }

    fn handle(&mut self, event: TrackerEvent) {
        let result = match event {
            TrackerEvent::Activation(now) => self.tracker.on_activation(now),
            TrackerEvent::Deactivation(now) => self.tracker.on_deactivation(now),
            TrackerEvent::Heartbeat { now, active } => match self.tracker.on_heartbeat(now, active) {
                Ok(Some(expired)) => {
                    // The expiring day gets exactly one forced upload.
                    if let Some(uploader) = &self.uploader {
                        uploader.spawn(expired, UploadTrigger::Rollover);
                    }
                    Ok(())
                }
                Ok(None) => Ok(()),
                Err(e) => Err(e),
            },
        };
        // Persistence trouble must never stop measurement; log and go on.
        if let Err(e) = result {
            msg_warning!(Message::CountersSaveFailed(e.to_string()));
        }
    }

    /// Orderly shutdown. The final upload is awaited so it is issued before
    /// process exit, but the client's request timeout bounds the wait.
    async fn flush(&mut self) -> Result<()> {
        msg_info!(Message::WatcherShuttingDown);
        let final_counters = self.tracker.flush(Local::now().naive_local())?;
        if let Some(uploader) = &self.uploader {
            let result = uploader.upload(&final_counters, UploadTrigger::Shutdown).await;
            log_outcome(result, &final_counters);
        }
        Ok(())
    }
}
