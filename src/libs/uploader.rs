//! Upload gating and dispatch.
//!
//! Wraps the collector client with the rules deciding whether an attempt is
//! made at all: the enabled flag gates every trigger, the minimum-time
//! threshold gates only the periodic timer, and a missing player identity
//! skips the attempt with a warning. Failures are logged and dropped — no
//! retry queue, no effect on in-memory or persisted counters, and never any
//! backpressure on the tracking loop.

use crate::api::collector::{CollectorClient, PlaytimeReport};
use crate::libs::config::ServerConfig;
use crate::libs::counters::DailyCounters;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_warning};
use anyhow::Result;
use reqwest::StatusCode;
use thiserror::Error;

/// Why an upload attempt did not result in an accepted report.
///
/// The first three variants are gate skips (no network call was made); the
/// last two are genuine delivery failures.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("uploads are disabled in configuration")]
    Disabled,
    #[error("accumulated time is below the upload minimum")]
    BelowMinimum,
    #[error("player name is not configured")]
    MissingIdentity,
    #[error("collector returned status {0}")]
    UnexpectedStatus(StatusCode),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// The path that led to an upload attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadTrigger {
    /// Recurring timer; subject to the minimum-time threshold.
    Periodic,
    /// Day boundary; the expiring day is uploaded regardless of length.
    Rollover,
    /// Orderly shutdown flush.
    Shutdown,
    /// Explicit `playtrack upload` invocation.
    Manual,
}

impl UploadTrigger {
    /// Every trigger except the periodic timer bypasses the minimum-time
    /// gate. Nothing bypasses the enabled flag.
    pub fn bypasses_minimum(&self) -> bool {
        !matches!(self, UploadTrigger::Periodic)
    }
}

#[derive(Clone)]
pub struct Uploader {
    client: CollectorClient,
    config: ServerConfig,
}

impl Uploader {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        Ok(Self {
            client: CollectorClient::new(&config.url)?,
            config: config.clone(),
        })
    }

    /// Applies the gating rules and builds the payload without touching the
    /// network, so the decision logic is testable in isolation.
    pub fn check_gate(&self, counters: &DailyCounters, trigger: UploadTrigger) -> Result<PlaytimeReport, UploadError> {
        if !self.config.enabled {
            return Err(UploadError::Disabled);
        }
        if !trigger.bypasses_minimum() && counters.active_seconds < self.config.min_upload_seconds as f64 {
            return Err(UploadError::BelowMinimum);
        }
        let player_name = self
            .config
            .player_name
            .clone()
            .filter(|name| !name.is_empty())
            .ok_or(UploadError::MissingIdentity)?;

        Ok(PlaytimeReport {
            player_name,
            date: counters.date.format("%Y-%m-%d").to_string(),
            minutes_played: counters.minutes_played(),
            sessions: counters.session_count,
        })
    }

    /// One complete upload attempt. Success is exactly HTTP 201.
    pub async fn upload(&self, counters: &DailyCounters, trigger: UploadTrigger) -> Result<(), UploadError> {
        let report = self.check_gate(counters, trigger)?;
        let status = self.client.submit(&report).await?;
        if status != StatusCode::CREATED {
            return Err(UploadError::UnexpectedStatus(status));
        }
        Ok(())
    }

    /// Fire-and-forget upload on a counters snapshot: the network call runs
    /// on its own task and the outcome is only logged, so the tracking loop
    /// is never delayed by collector I/O.
    pub fn spawn(&self, counters: DailyCounters, trigger: UploadTrigger) {
        let uploader = self.clone();
        tokio::spawn(async move {
            let result = uploader.upload(&counters, trigger).await;
            log_outcome(result, &counters);
        });
    }
}

/// Logs one upload outcome. Gate skips are quiet debug notes except the
/// missing identity, which warrants a warning; delivery failures warn and
/// are otherwise dropped.
pub fn log_outcome(result: Result<(), UploadError>, counters: &DailyCounters) {
    match result {
        Ok(()) => msg_debug!(Message::UploadSucceeded(counters.date.format("%Y-%m-%d").to_string())),
        Err(UploadError::Disabled) => msg_debug!(Message::UploadSkippedDisabled),
        Err(UploadError::BelowMinimum) => msg_debug!(Message::UploadSkippedBelowMinimum),
        Err(UploadError::MissingIdentity) => msg_warning!(Message::UploadSkippedNoIdentity),
        Err(e) => msg_warning!(Message::UploadFailed(e.to_string())),
    }
}
