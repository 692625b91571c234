//! Display implementation turning `Message` variants into terminal text.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigModuleTracker => "Tracker settings".to_string(),
            Message::ConfigModuleServer => "Collector server settings".to_string(),
            Message::ConfigModuleOverlay => "Overlay settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptIdleThreshold => "Idle threshold in seconds".to_string(),
            Message::PromptTickInterval => "Heartbeat interval in milliseconds".to_string(),
            Message::PromptServerEnabled => "Enable statistics uploads".to_string(),
            Message::PromptServerUrl => "Collector server URL".to_string(),
            Message::PromptPlayerName => "Player name reported to the collector".to_string(),
            Message::PromptUploadInterval => "Upload interval in seconds".to_string(),
            Message::PromptMinUploadSeconds => "Minimum accumulated seconds before a periodic upload".to_string(),
            Message::PromptShowOverlay => "Show the playtime overlay".to_string(),
            Message::PromptOverlayPosition => "Overlay position".to_string(),

            // === SESSION MESSAGES ===
            Message::SessionStarted(date) => format!("Session started for {}", date),
            Message::SessionEnded(playtime) => format!("Session ended, daily playtime is {}", playtime),
            Message::IdleStatusChanged(idle) => {
                if *idle {
                    "Idle".to_string()
                } else {
                    "Active".to_string()
                }
            }

            // === ROLLOVER MESSAGES ===
            Message::DayRolledOver(old, new) => format!("Day rolled over from {} to {}", old, new),

            // === STORE MESSAGES ===
            Message::StoredValueInvalid(key, value) => format!("Invalid stored value for '{}': '{}', defaulting to 0", key, value),
            Message::CountersSaveFailed(e) => format!("Failed to persist daily counters: {}", e),

            // === UPLOAD MESSAGES ===
            Message::UploadSucceeded(date) => format!("Uploaded playtime statistics for {}", date),
            Message::UploadSkippedDisabled => "Upload skipped: uploads are disabled".to_string(),
            Message::UploadSkippedBelowMinimum => "Upload skipped: accumulated time below minimum".to_string(),
            Message::UploadSkippedNoIdentity => "Upload skipped: player name is not configured".to_string(),
            Message::UploadFailed(e) => format!("Failed to upload playtime statistics: {}", e),
            Message::UploadServerNotConfigured => "Collector server is not configured, run 'playtrack init'".to_string(),

            // === WATCHER MESSAGES ===
            Message::WatcherStarted => "Playtime watcher started".to_string(),
            Message::WatcherReceivedSigterm => "Received SIGTERM, shutting down gracefully...".to_string(),
            Message::WatcherReceivedSigint => "Received SIGINT, shutting down gracefully...".to_string(),
            Message::WatcherReceivedCtrlC => "Received Ctrl+C, shutting down gracefully...".to_string(),
            Message::WatcherCtrlCListenFailed(e) => format!("Failed to listen for Ctrl+C: {}", e),
            Message::FailedToCreateSigtermHandler => "Failed to create SIGTERM handler".to_string(),
            Message::FailedToCreateSigintHandler => "Failed to create SIGINT handler".to_string(),
            Message::WatcherSignalHandlingNotSupported => "Signal handling is not supported on this platform".to_string(),
            Message::WatcherShuttingDown => "Shutting down, flushing session...".to_string(),
            Message::InputListenerFailed(e) => format!("Input listener failed: {}. Retrying in 1 second...", e),

            // === VIEW MESSAGES ===
            Message::TodayHeader(date) => format!("Playtime for {}", date),
        };
        write!(f, "{}", text)
    }
}
