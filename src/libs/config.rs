//! Configuration management for the playtrack application.
//!
//! Handles the JSON configuration file stored in the platform application
//! data directory and the interactive setup wizard. Configuration is split
//! into optional modules so users only configure what they use:
//!
//! - **Tracker**: idle threshold and heartbeat cadence
//! - **Server**: collector endpoint, identity and upload gating
//! - **Overlay**: display preferences for the playtime readout
//!
//! Only the server URL and the enabled flag affect core tracking behavior;
//! everything else tunes detection timing or presentation.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable module in the application.
///
/// Used during interactive setup to display available modules and route the
/// user's selection to the matching setup block.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Session tracking configuration.
///
/// The tick interval is an assumption about the heartbeat cadence, not a
/// measured value: every credited heartbeat adds exactly one interval's
/// worth of seconds to the daily total.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrackerConfig {
    /// Inactivity duration in seconds after which the session counts as idle.
    ///
    /// Time spent idle is never credited to the daily total. The default of
    /// five minutes matches typical away-from-keyboard detection.
    pub idle_threshold: u64,

    /// Heartbeat interval in milliseconds.
    ///
    /// Each non-idle heartbeat credits `tick_interval / 1000` seconds of
    /// playtime, so this value must match the cadence of the heartbeat
    /// source.
    pub tick_interval: u64,
}

/// Collector server configuration for statistics upload.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Master switch for uploads. Disabled by default for privacy; no
    /// network call is made under any trigger while this is false.
    pub enabled: bool,

    /// Base URL of the collector server, e.g. `https://stats.example.org`.
    /// The report endpoint path is appended by the client.
    pub url: String,

    /// Player name included in upload payloads. Uploads are skipped with a
    /// warning while this is unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,

    /// Interval in seconds between periodic upload attempts.
    pub upload_interval: u64,

    /// Minimum accumulated active seconds before a periodic upload fires.
    /// Rollover, shutdown and manual uploads bypass this gate.
    pub min_upload_seconds: u64,
}

/// Placement of the playtime overlay for display consumers.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum OverlayPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl OverlayPosition {
    const ALL: [OverlayPosition; 4] = [
        OverlayPosition::TopLeft,
        OverlayPosition::TopRight,
        OverlayPosition::BottomLeft,
        OverlayPosition::BottomRight,
    ];

    fn label(&self) -> &'static str {
        match self {
            OverlayPosition::TopLeft => "Top left",
            OverlayPosition::TopRight => "Top right",
            OverlayPosition::BottomLeft => "Bottom left",
            OverlayPosition::BottomRight => "Bottom right",
        }
    }
}

/// Overlay display preferences.
///
/// Consumed by rendering layers only; tracking behavior does not depend on
/// these values.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OverlayConfig {
    pub show: bool,
    pub position: OverlayPosition,
}

/// Main configuration container for the entire application.
///
/// Each section is optional so that unconfigured modules are omitted from
/// the JSON file entirely. A missing server section means uploads are
/// disabled.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Session tracking thresholds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracker: Option<TrackerConfig>,

    /// Collector server and upload gating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,

    /// Overlay display preferences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<OverlayConfig>,
}

impl Default for TrackerConfig {
    /// Default values:
    /// - 300 seconds (5 minutes) idle threshold
    /// - 600 ms heartbeat interval
    fn default() -> Self {
        TrackerConfig {
            idle_threshold: 300,
            tick_interval: 600,
        }
    }
}

impl Default for ServerConfig {
    /// Uploads are disabled by default; the remaining values are the
    /// collector's standard cadence (5 minute interval, 1 minute floor).
    fn default() -> Self {
        ServerConfig {
            enabled: false,
            url: String::new(),
            player_name: None,
            upload_interval: 300,
            min_upload_seconds: 60,
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        OverlayConfig {
            show: true,
            position: OverlayPosition::TopLeft,
        }
    }
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// Returns a default configuration when no file exists yet, so the
    /// application runs without any setup. A present but unparseable file is
    /// an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the current configuration with pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Presents a multi-select of modules, then prompts for each selected
    /// module's parameters with the current values as defaults. Returns the
    /// updated configuration for saving.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = vec![
            ConfigModule {
                key: "tracker".to_string(),
                name: "Tracker".to_string(),
            },
            ConfigModule {
                key: "server".to_string(),
                name: "Server".to_string(),
            },
            ConfigModule {
                key: "overlay".to_string(),
                name: "Overlay".to_string(),
            },
        ];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "tracker" => {
                    let default = config.tracker.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleTracker);
                    config.tracker = Some(TrackerConfig {
                        idle_threshold: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptIdleThreshold.to_string())
                            .default(default.idle_threshold)
                            .interact_text()?,
                        tick_interval: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTickInterval.to_string())
                            .default(default.tick_interval)
                            .interact_text()?,
                    });
                }
                "server" => {
                    let default = config.server.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleServer);
                    let player_name: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptPlayerName.to_string())
                        .default(default.player_name.clone().unwrap_or_default())
                        .allow_empty(true)
                        .interact_text()?;
                    config.server = Some(ServerConfig {
                        enabled: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptServerEnabled.to_string())
                            .default(default.enabled)
                            .interact()?,
                        url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptServerUrl.to_string())
                            .default(default.url)
                            .interact_text()?,
                        player_name: if player_name.is_empty() { None } else { Some(player_name) },
                        upload_interval: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptUploadInterval.to_string())
                            .default(default.upload_interval)
                            .interact_text()?,
                        min_upload_seconds: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptMinUploadSeconds.to_string())
                            .default(default.min_upload_seconds)
                            .interact_text()?,
                    });
                }
                "overlay" => {
                    let default = config.overlay.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleOverlay);
                    let labels: Vec<&str> = OverlayPosition::ALL.iter().map(|p| p.label()).collect();
                    let initial = OverlayPosition::ALL.iter().position(|p| *p == default.position).unwrap_or(0);
                    let selected = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptOverlayPosition.to_string())
                        .items(&labels)
                        .default(initial)
                        .interact()?;
                    config.overlay = Some(OverlayConfig {
                        show: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptShowOverlay.to_string())
                            .default(default.show)
                            .interact()?,
                        position: OverlayPosition::ALL[selected],
                    });
                }
                _ => {} // Unknown module keys are safely ignored
            }
        }

        Ok(config)
    }
}
