//! # Playtrack - Daily Playtime Tracker
//!
//! A command-line utility that tracks daily active time, classifies idle
//! periods and reports per-day statistics to an optional collector server.
//!
//! ## Features
//!
//! - **Session Tracking**: Active seconds and session counts per calendar day
//! - **Idle Detection**: Away-from-keyboard periods are never credited
//! - **Day Rollover**: Totals snapshot, reset and upload at midnight
//! - **Restart Resume**: Daily totals persist across process restarts
//! - **Statistics Upload**: Best-effort reporting to a collector endpoint
//! - **Overlay Data**: Read-only snapshots for display consumers
//!
//! ## Usage
//!
//! ```rust,no_run
//! use playtrack::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
