//! The watch command: runs the tracking loop in the foreground.
//!
//! Wires the input monitor, the tracking service and signal handling
//! together. A session opens when the watcher starts and closes on
//! shutdown; heartbeats from the monitor flow in between. SIGTERM/SIGINT
//! (Ctrl+C on Windows) trigger the orderly shutdown flush with its final
//! forced upload.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::monitor::Monitor;
use crate::libs::service::{TrackerEvent, TrackerService};
use crate::msg_info;
use anyhow::Result;
use chrono::Local;
use tokio::sync::{mpsc, oneshot};

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;

    let (event_tx, event_rx) = mpsc::channel(64);
    let service = TrackerService::new(&config, event_rx)?;

    // The watcher session opens as soon as the process is up.
    event_tx.send(TrackerEvent::Activation(Local::now().naive_local())).await?;

    let monitor = Monitor::new(config.tracker.clone().unwrap_or_default(), event_tx.clone());
    tokio::spawn(monitor.run());

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    spawn_signal_handler(shutdown_tx);

    msg_info!(Message::WatcherStarted);
    service.run(shutdown_rx).await
}

/// Spawns the platform signal handler that resolves the shutdown channel.
fn spawn_signal_handler(shutdown_tx: oneshot::Sender<()>) {
    #[cfg(unix)]
    {
        tokio::spawn(async move {
            use tokio::signal::unix::{signal, SignalKind};

            let mut sigterm = signal(SignalKind::terminate()).expect(&Message::FailedToCreateSigtermHandler.to_string());
            let mut sigint = signal(SignalKind::interrupt()).expect(&Message::FailedToCreateSigintHandler.to_string());

            tokio::select! {
                _ = sigterm.recv() => {
                    msg_info!(Message::WatcherReceivedSigterm);
                }
                _ = sigint.recv() => {
                    msg_info!(Message::WatcherReceivedSigint);
                }
            }

            let _ = shutdown_tx.send(());
        });
    }

    #[cfg(windows)]
    {
        use crate::msg_error;

        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    msg_info!(Message::WatcherReceivedCtrlC);
                }
                Err(e) => {
                    msg_error!(Message::WatcherCtrlCListenFailed(e.to_string()));
                }
            }

            let _ = shutdown_tx.send(());
        });
    }

    #[cfg(not(any(unix, windows)))]
    {
        use crate::msg_warning;

        msg_warning!(Message::WatcherSignalHandlingNotSupported);
        // Keep the sender alive so a missing signal source does not read as
        // an immediate shutdown.
        tokio::spawn(async move {
            let _shutdown_tx = shutdown_tx;
            std::future::pending::<()>().await;
        });
    }
}
