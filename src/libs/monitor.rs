//! Input activity monitor and heartbeat source.
//!
//! Listens for keyboard, mouse and wheel events on a dedicated thread and
//! emits one heartbeat per tick interval into the tracking service channel.
//! Each heartbeat carries whether input was observed since the previous
//! tick, which is what the tracker's idle classification keys off.

use crate::libs::config::TrackerConfig;
use crate::libs::messages::Message;
use crate::libs::service::TrackerEvent;
use crate::msg_warning;
use anyhow::Result;
use chrono::Local;
use parking_lot::Mutex;
use rdev::{listen, Event, EventType};
use std::sync::Arc;
use tokio::sync::mpsc::Sender;
use tokio::time::{self, Duration, Instant};

pub struct Monitor {
    config: TrackerConfig,
    last_input: Arc<Mutex<Instant>>, // Tracks the time of the last user input.
    events: Sender<TrackerEvent>,
}

impl Monitor {
    pub fn new(config: TrackerConfig, events: Sender<TrackerEvent>) -> Self {
        let last_input = Arc::new(Mutex::new(Instant::now()));
        Monitor { config, last_input, events }
    }

    // Runs the heartbeat loop.
    //
    // Spawns a separate thread to listen for keyboard, mouse, and scroll
    // events using rdev, restarting the listener on error to ensure
    // continuous monitoring. The loop itself never touches tracker state; it
    // only emits events and stops once the service side hangs up.
    pub async fn run(self) -> Result<()> {
        let shared_last_input = self.last_input.clone();
        std::thread::spawn(move || {
            loop {
                let last_input_for_listener = shared_last_input.clone();
                if let Err(e) = listen(move |event: Event| match event.event_type {
                    EventType::KeyPress(_) | EventType::ButtonPress(_) | EventType::Wheel { .. } => {
                        *last_input_for_listener.lock() = Instant::now();
                    }
                    _ => {}
                }) {
                    msg_warning!(Message::InputListenerFailed(format!("{:?}", e)));
                    std::thread::sleep(Duration::from_secs(1));
                } else {
                    // listen only returns without error if the platform has no
                    // event source at all; nothing left to monitor then.
                    break;
                }
            }
        });

        let tick = Duration::from_millis(self.config.tick_interval);
        loop {
            time::sleep(tick).await;
            let active = self.last_input.lock().elapsed() < tick;
            let heartbeat = TrackerEvent::Heartbeat {
                now: Local::now().naive_local(),
                active,
            };
            if self.events.send(heartbeat).await.is_err() {
                break;
            }
        }
        Ok(())
    }
}
