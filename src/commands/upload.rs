use crate::db::settings::SettingsDb;
use crate::libs::config::Config;
use crate::libs::counters::DayStore;
use crate::libs::messages::Message;
use crate::libs::uploader::{log_outcome, UploadTrigger, Uploader};
use crate::{msg_success, msg_warning};
use anyhow::Result;
use chrono::Local;

// Forces one upload attempt for today's counters. Bypasses the minimum-time
// gate like the shutdown path; the enabled flag still applies.
pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let server = match config.server {
        Some(server) if !server.url.is_empty() => server,
        _ => {
            msg_warning!(Message::UploadServerNotConfigured);
            return Ok(());
        }
    };

    let counters = DayStore::new(SettingsDb::new()?).load(Local::now().date_naive())?;
    let uploader = Uploader::new(&server)?;

    match uploader.upload(&counters, UploadTrigger::Manual).await {
        Ok(()) => msg_success!(Message::UploadSucceeded(counters.date.format("%Y-%m-%d").to_string())),
        Err(e) => log_outcome(Err(e), &counters),
    }

    Ok(())
}
