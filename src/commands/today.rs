use crate::db::settings::SettingsDb;
use crate::libs::counters::DayStore;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use chrono::Local;

// Displays the current day's persisted counters.
pub fn cmd() -> Result<()> {
    let today = Local::now().date_naive();
    let counters = DayStore::new(SettingsDb::new()?).load(today)?;

    msg_print!(Message::TodayHeader(today.format("%Y-%m-%d").to_string()));
    View::today(&counters)?;

    Ok(())
}
