use crate::libs::counters::DailyCounters;
use crate::libs::formatter::format_playtime;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn today(counters: &DailyCounters) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "PLAYTIME", "SESSIONS"]);
        table.add_row(row![
            counters.date.format("%Y-%m-%d"),
            format_playtime(counters.active_seconds),
            counters.session_count
        ]);
        table.printstd();

        Ok(())
    }
}
