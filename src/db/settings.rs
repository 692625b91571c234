//! SQLite-backed key-value settings store.
//!
//! Implements the persistence interface the tracker saves its daily counters
//! through. Values are plain strings grouped by namespace; the daily counter
//! keys are date-qualified (`"{date}_seconds"`, `"{date}_sessions"`) so one
//! table holds every day's totals.

use crate::db::db::Db;
use crate::libs::counters::KeyValueStore;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

/// SQL schema for the settings table.
const SCHEMA_SETTINGS: &str = "CREATE TABLE IF NOT EXISTS settings (
    namespace TEXT NOT NULL,
    key TEXT NOT NULL,
    value TEXT NOT NULL,
    PRIMARY KEY (namespace, key)
)";

/// Insert a value, replacing any previous value for the same key.
const UPSERT_SETTING: &str = "INSERT INTO settings (namespace, key, value) VALUES (?1, ?2, ?3)
    ON CONFLICT (namespace, key) DO UPDATE SET value = excluded.value";

const SELECT_SETTING: &str = "SELECT value FROM settings WHERE namespace = ?1 AND key = ?2";

pub struct SettingsDb {
    conn: Connection,
}

impl SettingsDb {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_SETTINGS, [])?;
        Ok(SettingsDb { conn: db.conn })
    }
}

impl KeyValueStore for SettingsDb {
    fn set(&mut self, namespace: &str, key: &str, value: &str) -> Result<()> {
        self.conn.execute(UPSERT_SETTING, params![namespace, key, value])?;
        Ok(())
    }

    fn get(&self, namespace: &str, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(SELECT_SETTING, params![namespace, key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }
}
