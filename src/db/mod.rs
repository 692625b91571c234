//! Persistence layer built on SQLite.
//!
//! Provides the database connection wrapper and the key-value settings store
//! the tracker persists its daily counters through. The database file lives
//! in the platform application data directory next to the configuration.

pub mod db;
pub mod settings;
