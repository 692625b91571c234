//! API clients for external services.
//!
//! Currently a single client: the playtime collector that receives daily
//! statistics uploads.

pub mod collector;

pub use collector::{CollectorClient, PlaytimeReport};
