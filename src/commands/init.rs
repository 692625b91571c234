//! Application configuration initialization command.
//!
//! Runs the interactive setup wizard that walks through the tracker, server
//! and overlay modules and writes the resulting configuration file.

use crate::{libs::config::Config, libs::messages::Message, msg_success};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
