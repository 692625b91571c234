//! HTTP client for the playtime collector server.
//!
//! One endpoint, one verb: aggregated daily statistics are POSTed as JSON
//! and the collector answers 201 on acceptance. The client carries a short
//! request timeout so a slow or unreachable collector can never hold up a
//! caller longer than that bound.

use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;

const PLAYTIME_ENDPOINT: &str = "api/playtime";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Upload payload, built fresh for every attempt and never stored.
#[derive(Debug, Clone, Serialize)]
pub struct PlaytimeReport {
    pub player_name: String,
    pub date: String,
    pub minutes_played: u64,
    pub sessions: u32,
}

#[derive(Clone)]
pub struct CollectorClient {
    client: Client,
    base_url: String,
}

impl CollectorClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS)).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Submits one report and returns the response status. The caller
    /// decides what any non-201 status means; transport errors surface as
    /// `reqwest::Error`.
    pub async fn submit(&self, report: &PlaytimeReport) -> Result<StatusCode, reqwest::Error> {
        let url = format!("{}/{}", self.base_url, PLAYTIME_ENDPOINT);
        let res = self.client.post(url).json(report).send().await?;
        Ok(res.status())
    }
}
