//! Remote listing of available sample applications
//!
//! Queries the GitHub contents API for the sample-apps repository root and
//! returns the directory names, sorted.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{self, Result};

/// GitHub contents API endpoint for the sample-apps repository root
const LISTING_URL: &str = "https://api.github.com/repos/vespa-engine/sample-apps/contents/";

const LISTING_TIMEOUT: Duration = Duration::from_secs(30);

// GitHub rejects requests without a User-Agent
const USER_AGENT: &str = concat!("appseed/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct ContentEntry {
    name: String,
    #[serde(rename = "type")]
    kind: String,
}

/// List the names of available sample applications
pub fn list_sample_apps() -> Result<Vec<String>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(LISTING_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .map_err(error::listing_failed)?;

    let response = client
        .get(LISTING_URL)
        .send()
        .map_err(error::listing_failed)?;

    if response.status() != reqwest::StatusCode::OK {
        return Err(error::listing_failed(format!(
            "server returned status {}",
            response.status()
        )));
    }

    let body = response.text().map_err(error::listing_failed)?;
    parse_listing(&body)
}

/// Parse a GitHub contents payload into sorted directory names
fn parse_listing(body: &str) -> Result<Vec<String>> {
    let entries: Vec<ContentEntry> = serde_json::from_str(body)
        .map_err(|e| error::listing_failed(format!("unexpected response from GitHub: {}", e)))?;

    let mut apps: Vec<String> = entries
        .into_iter()
        .filter(|entry| entry.kind == "dir" && !entry.name.starts_with('.'))
        .map(|entry| entry.name)
        .collect();
    apps.sort();
    Ok(apps)
}
