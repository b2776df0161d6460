//! Fetches and validates the map snapshot.

use gloo_net::http::Request;
use thiserror::Error;

use crate::model::MapSnapshot;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("malformed map document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid map document: {0}")]
    Invalid(String),
}

pub async fn fetch_snapshot(url: &str) -> Result<MapSnapshot, LoadError> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(LoadError::Status(resp.status()));
    }
    let body = resp
        .text()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;
    parse_snapshot(&body)
}

/// Typed deserialization followed by value checks; either failure is terminal for the load.
pub fn parse_snapshot(body: &str) -> Result<MapSnapshot, LoadError> {
    let snapshot: MapSnapshot = serde_json::from_str(body)?;
    snapshot.validate().map_err(LoadError::Invalid)?;
    Ok(snapshot)
}
