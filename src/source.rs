//! Dataset loading.
//!
//! The aggregator's contract is an in-memory record sequence; this
//! module is the boundary that produces one, either from a local JSON
//! file or from an HTTP endpoint serving the same shapes. Both accept
//! a bare JSON array of records or a `{"data": [...]}` envelope (the
//! shape the mock API serves).

use crate::models::ComplaintRecord;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors from loading a dataset.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The dataset file could not be read.
    #[error("failed to read dataset file: {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The HTTP request failed or returned a non-success status.
    #[error("dataset request failed")]
    Http(#[from] reqwest::Error),
    /// The payload was not valid dataset JSON.
    #[error("failed to parse dataset JSON")]
    Parse(#[from] serde_json::Error),
}

/// Accepted payload shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DatasetPayload {
    Records(Vec<ComplaintRecord>),
    Envelope { data: Vec<ComplaintRecord> },
}

impl DatasetPayload {
    fn into_records(self) -> Vec<ComplaintRecord> {
        match self {
            DatasetPayload::Records(records) => records,
            DatasetPayload::Envelope { data } => data,
        }
    }
}

/// Load records from a local JSON file.
pub fn load_file(path: &Path) -> Result<Vec<ComplaintRecord>, SourceError> {
    debug!("Reading dataset file: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let payload: DatasetPayload = serde_json::from_str(&content)?;
    let records = payload.into_records();
    info!("Loaded {} records from {}", records.len(), path.display());

    Ok(records)
}

/// Fetch records from an HTTP endpoint.
pub async fn fetch_url(url: &str, timeout_seconds: u64) -> Result<Vec<ComplaintRecord>, SourceError> {
    debug!("Fetching dataset from: {}", url);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()?;

    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let payload: DatasetPayload = serde_json::from_str(&body)?;
    let records = payload.into_records();
    info!("Fetched {} records from {}", records.len(), url);

    Ok(records)
}
