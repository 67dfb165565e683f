// Source trait for upstream vehicle data
use crate::domain::snapshot::Snapshot;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("vehicle request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("failed to read vehicle response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("malformed vehicle payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("lastUpdate {0} is out of range")]
    Timestamp(i64),
}

#[async_trait]
pub trait VehicleSource: Send + Sync {
    /// Fetch one snapshot of active vehicles. No retries.
    async fn fetch(&self) -> Result<Snapshot, FetchError>;
}
