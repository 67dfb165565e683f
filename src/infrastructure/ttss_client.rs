// TTSS vehicleinfo client
use crate::application::vehicle_source::{FetchError, VehicleSource};
use crate::domain::snapshot::Snapshot;
use crate::domain::vehicle::VehiclesResponse;
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TtssClient {
    url: String,
    client: reqwest::Client,
}

impl TtssClient {
    pub fn new(url: String, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::Network)?;

        Ok(Self { url, client })
    }
}

#[async_trait]
impl VehicleSource for TtssClient {
    async fn fetch(&self) -> Result<Snapshot, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(FetchError::Network)?;

        let body = response.bytes().await.map_err(FetchError::Body)?;
        let data: VehiclesResponse = serde_json::from_slice(&body)?;
        let last_update = data.last_update;

        Snapshot::from_response(data).ok_or(FetchError::Timestamp(last_update))
    }
}
