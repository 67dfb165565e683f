// Refresh service - Periodic fetch-and-replace of the published snapshot
use crate::application::snapshot_store::SnapshotStore;
use crate::application::vehicle_source::{FetchError, VehicleSource};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

pub struct RefreshService {
    source: Arc<dyn VehicleSource>,
    store: SnapshotStore,
    period: Duration,
    consecutive_failures: AtomicU64,
}

impl RefreshService {
    pub fn new(source: Arc<dyn VehicleSource>, store: SnapshotStore, period: Duration) -> Self {
        Self {
            source,
            store,
            period,
            consecutive_failures: AtomicU64::new(0),
        }
    }

    /// Initial fetch. The caller must not start serving if this fails.
    pub async fn prime(&self) -> Result<(), FetchError> {
        let snapshot = self.source.fetch().await?;
        tracing::info!(
            "Initial snapshot loaded: {} vehicles at {}",
            snapshot.vehicles.len(),
            snapshot.last_update
        );
        self.store.replace(snapshot).await;
        Ok(())
    }

    /// One poll. On failure the stored snapshot is left as it was.
    pub async fn refresh_once(&self) -> bool {
        match self.source.fetch().await {
            Ok(snapshot) => {
                tracing::info!(
                    "Update succeeded: {} vehicles at {}",
                    snapshot.vehicles.len(),
                    snapshot.last_update
                );
                self.store.replace(snapshot).await;
                self.consecutive_failures.store(0, Ordering::Relaxed);
                true
            }
            Err(e) => {
                let failures = self.consecutive_failures.fetch_add(1, Ordering::Relaxed) + 1;
                tracing::warn!("Update failed ({} in a row): {}", failures, e);
                false
            }
        }
    }

    /// Start the background loop. First poll happens one period from now.
    pub fn spawn(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(async move {
            tracing::info!("Starting update loop every {:?}", self.period);

            let mut ticker = interval_at(Instant::now() + self.period, self.period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                self.refresh_once().await;
            }
        })
    }
}
