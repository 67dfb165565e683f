// Shared holder of the latest published snapshot
use crate::domain::snapshot::Snapshot;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Cloneable handle onto the current snapshot.
///
/// The snapshot itself is immutable and swapped whole, so a reader keeps a
/// consistent `Arc<Snapshot>` even if a replace lands while it serializes.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    inner: Arc<RwLock<Arc<Snapshot>>>,
}

impl SnapshotStore {
    #[cfg(test)]
    pub fn new(initial: Snapshot) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(initial))),
        }
    }

    pub async fn replace(&self, snapshot: Snapshot) {
        let next = Arc::new(snapshot);
        *self.inner.write().await = next;
    }

    pub async fn current(&self) -> Arc<Snapshot> {
        self.inner.read().await.clone()
    }
}
