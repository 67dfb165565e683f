// Application state for HTTP handlers
use crate::application::snapshot_store::SnapshotStore;

#[derive(Clone)]
pub struct AppState {
    pub store: SnapshotStore,
}
