// Domain layer - Vehicle data and the published snapshot
pub mod snapshot;
pub mod vehicle;
