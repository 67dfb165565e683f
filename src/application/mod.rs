// Application layer - Source contract, snapshot store and refresh loop
pub mod refresh_service;
pub mod snapshot_store;
pub mod vehicle_source;
