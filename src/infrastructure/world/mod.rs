//! Host world adapters

mod snapshot_world;

pub use snapshot_world::SnapshotWorld;
