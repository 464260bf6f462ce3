//! Persistence: snapshot records and the file-backed save store.

pub mod snapshot;
pub mod store;

pub use snapshot::{CreatureSnapshot, SnapshotError};
pub use store::{SaveStore, StoreError};
