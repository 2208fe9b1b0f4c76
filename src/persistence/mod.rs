//! Snapshot persistence.
//!
//! Engine state is plain serializable data. `EngineSnapshot` captures it,
//! `SnapshotStore` keeps it. Restoring validates every player's invariants
//! before any state is accepted.

pub mod snapshot;
pub mod store;

pub use snapshot::{EngineSnapshot, PlayerSnapshot};
pub use store::{FileStore, InMemoryStore, SnapshotStore};
