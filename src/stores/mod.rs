//! Key-value stores that hold the persisted ledger snapshot.

mod memory;
mod snapshot;
mod sqlite;

pub use memory::MemorySnapshotStore;
pub use snapshot::SnapshotStore;
pub use sqlite::{SQLiteSnapshotStore, create_key_value_table};
