//! A snapshot store that only lives as long as the process.

use std::collections::HashMap;

use crate::{Error, stores::SnapshotStore};

/// Stores snapshots in a hash map.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    entries: HashMap<String, String>,
}

impl MemorySnapshotStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
