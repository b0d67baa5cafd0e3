//! Defines the snapshot store trait.

use crate::Error;

/// Holds string values under string keys.
///
/// The ledger writes its whole snapshot under a single key after every change,
/// so implementers only need whole-value reads and overwrites.
pub trait SnapshotStore {
    /// Get the value stored under `key`, or `None` if nothing has been saved.
    fn load(&self, key: &str) -> Result<Option<String>, Error>;

    /// Replace the value stored under `key` with `value`.
    ///
    /// Implementers must either store all of `value` or leave the previous
    /// value untouched.
    fn save(&mut self, key: &str, value: &str) -> Result<(), Error>;
}
