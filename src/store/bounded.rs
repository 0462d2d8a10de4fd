//! Bounded Store Module
//!
//! Mutex-guarded HashMap with a fixed entry capacity.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::store::StoreStats;

// == Bounded Store ==
/// Key/value storage that refuses inserts once `capacity` entries are live.
///
/// Every operation runs inside one critical section over the whole map, so
/// callers can share a single instance across threads behind an `Arc`.
#[derive(Debug)]
pub struct BoundedStore {
    /// Key-value storage
    entries: Mutex<HashMap<String, String>>,
    /// Maximum number of live entries, fixed at construction
    capacity: usize,
}

impl BoundedStore {
    // == Constructor ==
    /// Creates an empty store that holds at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            capacity,
        }
    }

    // == Insert ==
    /// Stores a key-value pair, overwriting any previous value for the key.
    ///
    /// Returns `false` without touching the map when the store is full. The
    /// capacity check comes first, so a full store also rejects overwrites of
    /// keys it already holds.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let mut entries = self.lock();
        if entries.len() >= self.capacity {
            return false;
        }
        entries.insert(key.into(), value.into());
        true
    }

    // == Fetch ==
    /// Returns a copy of the value stored under `key`, if any.
    pub fn fetch(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    // == Remove ==
    /// Deletes `key`. Returns whether an entry was present.
    pub fn remove(&self, key: &str) -> bool {
        self.lock().remove(key).is_some()
    }

    // == Stats ==
    /// Returns a snapshot of the current fill level.
    pub fn stats(&self) -> StoreStats {
        StoreStats::new(self.len(), self.capacity)
    }

    // == Length ==
    /// Returns the current number of live entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Returns the configured maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // Every mutation is a single HashMap call, so a poisoned map is still
    // consistent and safe to keep using.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
