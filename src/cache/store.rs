//! Cache Store Module
//!
//! Time-expiring key/list store consulted by the paginated endpoints before
//! relaying to the plugin.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::entry::current_timestamp_secs;
use crate::cache::{ListEntry, SWEEP_PROBABILITY};

// == List Cache ==
/// Key/list store with time-based expiry.
///
/// There is no size cap and no explicit clear; entries leave the map only by
/// expiring. Removal happens on lookup of the stale key itself, or through an
/// opportunistic sweep triggered on a random fraction of misses.
#[derive(Debug)]
pub struct ListCache {
    /// Key-value storage
    entries: HashMap<String, ListEntry>,
    /// Expiry window in seconds
    expiry_secs: u64,
}

impl ListCache {
    // == Constructor ==
    /// Creates a new ListCache with the given expiry window.
    pub fn new(expiry_secs: u64) -> Self {
        Self {
            entries: HashMap::new(),
            expiry_secs,
        }
    }

    // == Get ==
    /// Retrieves the list stored under `key`, if it is still fresh.
    ///
    /// An expired entry is removed and reported as absent. On the miss path a
    /// random draw (probability 0.1 per call, not a timer) additionally sweeps
    /// every expired entry out of the map.
    pub fn get(&mut self, key: &str) -> Option<Vec<String>> {
        let now = current_timestamp_secs();

        match self.entries.get(key) {
            Some(entry) if !entry.is_expired(now, self.expiry_secs) => {
                debug!(key, "cache hit");
                return Some(entry.items.clone());
            }
            Some(_) => {
                self.entries.remove(key);
                debug!(key, "cache entry expired");
            }
            None => {
                debug!(key, "cache miss");
            }
        }

        // Opportunistic cleanup (~10 % of misses)
        if fastrand::f64() < SWEEP_PROBABILITY {
            let removed = self.sweep_expired_at(now);
            if removed > 0 {
                debug!(removed, "cache sweep removed expired entries");
            }
        }

        None
    }

    // == Set ==
    /// Stores `items` under `key`, stamped with the current time.
    ///
    /// Any existing entry for the key is overwritten unconditionally.
    pub fn set(&mut self, key: String, items: Vec<String>) {
        self.entries.insert(key, ListEntry::new(items));
    }

    // == Sweep Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        self.sweep_expired_at(current_timestamp_secs())
    }

    fn sweep_expired_at(&mut self, now: u64) -> usize {
        let expiry = self.expiry_secs;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now, expiry));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries, live or not yet swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts an entry with an explicit timestamp. Test hook for expiry
    /// scenarios that must not sleep.
    #[cfg(test)]
    pub(crate) fn set_at(&mut self, key: String, items: Vec<String>, written_at: u64) {
        self.entries.insert(key, ListEntry { written_at, items });
    }
}
