//! Cache Entry Module
//!
//! Defines the structure for individual cached list results.

use std::time::{SystemTime, UNIX_EPOCH};

// == List Entry ==
/// A cached list result with its write timestamp.
#[derive(Debug, Clone)]
pub struct ListEntry {
    /// Unix timestamp (seconds) at which the entry was written
    pub written_at: u64,
    /// The cached ordered sequence
    pub items: Vec<String>,
}

impl ListEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(items: Vec<String>) -> Self {
        Self {
            written_at: current_timestamp_secs(),
            items,
        }
    }

    // == Age ==
    /// Seconds elapsed since the entry was written.
    pub fn age(&self, now: u64) -> u64 {
        now.saturating_sub(self.written_at)
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived the expiry window.
    ///
    /// Boundary condition: an entry is fresh only while its age is strictly
    /// less than the window; at age == window it is already stale.
    pub fn is_expired(&self, now: u64, expiry_secs: u64) -> bool {
        self.age(now) >= expiry_secs
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in seconds.
pub fn current_timestamp_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs()
}
