//! Configuration Module
//!
//! Fixed wiring constants for the JADX-AI plugin plus the listener port.

use std::env;

// == Constants ==
/// Base address of the JADX-AI plugin HTTP API.
pub const UPSTREAM_BASE_URL: &str = "http://127.0.0.1:8650";

/// Seconds after which a cached list is considered stale.
pub const CACHE_EXPIRY_SECS: u64 = 300;

/// Per-request timeout for upstream calls, in seconds.
pub const UPSTREAM_TIMEOUT_SECS: u64 = 60;

/// Server configuration parameters.
///
/// The upstream base address and the cache expiry window are fixed constants
/// in this version; only the listener port comes from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { server_port: 8000 }
    }
}
