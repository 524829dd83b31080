//! JADX Tool Server - REST bridge for the JADX-AI plugin
//!
//! Republishes the plugin's local HTTP API as named GET endpoints, adding
//! offset/count pagination and a short-lived cache for the list calls.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod relay;

pub use api::AppState;
pub use config::Config;
