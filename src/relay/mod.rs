//! Relay Module
//!
//! Outbound side of the proxy: the upstream client plus the parsers used to
//! turn plugin responses into cacheable lists.

mod client;
pub mod parse;

pub use client::UpstreamClient;
