//! HTTP client module
//!
//! Provides the transport used by every catalog operation: one GET per call,
//! body returned as text, non-2xx statuses surfaced as errors.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
