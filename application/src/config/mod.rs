//! Application-level configuration.
//!
//! - [`LatencyConfig`] — artificial delay per gateway operation

pub mod latency;

pub use latency::LatencyConfig;
