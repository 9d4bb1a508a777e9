//! Scenario registry.
//!
//! Each scenario names one precomputed strategy table and decides which
//! selection fields apply to it: whether the first action is a serve, whether
//! spin is tracked, and whether a per-player usage table exists.
mod config;
mod scenario;

pub use config::*;
pub use scenario::*;
