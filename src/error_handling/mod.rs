//! Error handling and failure statistics.
//!
//! This module provides:
//! - Error type definitions for configuration, probing and statistics
//! - Probe failure categorization
//! - Failure counters used when failed probes are skipped instead of aborting the run
//!
//! Every fatal condition is a variant of [`ProfileError`]; only the binary
//! decides to terminate the process.

mod stats;
mod types;

// Re-export public API
pub use stats::FailureStats;
pub use types::{
    ConfigError, InitializationError, ProbeError, ProbeErrorKind, ProfileError, StatsError,
};
