//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including timeouts, ports and CLI defaults.

/// URL profiled when `--url` is not given.
pub const DEFAULT_URL: &str = "https://my-worker.derekli2.workers.dev/links";

/// Number of requests issued when `--profile` is not given.
pub const DEFAULT_REQUEST_COUNT: i64 = 1;

/// Standard HTTPS port, used when the URL carries no explicit port.
pub const HTTPS_PORT: u16 = 443;

/// Default bound, in seconds, on the TCP connect and, separately, on the
/// TLS handshake.
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Initial capacity of the per-connection read buffer.
pub const READ_BUFFER_CAPACITY: usize = 8 * 1024;

/// Minimum number of measurements the statistics need.
/// A single sample has no meaningful median or spread.
pub const MIN_SAMPLES_FOR_STATS: usize = 2;

// HTTP status classes
pub const HTTP_SUCCESS_MIN: u16 = 200;
pub const HTTP_SUCCESS_MAX: u16 = 299;

/// Status recorded for a response without a recognisable status line.
pub const STATUS_UNSET: u16 = 0;

/// Divider line opening the plain-text profile report.
pub const REPORT_HEADER: &str = "------------Profile Results-------------";
/// Divider line closing the plain-text profile report.
pub const REPORT_FOOTER: &str = "----------------------------------------";
