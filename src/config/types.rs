//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::num::NonZeroUsize;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_REQUEST_COUNT, DEFAULT_URL, TCP_CONNECT_TIMEOUT_SECS};
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Format of the result written to standard output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-layout text report (default)
    Plain,
    /// One JSON document
    Json,
}

/// What the dispatcher does when a single probe fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailurePolicy {
    /// The first failed probe ends the whole run; sibling probes are aborted.
    Abort,
    /// Failed probes are logged and left out of the measurement set.
    Skip,
}

/// Run configuration.
///
/// Parsed once from the command line (or built programmatically through
/// `Default`) and passed by reference into the run. Nothing reads flags
/// after this point.
///
/// # Examples
///
/// ```no_run
/// use tls_profiler::Config;
///
/// let config = Config {
///     url: "https://example.com/".to_string(),
///     profile: 20,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tls_profiler",
    version,
    about = "Profiles a URL with raw HTTP/1.0 requests over TLS"
)]
pub struct Config {
    /// The URL to be tested
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Number of requests to be made
    #[arg(long, default_value_t = DEFAULT_REQUEST_COUNT, allow_negative_numbers = true)]
    pub profile: i64,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Format of the body/report written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output_format: OutputFormat,

    /// Whether one failed probe aborts the run or is skipped
    #[arg(long, value_enum, default_value_t = FailurePolicy::Abort)]
    pub failure_policy: FailurePolicy,

    /// Upper bound on probes in flight at once (unbounded when absent)
    #[arg(long)]
    pub max_in_flight: Option<NonZeroUsize>,

    /// TCP connect and TLS handshake timeout in seconds
    #[arg(long, default_value_t = TCP_CONNECT_TIMEOUT_SECS)]
    pub connect_timeout_secs: u64,
}

impl Config {
    /// Returns the validated number of requests.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRequestCount` for zero or negative counts.
    pub fn request_count(&self) -> Result<usize, ConfigError> {
        usize::try_from(self.profile)
            .ok()
            .filter(|count| *count >= 1)
            .ok_or(ConfigError::InvalidRequestCount(self.profile))
    }

    /// Timeout applied separately to the TCP connect and the TLS handshake.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            profile: DEFAULT_REQUEST_COUNT,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            output_format: OutputFormat::Plain,
            failure_policy: FailurePolicy::Abort,
            max_in_flight: None,
            connect_timeout_secs: TCP_CONNECT_TIMEOUT_SECS,
        }
    }
}
