//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use std::io;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for invalid run configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `--profile` was zero or negative.
    #[error("Not a valid number of requests: {0}")]
    InvalidRequestCount(i64),

    /// The URL could not be parsed.
    #[error("Invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The URL uses a scheme other than https.
    #[error("Unsupported URL scheme {0:?}: only https is supported")]
    UnsupportedScheme(String),

    /// The URL has no host component.
    #[error("URL has no host: {0}")]
    MissingHost(String),
}

/// Error types for a single probe (one connection, one request).
#[derive(Error, Debug)]
pub enum ProbeError {
    /// TCP connect failed.
    #[error("Connection error: failed to connect to {address}: {source}")]
    Connect {
        address: String,
        #[source]
        source: io::Error,
    },

    /// TCP connect did not complete within the connect timeout.
    #[error("Connection error: TCP connection timeout for {address} ({timeout_secs}s)")]
    ConnectTimeout { address: String, timeout_secs: u64 },

    /// The host is not usable as a TLS server name.
    #[error("Connection error: invalid server name {0:?}")]
    InvalidServerName(String),

    /// TLS handshake failed.
    #[error("Connection error: TLS handshake failed for {host}: {source}")]
    Handshake {
        host: String,
        #[source]
        source: io::Error,
    },

    /// TLS handshake did not complete within the connect timeout.
    #[error("Connection error: TLS handshake timeout for {host} ({timeout_secs}s)")]
    HandshakeTimeout { host: String, timeout_secs: u64 },

    /// Writing the request failed.
    #[error("Write error: {0}")]
    Write(#[source] io::Error),

    /// Reading the response failed.
    #[error("Problem with read: {0}")]
    Read(#[source] io::Error),
}

/// Categories of probe failures, used for failure counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ProbeErrorKind {
    Connect,
    ConnectTimeout,
    InvalidServerName,
    Handshake,
    HandshakeTimeout,
    Write,
    Read,
}

impl ProbeError {
    /// Returns the category of this failure.
    pub fn kind(&self) -> ProbeErrorKind {
        match self {
            ProbeError::Connect { .. } => ProbeErrorKind::Connect,
            ProbeError::ConnectTimeout { .. } => ProbeErrorKind::ConnectTimeout,
            ProbeError::InvalidServerName(_) => ProbeErrorKind::InvalidServerName,
            ProbeError::Handshake { .. } => ProbeErrorKind::Handshake,
            ProbeError::HandshakeTimeout { .. } => ProbeErrorKind::HandshakeTimeout,
            ProbeError::Write(_) => ProbeErrorKind::Write,
            ProbeError::Read(_) => ProbeErrorKind::Read,
        }
    }
}

impl std::fmt::Display for ProbeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ProbeErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeErrorKind::Connect => "TCP connect error",
            ProbeErrorKind::ConnectTimeout => "TCP connect timeout",
            ProbeErrorKind::InvalidServerName => "Invalid TLS server name",
            ProbeErrorKind::Handshake => "TLS handshake error",
            ProbeErrorKind::HandshakeTimeout => "TLS handshake timeout",
            ProbeErrorKind::Write => "Request write error",
            ProbeErrorKind::Read => "Response read error",
        }
    }
}

/// Error types for the statistics reduction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// Fewer measurements than the statistics need.
    #[error("Didn't profile enough things! Something went wrong ({got} sample(s), need at least {needed})")]
    NotEnoughSamples { got: usize, needed: usize },
}

/// Top-level error of a profiling run.
///
/// Each variant is fatal for the run; the caller decides how to report it
/// and whether to terminate.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Probe(#[from] ProbeError),

    #[error(transparent)]
    Stats(#[from] StatsError),

    /// A probe task panicked or was cancelled.
    #[error("Probe task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
