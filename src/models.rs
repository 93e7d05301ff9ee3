//! Data shared between the probe, dispatch and statistics stages.

use std::time::Duration;

use serde::Serialize;

use crate::config::{HTTPS_PORT, STATUS_UNSET};

/// Host, port and request path of the profiled URL.
///
/// Built once per run and shared read-only by every probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    pub port: u16,
    /// Request target written after `GET` (path plus optional query).
    pub path: String,
}

impl Target {
    pub fn new(host: impl Into<String>, port: u16, path: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            path: path.into(),
        }
    }

    /// Host as written in an authority: IPv6 literals are bracketed.
    fn authority_host(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        }
    }

    /// `host:port` string used for diagnostics.
    pub fn address(&self) -> String {
        format!("{}:{}", self.authority_host(), self.port)
    }

    /// Value of the `Host` request header. The port is omitted when it is the
    /// HTTPS default.
    pub fn host_header(&self) -> String {
        if self.port == HTTPS_PORT {
            self.authority_host()
        } else {
            self.address()
        }
    }
}

/// Unparsed bytes read from one connection, with the time the exchange took.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub bytes: Vec<u8>,
    /// From just before the dial to just after the final read.
    pub elapsed: Duration,
}

impl RawResponse {
    /// Response bytes as text. Invalid UTF-8 sequences are replaced.
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Result of one probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Measurement {
    /// Parsed status code, or `STATUS_UNSET` when none was found.
    pub status_code: u16,
    /// Elapsed wall-clock time in whole milliseconds.
    pub time_ms: u64,
    /// Raw response size in bytes (headers included).
    pub size_bytes: usize,
}

impl Measurement {
    pub fn new(status: Option<u16>, elapsed: Duration, size_bytes: usize) -> Self {
        Self {
            status_code: status.unwrap_or(STATUS_UNSET),
            time_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            size_bytes,
        }
    }
}

/// Measurements of one profiling run, in arrival order.
pub type MeasurementSet = Vec<Measurement>;

/// Everything a profiling run collected.
///
/// Under the skip policy some probes fail without a measurement; they are
/// only counted, so `measurements.len() + failed` is the requested count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileRun {
    pub measurements: MeasurementSet,
    pub failed: usize,
}

impl ProfileRun {
    /// Number of probes launched, measured or not.
    pub fn requested(&self) -> usize {
        self.measurements.len() + self.failed
    }
}
