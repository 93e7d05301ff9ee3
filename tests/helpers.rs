// Shared test helpers: in-memory probers standing in for the TLS client.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tls_profiler::{ProbeError, Prober, RawResponse, Target};

/// Builds a minimal HTTP/1.0 response with the given status and body.
#[allow(dead_code)] // Used by other test files
pub fn http_response(status: u16, body: &str) -> String {
    format!("HTTP/1.0 {status} Test\r\nServer: stub\r\nContent-Length: {}\r\n\r\n{body}", body.len())
}

/// Prober whose n-th call sleeps for a call-dependent delay, so completion
/// order differs from launch order. Tracks the peak number of concurrent calls.
#[allow(dead_code)]
pub struct ScatteredProber {
    pub calls: AtomicUsize,
    pub in_flight: AtomicUsize,
    pub peak_in_flight: AtomicUsize,
    /// Calls with these indices fail with a read error.
    pub failing_calls: Vec<usize>,
    /// Status returned for call `i` is `statuses[i % statuses.len()]`.
    pub statuses: Vec<u16>,
}

#[allow(dead_code)]
impl ScatteredProber {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
            failing_calls: Vec::new(),
            statuses: vec![200],
        }
    }

    pub fn failing_on(mut self, calls: &[usize]) -> Self {
        self.failing_calls = calls.to_vec();
        self
    }

    pub fn with_statuses(mut self, statuses: &[u16]) -> Self {
        self.statuses = statuses.to_vec();
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

impl Prober for ScatteredProber {
    async fn probe(&self, _target: &Target) -> Result<RawResponse, ProbeError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        // Later calls finish first.
        let delay = Duration::from_millis(((97 - call % 97) % 13) as u64 * 2);
        tokio::time::sleep(delay).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing_calls.contains(&call) {
            return Err(ProbeError::Read(std::io::Error::other("connection reset")));
        }
        let status = self.statuses[call % self.statuses.len()];
        Ok(RawResponse {
            bytes: http_response(status, &"x".repeat(call)).into_bytes(),
            elapsed: delay + Duration::from_millis(1),
        })
    }
}

/// Shared handle so a test can inspect the prober after the run.
#[allow(dead_code)]
pub fn shared(prober: ScatteredProber) -> Arc<ScatteredProber> {
    Arc::new(prober)
}

#[allow(dead_code)]
pub fn target() -> Arc<Target> {
    Arc::new(Target::new("example.com", 443, "/links"))
}
