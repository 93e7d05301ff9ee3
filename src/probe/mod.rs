//! Single-connection probing.
//!
//! A probe opens one TLS connection, writes one minimal HTTP/1.0 request,
//! reads until the peer closes, and reports the elapsed wall-clock time.
//!
//! The [`Prober`] trait is the seam the dispatcher is generic over, so the
//! fan-in can be exercised without a network.

mod client;
mod request;

use std::future::Future;

use crate::error_handling::ProbeError;
use crate::models::{RawResponse, Target};

// Re-export public API
pub use client::TlsProber;
pub use request::build_request;

/// Performs one request/response exchange against a target.
///
/// Implementations must be shareable across tasks; the dispatcher holds one
/// instance behind an `Arc` and calls it from every probe task.
pub trait Prober: Send + Sync + 'static {
    /// Runs one exchange and returns the raw response with its elapsed time.
    fn probe(
        &self,
        target: &Target,
    ) -> impl Future<Output = Result<RawResponse, ProbeError>> + Send;
}
