//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - Logger
//! - Crypto provider and TLS connector
//! - Concurrency bound for probe tasks

mod logger;
mod tls;

use std::sync::Arc;

use rustls::crypto::{ring::default_provider, CryptoProvider};
use tokio::sync::Semaphore;

// Re-export public API
pub use logger::init_logger_with;
pub use tls::init_tls_connector;

/// Initializes a semaphore for bounding concurrent probes.
///
/// # Arguments
///
/// * `count` - Maximum number of probes allowed in flight
///
/// # Returns
///
/// An `Arc<Semaphore>` that can be shared across probe tasks.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count))
}

/// Initializes the crypto provider for TLS operations.
///
/// Configures the global crypto provider for `rustls`. This must be called before
/// any TLS connections are established.
pub fn init_crypto_provider() {
    // The return value is ignored because reinstalling the provider is harmless
    let _ = CryptoProvider::install_default(default_provider());
}
