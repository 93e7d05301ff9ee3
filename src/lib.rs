//! tls_profiler library: concurrent request profiling over raw TLS connections
//!
//! This library issues one or more minimal HTTP/1.0 requests to a single URL,
//! each over its own TLS connection, and measures latency, status and response
//! size. With more than one request, the probes run concurrently and their
//! measurements are reduced to summary statistics.
//!
//! # Example
//!
//! ```no_run
//! use tls_profiler::{run, Config, RunOutcome};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! tls_profiler::initialization::init_crypto_provider();
//! let config = Config {
//!     url: "https://example.com/".to_string(),
//!     profile: 10,
//!     ..Default::default()
//! };
//!
//! if let RunOutcome::Profile(summary) = run(&config).await? {
//!     println!("median {} ms", summary.median_ms);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod app;
pub mod config;
pub mod dispatch;
pub mod error_handling;
pub mod initialization;
pub mod models;
pub mod parse;
pub mod probe;
pub mod stats;

// Re-export public API
pub use config::{Config, FailurePolicy, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{ConfigError, ProbeError, ProfileError, StatsError};
pub use models::{Measurement, MeasurementSet, ProfileRun, RawResponse, Target};
pub use probe::{Prober, TlsProber};
pub use run::{run, run_with, RunOutcome};
pub use stats::{summarize, summarize_run, StatsSummary};

// Internal run module (contains the top-level profiling flow)
mod run {
    use std::sync::Arc;
    use std::time::Instant;

    use log::info;

    use crate::app::parse_target;
    use crate::config::Config;
    use crate::dispatch::{run_profile, run_single, DispatchOptions, ProbeOutcome};
    use crate::error_handling::ProfileError;
    use crate::initialization::init_tls_connector;
    use crate::probe::{Prober, TlsProber};
    use crate::stats::{summarize_run, StatsSummary};

    /// Result of a run.
    #[derive(Debug, Clone, PartialEq)]
    pub enum RunOutcome {
        /// One request was made; only its parsed response is reported.
        Single(ProbeOutcome),
        /// Several requests were made and summarized.
        Profile(StatsSummary),
    }

    /// Runs the configured profile over real TLS connections.
    ///
    /// The rustls crypto provider must already be installed (see
    /// `initialization::init_crypto_provider`).
    ///
    /// # Errors
    ///
    /// Returns a `ProfileError` if the configuration is invalid, a probe fails
    /// under the abort policy, or too few measurements remain for statistics.
    pub async fn run(config: &Config) -> Result<RunOutcome, ProfileError> {
        let prober = TlsProber::new(init_tls_connector(), config.connect_timeout());
        run_with(config, prober).await
    }

    /// Runs the configured profile with the given prober.
    ///
    /// A request count of one runs a single inline probe and skips the
    /// statistics entirely. Larger counts dispatch concurrent probes and
    /// summarize them.
    ///
    /// # Errors
    ///
    /// Same as [`run`].
    pub async fn run_with<P: Prober>(
        config: &Config,
        prober: P,
    ) -> Result<RunOutcome, ProfileError> {
        let target = parse_target(&config.url)?;
        let count = config.request_count()?;

        if count == 1 {
            info!("Requesting {}{}", target.address(), target.path);
            let outcome = run_single(&prober, &target).await?;
            return Ok(RunOutcome::Single(outcome));
        }

        info!(
            "Profiling {}{} with {} requests",
            target.address(),
            target.path,
            count
        );
        let start = Instant::now();
        let profile = run_profile(
            Arc::new(prober),
            Arc::new(target),
            count,
            &DispatchOptions::from(config),
        )
        .await?;
        info!(
            "Collected {} measurement(s), {} failed, in {:.2}s",
            profile.measurements.len(),
            profile.failed,
            start.elapsed().as_secs_f64()
        );

        let summary = summarize_run(&profile)?;
        Ok(RunOutcome::Profile(summary))
    }
}
