//! Probe dispatch and fan-in.
//!
//! A single request runs inline. A profiling run spawns one task per request
//! into a `JoinSet` and joins exactly as many results as it spawned, in
//! completion order. An optional semaphore bounds how many probes are in
//! flight without changing that contract.

use std::num::NonZeroUsize;
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::task::JoinSet;

use crate::config::{Config, FailurePolicy};
use crate::error_handling::{FailureStats, ProbeError, ProfileError};
use crate::initialization::init_semaphore;
use crate::models::{Measurement, ProfileRun, Target};
use crate::parse::{parse_response, ParsedResponse};
use crate::probe::Prober;

/// Parsed response and measurement of one probe.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeOutcome {
    pub response: ParsedResponse,
    pub measurement: Measurement,
}

/// Dispatch settings for a profiling run.
#[derive(Debug, Clone, Copy)]
pub struct DispatchOptions {
    pub failure_policy: FailurePolicy,
    /// Upper bound on concurrently running probes; `None` launches all at once.
    pub max_in_flight: Option<NonZeroUsize>,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::Abort,
            max_in_flight: None,
        }
    }
}

impl From<&Config> for DispatchOptions {
    fn from(config: &Config) -> Self {
        Self {
            failure_policy: config.failure_policy,
            max_in_flight: config.max_in_flight,
        }
    }
}

/// Runs one probe and parses its response.
pub async fn probe_once<P: Prober>(
    prober: &P,
    target: &Target,
) -> Result<ProbeOutcome, ProbeError> {
    let raw = prober.probe(target).await?;
    let response = parse_response(&raw.text());
    let measurement = Measurement::new(response.status, raw.elapsed, raw.size());
    Ok(ProbeOutcome {
        response,
        measurement,
    })
}

/// Runs a single probe inline, without spawning a task.
///
/// # Errors
///
/// Returns the probe's error unchanged.
pub async fn run_single<P: Prober>(prober: &P, target: &Target) -> Result<ProbeOutcome, ProbeError> {
    let outcome = probe_once(prober, target).await?;
    debug!(
        "Single probe of {} finished: status={}, {} ms, {} bytes",
        target.address(),
        outcome.measurement.status_code,
        outcome.measurement.time_ms,
        outcome.measurement.size_bytes
    );
    Ok(outcome)
}

/// Runs `count` probes concurrently and collects their measurements.
///
/// Measurements are returned in arrival order. Under `FailurePolicy::Abort`
/// the first failed probe is returned as the error and the task group is
/// dropped, which aborts every probe still running. Under
/// `FailurePolicy::Skip` failed probes have no measurement and are counted in
/// `ProfileRun::failed`, so `requested()` is always `count`.
///
/// # Errors
///
/// Returns `ProfileError::Probe` for a failed probe (abort policy) and
/// `ProfileError::Task` if a probe task panicked.
pub async fn run_profile<P: Prober>(
    prober: Arc<P>,
    target: Arc<Target>,
    count: usize,
    options: &DispatchOptions,
) -> Result<ProfileRun, ProfileError> {
    let semaphore = options.max_in_flight.map(|n| init_semaphore(n.get()));

    let mut tasks = JoinSet::new();
    for index in 0..count {
        let prober = Arc::clone(&prober);
        let target = Arc::clone(&target);
        let semaphore = semaphore.clone();
        tasks.spawn(async move {
            // The semaphore is never closed, so acquisition only fails if it
            // were; in that case the probe runs unbounded.
            let _permit = match semaphore {
                Some(semaphore) => semaphore.acquire_owned().await.ok(),
                None => None,
            };
            let result = probe_once(prober.as_ref(), &target).await;
            (index, result.map(|outcome| outcome.measurement))
        });
    }
    info!(
        "Launched {} probe(s) against {}{}",
        count,
        target.address(),
        options
            .max_in_flight
            .map(|n| format!(" ({} in flight at most)", n))
            .unwrap_or_default()
    );

    let failures = FailureStats::new();
    let mut measurements = Vec::with_capacity(count);
    while let Some(joined) = tasks.join_next().await {
        let (index, result) = joined?;
        match result {
            Ok(measurement) => {
                debug!(
                    "Probe {index} finished: status={}, {} ms, {} bytes",
                    measurement.status_code, measurement.time_ms, measurement.size_bytes
                );
                measurements.push(measurement);
            }
            Err(e) => match options.failure_policy {
                FailurePolicy::Abort => {
                    warn!(
                        "Probe {index} failed, aborting {} remaining probe(s): {e}",
                        tasks.len()
                    );
                    return Err(e.into());
                }
                FailurePolicy::Skip => {
                    warn!("Probe {index} failed, skipping: {e}");
                    failures.record(&e);
                }
            },
        }
    }

    failures.log_summary();
    Ok(ProfileRun {
        measurements,
        failed: failures.total(),
    })
}
