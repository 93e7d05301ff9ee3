//! Statistics over a profiling run.
//!
//! Reduces a complete measurement set to latency extremes, mean and median,
//! success rate, failure status codes and response size extremes.

use serde::Serialize;

use crate::config::{HTTP_SUCCESS_MAX, HTTP_SUCCESS_MIN, MIN_SAMPLES_FOR_STATS, STATUS_UNSET};
use crate::error_handling::StatsError;
use crate::models::{Measurement, ProfileRun};

/// Aggregate statistics of one profiling run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSummary {
    pub request_count: usize,
    pub fastest_ms: u64,
    pub slowest_ms: u64,
    pub mean_ms: f64,
    pub median_ms: f64,
    /// Share of 2xx responses, in percent (0–100).
    pub percent_success: f64,
    /// Every non-2xx status in arrival order, duplicates kept.
    pub error_codes: Vec<u16>,
    pub smallest_response_bytes: usize,
    pub largest_response_bytes: usize,
}

/// Whether a status counts as a success (inclusive 2xx range).
pub fn is_success(status: u16) -> bool {
    (HTTP_SUCCESS_MIN..=HTTP_SUCCESS_MAX).contains(&status)
}

/// Median of an ascending slice.
///
/// Odd length: the middle element. Even length: the mean of the two middle
/// elements. Returns `None` for an empty slice.
#[allow(clippy::cast_precision_loss)]
pub fn median_of_sorted(sorted: &[u64]) -> Option<f64> {
    let mid = sorted.len() / 2;
    match sorted.len() {
        0 => None,
        n if n % 2 == 1 => Some(sorted[mid] as f64),
        _ => Some((sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0),
    }
}

/// Smallest and largest response size by a single linear scan.
///
/// Starts from the extreme representable values so the first observed size
/// replaces both. Returns `None` for an empty slice.
pub fn size_extremes(measurements: &[Measurement]) -> Option<(usize, usize)> {
    if measurements.is_empty() {
        return None;
    }
    let mut smallest = usize::MAX;
    let mut largest = usize::MIN;
    for m in measurements {
        if m.size_bytes < smallest {
            smallest = m.size_bytes;
        }
        if m.size_bytes > largest {
            largest = m.size_bytes;
        }
    }
    Some((smallest, largest))
}

/// Summarizes a measurement set in which every probe succeeded.
///
/// Means and medians are computed in `f64`.
///
/// # Errors
///
/// Returns `StatsError::NotEnoughSamples` for fewer than two measurements.
pub fn summarize(measurements: &[Measurement]) -> Result<StatsSummary, StatsError> {
    summarize_with_failures(measurements, 0)
}

/// Summarizes a profiling run, skipped probes included.
///
/// `request_count` is the number of probes launched. Each skipped probe is a
/// failure: it lowers the success rate and adds `STATUS_UNSET` to the error
/// codes, after the codes of the measured probes. Latency and size figures
/// come from the measured probes only.
///
/// # Errors
///
/// Returns `StatsError::NotEnoughSamples` for fewer than two measurements.
pub fn summarize_run(run: &ProfileRun) -> Result<StatsSummary, StatsError> {
    summarize_with_failures(&run.measurements, run.failed)
}

#[allow(clippy::cast_precision_loss)]
fn summarize_with_failures(
    measurements: &[Measurement],
    failed: usize,
) -> Result<StatsSummary, StatsError> {
    let measured = measurements.len();
    let not_enough = StatsError::NotEnoughSamples {
        got: measured,
        needed: MIN_SAMPLES_FOR_STATS,
    };
    if measured < MIN_SAMPLES_FOR_STATS {
        return Err(not_enough);
    }
    let count = measured + failed;

    let mut times: Vec<u64> = measurements.iter().map(|m| m.time_ms).collect();
    times.sort_unstable();
    let fastest_ms = times[0];
    let slowest_ms = times[measured - 1];

    let total_ms: u128 = times.iter().map(|&t| u128::from(t)).sum();
    let mean_ms = total_ms as f64 / measured as f64;
    let median_ms = median_of_sorted(&times).ok_or_else(|| not_enough.clone())?;

    let error_codes: Vec<u16> = measurements
        .iter()
        .map(|m| m.status_code)
        .filter(|&status| !is_success(status))
        .chain(std::iter::repeat(STATUS_UNSET).take(failed))
        .collect();
    let percent_success = (count - error_codes.len()) as f64 / count as f64 * 100.0;

    let (smallest_response_bytes, largest_response_bytes) =
        size_extremes(measurements).ok_or(not_enough)?;

    Ok(StatsSummary {
        request_count: count,
        fastest_ms,
        slowest_ms,
        mean_ms,
        median_ms,
        percent_success,
        error_codes,
        smallest_response_bytes,
        largest_response_bytes,
    })
}
