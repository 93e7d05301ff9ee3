//! Probe failure statistics.
//!
//! Thread-safe counters of probe failures by category. Only populated when
//! the failure policy skips failed probes instead of aborting the run.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::warn;
use strum::IntoEnumIterator;

use super::types::{ProbeError, ProbeErrorKind};

/// Thread-safe probe failure tracker.
///
/// All categories are initialized to zero on creation, so the map is never
/// mutated after construction and can be shared across tasks with `Arc`.
pub struct FailureStats {
    failures: HashMap<ProbeErrorKind, AtomicUsize>,
}

impl FailureStats {
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for kind in ProbeErrorKind::iter() {
            failures.insert(kind, AtomicUsize::new(0));
        }
        FailureStats { failures }
    }

    /// Records one failed probe under its category.
    pub fn record(&self, error: &ProbeError) {
        if let Some(counter) = self.failures.get(&error.kind()) {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Returns the count for one category.
    pub fn get_count(&self, kind: ProbeErrorKind) -> usize {
        self.failures
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total number of failed probes across all categories.
    pub fn total(&self) -> usize {
        self.failures
            .values()
            .map(|c| c.load(Ordering::SeqCst))
            .sum()
    }

    /// Logs one line per non-empty category.
    pub fn log_summary(&self) {
        let total = self.total();
        if total == 0 {
            return;
        }
        warn!("Skipped {} failed probe(s):", total);
        for kind in ProbeErrorKind::iter() {
            let count = self.get_count(kind);
            if count > 0 {
                warn!("   {}: {}", kind.as_str(), count);
            }
        }
    }
}

impl Default for FailureStats {
    fn default() -> Self {
        Self::new()
    }
}
