//! The AdmissionPipeline chains filters and fans out notifications.
//!
//! Filters are appended between stages. Each `process` call runs only the
//! filters added since the previous call, so a driver that hands back the
//! set it got from the last stage never re-evaluates earlier gates.

use crate::traits::{Filter, Observer};
use anyhow::{Context, Result};
use roster::{CandidateId, Roster};

/// Ordered filters plus the observers notified after each one.
///
/// ## Usage
/// ```ignore
/// let mut pipeline = AdmissionPipeline::new();
/// pipeline.add_observer(ConsoleNotifier::new());
///
/// pipeline.add_filter(EligibilityFilter);
/// let eligible = pipeline.process(roster.ids(), &roster)?;
///
/// // ... record fees on the roster ...
/// pipeline.add_filter(TestEligibilityFilter);
/// let paid = pipeline.process(eligible, &roster)?;
/// ```
pub struct AdmissionPipeline {
    filters: Vec<Box<dyn Filter>>,
    observers: Vec<Box<dyn Observer>>,
    /// Number of filters already run by earlier `process` calls
    applied: usize,
}

impl AdmissionPipeline {
    /// Create a new empty AdmissionPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            observers: Vec::new(),
            applied: 0,
        }
    }

    /// Append a filter; it runs on the next `process` call.
    pub fn add_filter(&mut self, filter: impl Filter + 'static) -> &mut Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Append an observer; observers are notified in insertion order.
    pub fn add_observer(&mut self, observer: impl Observer + 'static) -> &mut Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Run every pending filter in sequence.
    ///
    /// ## Algorithm
    /// For each filter added since the last call, in order:
    /// 1. Replace the working set with the filter's output
    /// 2. For each survivor, notify every observer with
    ///    `"Processed through <filter name>"`
    ///
    /// Pending filters are marked applied only once all of them have run, so
    /// a failed call leaves every one of its filters pending.
    ///
    /// With no pending filters the input is returned unchanged and nobody is
    /// notified.
    ///
    /// # Returns
    /// * `Ok(Vec<CandidateId>)` - The working set after all pending filters
    /// * `Err` - If an observer fails
    pub fn process(
        &mut self,
        candidates: Vec<CandidateId>,
        roster: &Roster,
    ) -> Result<Vec<CandidateId>> {
        let mut current = candidates;
        for filter in &self.filters[self.applied..] {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, roster);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );

            let message = format!("Processed through {}", filter.name());
            for candidate in roster.resolve(&current) {
                for observer in &self.observers {
                    observer.notify(&message, candidate).with_context(|| {
                        format!(
                            "observer {} failed after {} for {}",
                            observer.name(),
                            filter.name(),
                            candidate.name
                        )
                    })?;
                }
            }
        }

        self.applied = self.filters.len();
        Ok(current)
    }

    /// Names of every filter added so far, in evaluation order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Filters that will run on the next `process` call
    pub fn pending_filters(&self) -> usize {
        self.filters.len() - self.applied
    }

    /// Number of observers notified per surviving candidate
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl Default for AdmissionPipeline {
    fn default() -> Self {
        Self::new()
    }
}
