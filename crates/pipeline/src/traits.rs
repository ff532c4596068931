//! Core traits for the admission pipeline.
//!
//! This module defines the two capabilities the pipeline composes:
//! - `Filter`: narrows (or reorders) a working set of candidates
//! - `Observer`: side-effect hook fired for every candidate that survives a filter

use anyhow::Result;
use roster::{Candidate, CandidateId, Roster};

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the AdmissionPipeline.
///
/// ## Design Note
/// - Filters take ownership of the working set and return the narrowed set
/// - Candidate fields are read through the borrowed `Roster`, never copied
/// - Filters cannot fail; an id missing from the roster is simply dropped
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (used in notifications and logs)
    fn name(&self) -> &str;

    /// Apply this filter to a working set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The working set to filter (takes ownership)
    /// * `roster` - Owner of the candidate records the ids point into
    fn apply(&self, candidates: Vec<CandidateId>, roster: &Roster) -> Vec<CandidateId>;
}

/// Hook invoked for each candidate that survives a filter.
///
/// Errors are not swallowed by the pipeline: a failing observer aborts the
/// `process` call it was notified from.
pub trait Observer: Send + Sync {
    /// Returns the name of this observer (for logging/debugging)
    fn name(&self) -> &str;

    /// Receive a stage notification about one candidate.
    fn notify(&self, message: &str, candidate: &Candidate) -> Result<()>;
}
