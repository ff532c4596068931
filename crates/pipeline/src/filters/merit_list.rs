//! Final ranking by interview score.
//!
//! Unlike the other filters this one reorders and truncates its input.

use crate::traits::Filter;
use roster::{CandidateId, Roster};
use std::cmp::Ordering;

/// Number of seats on the merit list
pub const MERIT_LIST_SIZE: usize = 3;

/// Ranks candidates by `interview_score` (highest first) and keeps the top
/// [`MERIT_LIST_SIZE`].
///
/// ## Algorithm
/// 1. Drop ids the roster does not know
/// 2. Stable sort by interview score, descending (ties keep input order)
/// 3. Truncate to the merit list size
pub struct MeritListFilter;

impl Filter for MeritListFilter {
    fn name(&self) -> &str {
        "MeritListFilter"
    }

    fn apply(&self, candidates: Vec<CandidateId>, roster: &Roster) -> Vec<CandidateId> {
        let mut ranked: Vec<(CandidateId, f64)> = candidates
            .into_iter()
            .filter_map(|id| roster.get(id).map(|c| (id, c.interview_score)))
            .collect();

        // Vec::sort_by is stable.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked.truncate(MERIT_LIST_SIZE);

        ranked.into_iter().map(|(id, _)| id).collect()
    }
}
