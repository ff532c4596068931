//! Filter on the academic record.
//!
//! This is always the first gate: candidates whose matric or FSC marks
//! fall short never reach the fee stage.

use crate::traits::Filter;
use roster::{CandidateId, Roster};

/// Minimum matric and FSC score a candidate needs to be eligible
pub const MIN_ACADEMIC_SCORE: f64 = 60.0;

/// Keeps candidates with both `matric_score` and `fsc_score` at or above
/// [`MIN_ACADEMIC_SCORE`].
pub struct EligibilityFilter;

impl Filter for EligibilityFilter {
    fn name(&self) -> &str {
        "EligibilityFilter"
    }

    fn apply(&self, candidates: Vec<CandidateId>, roster: &Roster) -> Vec<CandidateId> {
        candidates
            .into_iter()
            .filter(|&id| {
                roster.get(id).is_some_and(|c| {
                    c.matric_score >= MIN_ACADEMIC_SCORE && c.fsc_score >= MIN_ACADEMIC_SCORE
                })
            })
            .collect()
    }
}
