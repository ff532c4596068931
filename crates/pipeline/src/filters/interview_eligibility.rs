//! Filter on the admission test result.

use crate::traits::Filter;
use roster::{CandidateId, Roster};

/// Test score a candidate must exceed to be called for interview
pub const TEST_PASS_MARK: f64 = 85.0;

/// Keeps candidates whose `test_score` is strictly above [`TEST_PASS_MARK`].
pub struct InterviewEligibilityFilter;

impl Filter for InterviewEligibilityFilter {
    fn name(&self) -> &str {
        "InterviewEligibilityFilter"
    }

    fn apply(&self, candidates: Vec<CandidateId>, roster: &Roster) -> Vec<CandidateId> {
        candidates
            .into_iter()
            .filter(|&id| roster.get(id).is_some_and(|c| c.test_score > TEST_PASS_MARK))
            .collect()
    }
}
