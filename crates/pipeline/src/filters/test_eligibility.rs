//! Filter on fee submission.
//!
//! Only candidates who paid the test fee are allowed to sit the test.

use crate::traits::Filter;
use roster::{CandidateId, Roster};

/// Keeps candidates with `fee_paid == true`.
pub struct TestEligibilityFilter;

impl Filter for TestEligibilityFilter {
    fn name(&self) -> &str {
        "TestEligibilityFilter"
    }

    fn apply(&self, candidates: Vec<CandidateId>, roster: &Roster) -> Vec<CandidateId> {
        candidates
            .into_iter()
            .filter(|&id| roster.get(id).is_some_and(|c| c.fee_paid))
            .collect()
    }
}
