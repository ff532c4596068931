//! Filter implementations for the admission pipeline.
//!
//! One filter per admission gate, in the order the stages add them.

pub mod eligibility;
pub mod interview_eligibility;
pub mod merit_list;
pub mod test_eligibility;

// Re-export for convenience
pub use eligibility::{EligibilityFilter, MIN_ACADEMIC_SCORE};
pub use interview_eligibility::{InterviewEligibilityFilter, TEST_PASS_MARK};
pub use merit_list::{MERIT_LIST_SIZE, MeritListFilter};
pub use test_eligibility::TestEligibilityFilter;
