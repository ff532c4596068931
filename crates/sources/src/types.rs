//! The stage input contract between an admission round and whoever supplies
//! fee, test and interview results.

use anyhow::Result;
use roster::{Candidate, CandidateId};
use thiserror::Error;

/// Supplies the values a candidate picks up as they move through stages.
///
/// Implementations may prompt a person, replay recorded results or make
/// values up. Each method is called once per surviving candidate, in
/// working-set order.
pub trait StageInputSource {
    /// Whether the candidate paid the test fee
    fn fee_paid(&mut self, id: CandidateId, candidate: &Candidate) -> Result<bool>;

    /// The candidate's admission test score
    fn test_score(&mut self, id: CandidateId, candidate: &Candidate) -> Result<f64>;

    /// The candidate's interview score
    fn interview_score(&mut self, id: CandidateId, candidate: &Candidate) -> Result<f64>;
}

impl<S: StageInputSource + ?Sized> StageInputSource for &mut S {
    fn fee_paid(&mut self, id: CandidateId, candidate: &Candidate) -> Result<bool> {
        (**self).fee_paid(id, candidate)
    }

    fn test_score(&mut self, id: CandidateId, candidate: &Candidate) -> Result<f64> {
        (**self).test_score(id, candidate)
    }

    fn interview_score(&mut self, id: CandidateId, candidate: &Candidate) -> Result<f64> {
        (**self).interview_score(id, candidate)
    }
}

/// Stage input that can be missing from a recorded roster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageField {
    FeePaid,
    TestScore,
    InterviewScore,
}

impl std::fmt::Display for StageField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            StageField::FeePaid => "fee_paid",
            StageField::TestScore => "test_score",
            StageField::InterviewScore => "interview_score",
        };
        f.write_str(label)
    }
}

#[derive(Error, Debug)]
pub enum SourceError {
    /// A candidate reached a stage but no value was recorded for it
    #[error("No {field} recorded for {candidate}")]
    MissingStageInput { candidate: String, field: StageField },
}
