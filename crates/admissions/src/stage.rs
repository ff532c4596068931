//! Admission stages, their ordering and the outcome of a full round.

use roster::{Candidate, CandidateId, Roster};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The four gates of an admission round, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Eligibility,
    FeeSubmission,
    Test,
    Interview,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::Eligibility,
        Stage::FeeSubmission,
        Stage::Test,
        Stage::Interview,
    ];

    /// The stage that follows this one, if any
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Eligibility => Some(Stage::FeeSubmission),
            Stage::FeeSubmission => Some(Stage::Test),
            Stage::Test => Some(Stage::Interview),
            Stage::Interview => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::Eligibility => "eligibility screening",
            Stage::FeeSubmission => "fee submission",
            Stage::Test => "admission test",
            Stage::Interview => "interview",
        };
        f.write_str(label)
    }
}

#[derive(Error, Debug)]
pub enum AdmissionError {
    #[error("cannot run {requested} stage: {expected} stage comes next")]
    StageOutOfOrder { expected: Stage, requested: Stage },

    #[error("cannot run {requested} stage: the admission round is complete")]
    RoundComplete { requested: Stage },

    #[error("candidate {0} is not on the roster")]
    UnknownCandidate(CandidateId),
}

/// Survivors of each stage of a completed round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionOutcome {
    pub eligible: Vec<CandidateId>,
    pub fee_paid: Vec<CandidateId>,
    pub interview_shortlist: Vec<CandidateId>,
    pub merit_list: Vec<CandidateId>,
}

impl AdmissionOutcome {
    /// Survivors of one stage
    pub fn survivors(&self, stage: Stage) -> &[CandidateId] {
        match stage {
            Stage::Eligibility => &self.eligible,
            Stage::FeeSubmission => &self.fee_paid,
            Stage::Test => &self.interview_shortlist,
            Stage::Interview => &self.merit_list,
        }
    }

    /// The merit list resolved to candidate records, best first
    pub fn merit_candidates<'a>(&'a self, roster: &'a Roster) -> Vec<&'a Candidate> {
        roster.resolve(&self.merit_list).collect()
    }
}
