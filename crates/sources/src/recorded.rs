//! Recorded Source - replays stage results written into a roster file.

use crate::types::{SourceError, StageField, StageInputSource};
use anyhow::Result;
use roster::{Candidate, CandidateId, RosterEntry};

/// Answers stage questions from the optional columns of roster entries.
///
/// Entries are matched to candidates by position, so the roster must have
/// been built from the same entries (`Roster::from_entries`).
pub struct RecordedSource {
    entries: Vec<RosterEntry>,
}

impl RecordedSource {
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }

    fn lookup<T>(
        &self,
        id: CandidateId,
        candidate: &Candidate,
        field: StageField,
        value: impl FnOnce(&RosterEntry) -> Option<T>,
    ) -> Result<T> {
        self.entries
            .get(id)
            .and_then(value)
            .ok_or_else(|| {
                SourceError::MissingStageInput {
                    candidate: candidate.name.clone(),
                    field,
                }
                .into()
            })
    }
}

impl StageInputSource for RecordedSource {
    fn fee_paid(&mut self, id: CandidateId, candidate: &Candidate) -> Result<bool> {
        self.lookup(id, candidate, StageField::FeePaid, |e| e.fee_paid)
    }

    fn test_score(&mut self, id: CandidateId, candidate: &Candidate) -> Result<f64> {
        self.lookup(id, candidate, StageField::TestScore, |e| e.test_score)
    }

    fn interview_score(&mut self, id: CandidateId, candidate: &Candidate) -> Result<f64> {
        self.lookup(id, candidate, StageField::InterviewScore, |e| e.interview_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<RosterEntry> {
        let mut sara = RosterEntry::new("Sara", 90.0, 91.0);
        sara.fee_paid = Some(true);
        sara.test_score = Some(88.0);
        sara.interview_score = Some(72.5);

        let mut usman = RosterEntry::new("Usman", 70.0, 65.0);
        usman.fee_paid = Some(false);

        vec![sara, usman]
    }

    #[test]
    fn test_recorded_values() {
        let entries = entries();
        let sara = entries[0].to_candidate();
        let mut source = RecordedSource::new(entries);

        assert!(source.fee_paid(0, &sara).unwrap());
        assert_eq!(source.test_score(0, &sara).unwrap(), 88.0);
        assert_eq!(source.interview_score(0, &sara).unwrap(), 72.5);
    }

    #[test]
    fn test_missing_value_is_an_error() {
        let entries = entries();
        let usman = entries[1].to_candidate();
        let mut source = RecordedSource::new(entries);

        let err = source.test_score(1, &usman).unwrap_err();
        let source_err = err.downcast_ref::<SourceError>().unwrap();
        assert!(matches!(
            source_err,
            SourceError::MissingStageInput { field: StageField::TestScore, .. }
        ));
        assert_eq!(err.to_string(), "No test_score recorded for Usman");
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        let mut source = RecordedSource::new(entries());
        let stranger = Candidate::new("Stranger", 80.0, 80.0);
        assert!(source.fee_paid(9, &stranger).is_err());
    }
}
