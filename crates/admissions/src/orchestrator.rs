//! # Admission Orchestrator
//!
//! Runs an admission round one stage at a time:
//! 1. Eligibility screening on the academic record
//! 2. Fee submission (fee status collected from the stage source)
//! 3. Admission test (test scores collected, pass mark applied)
//! 4. Interview (interview scores collected, merit list selected)
//!
//! Each stage collects its inputs for the candidates it is handed, writes
//! them onto the roster, appends its filter to the pipeline and processes
//! the set. Stages are plain methods so a driver can show results between
//! them; `run` chains all four.

use anyhow::{Context, Result};
use tracing::info;

use pipeline::filters::{
    EligibilityFilter, InterviewEligibilityFilter, MeritListFilter, TestEligibilityFilter,
};
use pipeline::{AdmissionPipeline, Filter, Observer};
use roster::{Candidate, CandidateId, Roster};
use sources::StageInputSource;

use crate::stage::{AdmissionError, AdmissionOutcome, Stage};

/// Owns the roster, the growing pipeline and the stage input source.
pub struct AdmissionOrchestrator<S> {
    roster: Roster,
    pipeline: AdmissionPipeline,
    source: S,
    next_stage: Option<Stage>,
    /// Called once a stage's inputs are recorded, just before its filter runs
    filtering_hook: Option<Box<dyn FnMut(Stage)>>,
}

impl<S: StageInputSource> AdmissionOrchestrator<S> {
    /// Create an orchestrator for a fresh round over `roster`
    pub fn new(roster: Roster, source: S) -> Self {
        Self {
            roster,
            pipeline: AdmissionPipeline::new(),
            source,
            next_stage: Some(Stage::Eligibility),
            filtering_hook: None,
        }
    }

    /// Add an observer (builder pattern)
    pub fn with_observer(mut self, observer: impl Observer + 'static) -> Self {
        self.pipeline.add_observer(observer);
        self
    }

    /// Register a callback run between input collection and filtering of
    /// every stage, e.g. to print a stage header ahead of its notifications.
    pub fn with_filtering_hook(mut self, hook: impl FnMut(Stage) + 'static) -> Self {
        self.filtering_hook = Some(Box::new(hook));
        self
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn pipeline(&self) -> &AdmissionPipeline {
        &self.pipeline
    }

    /// The stage the round expects next, `None` once the merit list is out
    pub fn next_stage(&self) -> Option<Stage> {
        self.next_stage
    }

    pub fn into_roster(self) -> Roster {
        self.roster
    }

    /// Stage 1: keep candidates meeting the matric and FSC minimum.
    pub fn screen_eligibility(
        &mut self,
        candidates: Vec<CandidateId>,
    ) -> Result<Vec<CandidateId>> {
        self.begin(Stage::Eligibility)?;
        self.finish(Stage::Eligibility, EligibilityFilter, candidates)
    }

    /// Stage 2: record fee status and keep candidates who paid.
    pub fn collect_fees(&mut self, eligible: Vec<CandidateId>) -> Result<Vec<CandidateId>> {
        self.begin(Stage::FeeSubmission)?;
        self.record(
            &eligible,
            |source, id, c| source.fee_paid(id, c),
            |c, paid| c.fee_paid = paid,
        )?;
        self.finish(Stage::FeeSubmission, TestEligibilityFilter, eligible)
    }

    /// Stage 3: record test scores and keep candidates above the pass mark.
    pub fn grade_tests(&mut self, fee_paid: Vec<CandidateId>) -> Result<Vec<CandidateId>> {
        self.begin(Stage::Test)?;
        self.record(
            &fee_paid,
            |source, id, c| source.test_score(id, c),
            |c, score| c.test_score = score,
        )?;
        self.finish(Stage::Test, InterviewEligibilityFilter, fee_paid)
    }

    /// Stage 4: record interview scores and return the merit list.
    pub fn rank_interviews(&mut self, shortlist: Vec<CandidateId>) -> Result<Vec<CandidateId>> {
        self.begin(Stage::Interview)?;
        self.record(
            &shortlist,
            |source, id, c| source.interview_score(id, c),
            |c, score| c.interview_score = score,
        )?;
        self.finish(Stage::Interview, MeritListFilter, shortlist)
    }

    /// Run every stage, starting from the whole roster.
    pub fn run(&mut self) -> Result<AdmissionOutcome> {
        let eligible = self.screen_eligibility(self.roster.ids())?;
        let fee_paid = self.collect_fees(eligible.clone())?;
        let interview_shortlist = self.grade_tests(fee_paid.clone())?;
        let merit_list = self.rank_interviews(interview_shortlist.clone())?;

        Ok(AdmissionOutcome {
            eligible,
            fee_paid,
            interview_shortlist,
            merit_list,
        })
    }

    fn begin(&self, requested: Stage) -> Result<()> {
        match self.next_stage {
            Some(expected) if expected == requested => Ok(()),
            Some(expected) => Err(AdmissionError::StageOutOfOrder {
                expected,
                requested,
            }
            .into()),
            None => Err(AdmissionError::RoundComplete { requested }.into()),
        }
    }

    /// Ask the source for one value per candidate and store it on the roster.
    fn record<T>(
        &mut self,
        candidates: &[CandidateId],
        ask: impl Fn(&mut S, CandidateId, &Candidate) -> Result<T>,
        store: impl Fn(&mut Candidate, T),
    ) -> Result<()> {
        for &id in candidates {
            let candidate = self
                .roster
                .get(id)
                .ok_or(AdmissionError::UnknownCandidate(id))?;
            let value = ask(&mut self.source, id, candidate)
                .with_context(|| format!("failed to collect input for {}", candidate.name))?;
            if let Some(candidate) = self.roster.get_mut(id) {
                store(candidate, value);
            }
        }
        Ok(())
    }

    fn finish(
        &mut self,
        stage: Stage,
        filter: impl Filter + 'static,
        candidates: Vec<CandidateId>,
    ) -> Result<Vec<CandidateId>> {
        // A retry after a failed notification finds this stage's filter still pending.
        if self.pipeline.pending_filters() == 0 {
            self.pipeline.add_filter(filter);
        }

        if let Some(hook) = self.filtering_hook.as_mut() {
            hook(stage);
        }

        let input_count = candidates.len();
        let survivors = self
            .pipeline
            .process(candidates, &self.roster)
            .with_context(|| format!("{stage} stage failed"))?;
        info!(
            "Completed {} stage: {} of {} candidates remain",
            stage,
            survivors.len(),
            input_count
        );

        self.next_stage = stage.next();
        Ok(survivors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    type Log = Arc<Mutex<Vec<String>>>;

    /// Everyone pays, tests at 90, interviews keyed by name length.
    struct Generous;

    impl StageInputSource for Generous {
        fn fee_paid(&mut self, _id: CandidateId, _candidate: &Candidate) -> Result<bool> {
            Ok(true)
        }

        fn test_score(&mut self, _id: CandidateId, _candidate: &Candidate) -> Result<f64> {
            Ok(90.0)
        }

        fn interview_score(&mut self, _id: CandidateId, candidate: &Candidate) -> Result<f64> {
            Ok(candidate.name.len() as f64)
        }
    }

    struct Unreachable;

    impl StageInputSource for Unreachable {
        fn fee_paid(&mut self, _id: CandidateId, _candidate: &Candidate) -> Result<bool> {
            bail!("bursar offline")
        }

        fn test_score(&mut self, _id: CandidateId, _candidate: &Candidate) -> Result<f64> {
            bail!("bursar offline")
        }

        fn interview_score(&mut self, _id: CandidateId, _candidate: &Candidate) -> Result<f64> {
            bail!("bursar offline")
        }
    }

    /// Fails its first notification, accepts every later one.
    struct FlakyObserver {
        tripped: AtomicBool,
    }

    impl Observer for FlakyObserver {
        fn name(&self) -> &str {
            "FlakyObserver"
        }

        fn notify(&self, _message: &str, _candidate: &Candidate) -> Result<()> {
            if !self.tripped.swap(true, Ordering::SeqCst) {
                bail!("mail server unavailable");
            }
            Ok(())
        }
    }

    struct Recorder {
        log: Log,
    }

    impl Observer for Recorder {
        fn name(&self) -> &str {
            "Recorder"
        }

        fn notify(&self, _message: &str, candidate: &Candidate) -> Result<()> {
            self.log.lock().unwrap().push(format!("notified {}", candidate.name));
            Ok(())
        }
    }

    fn roster() -> Roster {
        let mut roster = Roster::new();
        roster.insert(Candidate::new("Al", 70.0, 70.0));
        roster.insert(Candidate::new("Benazir", 70.0, 70.0));
        roster.insert(Candidate::new("Cy", 30.0, 70.0));
        roster.insert(Candidate::new("Dua", 80.0, 80.0));
        roster.insert(Candidate::new("Ebrahim", 80.0, 80.0));
        roster
    }

    #[test]
    fn test_run_all_stages() {
        let mut orchestrator = AdmissionOrchestrator::new(roster(), Generous);

        let outcome = orchestrator.run().unwrap();

        assert_eq!(outcome.eligible, vec![0, 1, 3, 4]);
        assert_eq!(outcome.fee_paid, vec![0, 1, 3, 4]);
        assert_eq!(outcome.interview_shortlist, vec![0, 1, 3, 4]);
        // Benazir and Ebrahim tie on 7; Dua has 3.
        assert_eq!(outcome.merit_list, vec![1, 4, 3]);
        assert_eq!(orchestrator.next_stage(), None);
    }

    #[test]
    fn test_inputs_written_to_roster() {
        let mut orchestrator = AdmissionOrchestrator::new(roster(), Generous);
        orchestrator.run().unwrap();

        let roster = orchestrator.into_roster();
        assert!(roster.get(0).unwrap().fee_paid);
        assert_eq!(roster.get(0).unwrap().test_score, 90.0);
        // Ineligible candidates are never asked.
        assert!(!roster.get(2).unwrap().fee_paid);
        assert_eq!(roster.get(2).unwrap().test_score, 0.0);
    }

    #[test]
    fn test_stage_out_of_order() {
        let mut orchestrator = AdmissionOrchestrator::new(roster(), Generous);

        let err = orchestrator.grade_tests(vec![0]).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<AdmissionError>(),
            Some(AdmissionError::StageOutOfOrder {
                expected: Stage::Eligibility,
                requested: Stage::Test
            })
        ));
        assert_eq!(orchestrator.next_stage(), Some(Stage::Eligibility));
    }

    #[test]
    fn test_round_complete() {
        let mut orchestrator = AdmissionOrchestrator::new(roster(), Generous);
        orchestrator.run().unwrap();

        let err = orchestrator.screen_eligibility(vec![0]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AdmissionError>(),
            Some(AdmissionError::RoundComplete { .. })
        ));
    }

    #[test]
    fn test_source_failure_keeps_stage() {
        let mut orchestrator = AdmissionOrchestrator::new(roster(), Unreachable);
        let eligible = orchestrator.screen_eligibility(vec![0, 1]).unwrap();

        let err = orchestrator.collect_fees(eligible).unwrap_err();

        assert!(format!("{err:#}").contains("bursar offline"));
        assert_eq!(orchestrator.next_stage(), Some(Stage::FeeSubmission));
        assert_eq!(orchestrator.pipeline().filter_names(), vec!["EligibilityFilter"]);
    }

    #[test]
    fn test_unknown_candidate() {
        let mut orchestrator = AdmissionOrchestrator::new(roster(), Generous);
        orchestrator.screen_eligibility(vec![0]).unwrap();

        let err = orchestrator.collect_fees(vec![42]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AdmissionError>(),
            Some(AdmissionError::UnknownCandidate(42))
        ));
    }

    #[test]
    fn test_stage_retry_after_observer_failure() {
        let flaky = FlakyObserver {
            tripped: AtomicBool::new(false),
        };
        let mut orchestrator = AdmissionOrchestrator::new(roster(), Generous).with_observer(flaky);

        assert!(orchestrator.screen_eligibility(vec![0, 1, 2]).is_err());
        assert_eq!(orchestrator.next_stage(), Some(Stage::Eligibility));

        let eligible = orchestrator.screen_eligibility(vec![0, 1, 2]).unwrap();

        assert_eq!(eligible, vec![0, 1]);
        assert_eq!(orchestrator.pipeline().filter_names(), vec!["EligibilityFilter"]);
        assert_eq!(orchestrator.next_stage(), Some(Stage::FeeSubmission));
    }

    #[test]
    fn test_filtering_hook_runs_before_notifications() {
        let log: Log = Arc::default();
        let hook_log = Arc::clone(&log);
        let mut orchestrator = AdmissionOrchestrator::new(roster(), Generous)
            .with_observer(Recorder { log: Arc::clone(&log) })
            .with_filtering_hook(move |stage| {
                hook_log.lock().unwrap().push(format!("filtering {stage}"));
            });

        let eligible = orchestrator.screen_eligibility(vec![0, 2]).unwrap();
        orchestrator.collect_fees(eligible).unwrap();

        let log = log.lock().unwrap();
        assert_eq!(
            *log,
            vec![
                "filtering eligibility screening",
                "notified Al",
                "filtering fee submission",
                "notified Al",
            ]
        );
    }
}
