//! Admissions crate: runs a full admission round.
//!
//! Ties the roster, the filter pipeline and a stage input source together
//! behind `AdmissionOrchestrator`.

pub mod orchestrator;
pub mod stage;

pub use orchestrator::AdmissionOrchestrator;
pub use stage::{AdmissionError, AdmissionOutcome, Stage};
