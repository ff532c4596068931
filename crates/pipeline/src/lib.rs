//! Staged filtering of admission candidates.
//!
//! This crate provides:
//! - Filter and Observer traits
//! - One filter per admission gate (eligibility, fee, test, merit list)
//! - Notifiers that report candidates passing each gate
//! - AdmissionPipeline for composing filters and observers
//!
//! ## Architecture
//! Candidates live in a `roster::Roster`; the pipeline only moves
//! `CandidateId`s around. A driver grows the pipeline one filter per stage:
//! 1. EligibilityFilter (matric and FSC >= 60)
//! 2. TestEligibilityFilter (fee paid)
//! 3. InterviewEligibilityFilter (test score > 85)
//! 4. MeritListFilter (top 3 by interview score)
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::AdmissionPipeline;
//! use pipeline::filters::*;
//! use pipeline::observers::ConsoleNotifier;
//!
//! let mut pipeline = AdmissionPipeline::new();
//! pipeline.add_observer(ConsoleNotifier::new());
//! pipeline.add_filter(EligibilityFilter);
//!
//! let eligible = pipeline.process(roster.ids(), &roster)?;
//! ```

pub mod admission_pipeline;
pub mod filters;
pub mod observers;
pub mod traits;

// Re-export main types
pub use admission_pipeline::AdmissionPipeline;
pub use traits::{Filter, Observer};
