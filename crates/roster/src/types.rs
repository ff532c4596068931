//! Core domain types for the admission roster.
//!
//! A `Roster` is the single owner of every `Candidate` record. Everything
//! downstream (filters, observers, stage sources) refers to candidates by
//! `CandidateId` and borrows the roster when it needs field values, so
//! updates made between stages are seen by every later stage.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Position of a candidate inside its `Roster` (assigned in insertion order)
pub type CandidateId = usize;

// =============================================================================
// Candidate
// =============================================================================

/// One applicant progressing through the admission stages.
///
/// Only `name`, `matric_score` and `fsc_score` are known at creation time.
/// `fee_paid`, `test_score` and `interview_score` start at `false`/`0.0` and
/// are filled in by the driver as the candidate reaches each stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub matric_score: f64,
    pub fsc_score: f64,
    pub fee_paid: bool,
    pub test_score: f64,
    pub interview_score: f64,
}

impl Candidate {
    /// Create a candidate with its academic record; later-stage fields start empty.
    pub fn new(name: impl Into<String>, matric_score: f64, fsc_score: f64) -> Self {
        Self {
            name: name.into(),
            matric_score,
            fsc_score,
            fee_paid: false,
            test_score: 0.0,
            interview_score: 0.0,
        }
    }
}

impl fmt::Display for Candidate {
    // Debug formatting keeps the trailing ".0" on whole-number scores.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [Matric: {:?}, FSC: {:?}]",
            self.name, self.matric_score, self.fsc_score
        )
    }
}

// =============================================================================
// RosterEntry
// =============================================================================

/// One parsed line of a roster file.
///
/// The optional fields hold stage inputs recorded ahead of time, which lets
/// a whole admission round run without prompting anyone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub matric_score: f64,
    pub fsc_score: f64,
    pub fee_paid: Option<bool>,
    pub test_score: Option<f64>,
    pub interview_score: Option<f64>,
}

impl RosterEntry {
    /// Entry with only the academic record and nothing pre-recorded
    pub fn new(name: impl Into<String>, matric_score: f64, fsc_score: f64) -> Self {
        Self {
            name: name.into(),
            matric_score,
            fsc_score,
            fee_paid: None,
            test_score: None,
            interview_score: None,
        }
    }

    /// The candidate record this entry starts out as
    pub fn to_candidate(&self) -> Candidate {
        Candidate::new(self.name.clone(), self.matric_score, self.fsc_score)
    }
}

// =============================================================================
// Roster - arena of candidates
// =============================================================================

/// Owns every candidate for the duration of an admission round.
///
/// Candidates are never removed; stages narrow a `Vec<CandidateId>` view
/// instead.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    candidates: Vec<Candidate>,
}

impl Roster {
    /// Creates a new, empty Roster
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
        }
    }

    /// Build a roster from parsed entries, preserving file order
    pub fn from_entries(entries: &[RosterEntry]) -> Self {
        let mut roster = Self::new();
        for entry in entries {
            roster.insert(entry.to_candidate());
        }
        roster
    }

    /// Add a candidate and return its id
    pub fn insert(&mut self, candidate: Candidate) -> CandidateId {
        self.candidates.push(candidate);
        self.candidates.len() - 1
    }

    /// Get a candidate by id
    pub fn get(&self, id: CandidateId) -> Option<&Candidate> {
        self.candidates.get(id)
    }

    /// Get a candidate by id for updating stage fields
    pub fn get_mut(&mut self, id: CandidateId) -> Option<&mut Candidate> {
        self.candidates.get_mut(id)
    }

    /// Every id in the roster, in insertion order
    pub fn ids(&self) -> Vec<CandidateId> {
        (0..self.candidates.len()).collect()
    }

    /// Resolve a working set back to candidate records, skipping unknown ids
    pub fn resolve<'a>(
        &'a self,
        ids: &'a [CandidateId],
    ) -> impl Iterator<Item = &'a Candidate> + 'a {
        ids.iter().filter_map(move |&id| self.get(id))
    }

    /// Every candidate with its id, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (CandidateId, &Candidate)> {
        self.candidates.iter().enumerate()
    }

    /// Number of candidates on the roster
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the roster holds no candidates
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
