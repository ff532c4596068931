//! # Sources Crate
//!
//! Stage input sources: where fee, test and interview results come from.
//!
//! An admission round only talks to the `StageInputSource` trait, so the
//! same stages run against a person at a console, a roster file with the
//! results already filled in, or a random simulation.
//!
//! ## Components
//!
//! ### Recorded Source
//! Replays results from the optional columns of a roster file.
//!
//! ### Simulated Source
//! Seeded random results, plus `random_roster` for made-up applicants.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{RecordedSource, StageInputSource};
//!
//! let entries = roster::parse_roster(path)?;
//! let roster = roster::Roster::from_entries(&entries);
//! let mut source = RecordedSource::new(entries);
//!
//! let paid = source.fee_paid(0, roster.get(0).unwrap())?;
//! ```

pub mod recorded;
pub mod simulated;
pub mod types;

// Re-export commonly used types
pub use recorded::RecordedSource;
pub use simulated::{SimulatedSource, random_roster};
pub use types::{SourceError, StageField, StageInputSource};
