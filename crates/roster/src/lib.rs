//! # Roster Crate
//!
//! Candidate records for an admission round and the arena that owns them.
//!
//! ## Main Components
//!
//! - **types**: `Candidate`, `RosterEntry`, `Roster`, `CandidateId`
//! - **parser**: Parse `name::matric::fsc[...]` roster files
//! - **error**: Error types for roster loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use roster::Roster;
//! use std::path::Path;
//!
//! let mut roster = Roster::load_from_file(Path::new("data/applicants.roster"))?;
//! let first = roster.ids()[0];
//! roster.get_mut(first).unwrap().fee_paid = true;
//! ```

pub mod error;
pub mod parser;
pub mod types;

pub use error::{Result, RosterError};
pub use parser::{parse_roster, parse_roster_str};
pub use types::{Candidate, CandidateId, Roster, RosterEntry};
