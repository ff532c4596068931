//! Error types for the roster crate.
//!
//! Every failure here comes from reading or parsing a roster file. Once a
//! `Roster` exists, nothing in it can fail.

use thiserror::Error;

/// Errors that can occur while loading a roster file
#[derive(Error, Debug)]
pub enum RosterError {
    /// Roster file could not be found
    #[error("Failed to open roster file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in the roster file couldn't be parsed
    #[error("Parse error at line {line}: {reason}")]
    ParseError { line: usize, reason: String },

    /// A field had a value outside what the roster accepts
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Roster lines carry either 3 fields or 6 fields
    #[error("Expected 3 or 6 fields but found {found} in line {line}")]
    FieldCountMismatch { found: usize, line: usize },

    /// Candidate name is blank
    #[error("Empty candidate name in line {line}")]
    EmptyName { line: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RosterError>;
