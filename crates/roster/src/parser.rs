//! Parser for roster files.
//!
//! Format, one candidate per line:
//! - `name::matric::fsc`
//! - `name::matric::fsc::fee_paid::test_score::interview_score`
//!
//! In the six-field form an empty field means the value was not recorded.
//! Blank lines and lines starting with `#` are skipped.

use crate::error::{Result, RosterError};
use crate::types::{Roster, RosterEntry};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

const IDENTITY_FIELDS: usize = 3;
const RECORDED_FIELDS: usize = 6;

/// Parse a single score field. Scores must be finite and non-negative.
pub fn parse_score(field: &str, value: &str) -> Result<f64> {
    let score: f64 = value.trim().parse().map_err(|_| RosterError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    })?;
    if !score.is_finite() || score < 0.0 {
        return Err(RosterError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(score)
}

/// Parse a fee flag (`true`/`false`, any case)
pub fn parse_fee_paid(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(RosterError::InvalidValue {
            field: "fee_paid".to_string(),
            value: value.to_string(),
        }),
    }
}

fn optional<T>(value: &str, parse: impl FnOnce(&str) -> Result<T>) -> Result<Option<T>> {
    if value.trim().is_empty() {
        Ok(None)
    } else {
        parse(value).map(Some)
    }
}

fn parse_line(line: &str, line_no: usize) -> Result<RosterEntry> {
    let parts: Vec<&str> = line.split("::").collect();
    if parts.len() != IDENTITY_FIELDS && parts.len() != RECORDED_FIELDS {
        return Err(RosterError::FieldCountMismatch {
            found: parts.len(),
            line: line_no,
        });
    }

    let name = parts[0].trim();
    if name.is_empty() {
        return Err(RosterError::EmptyName { line: line_no });
    }

    let mut entry = RosterEntry::new(
        name,
        parse_score("matric_score", parts[1])?,
        parse_score("fsc_score", parts[2])?,
    );

    if parts.len() == RECORDED_FIELDS {
        entry.fee_paid = optional(parts[3], parse_fee_paid)?;
        entry.test_score = optional(parts[4], |v| parse_score("test_score", v))?;
        entry.interview_score = optional(parts[5], |v| parse_score("interview_score", v))?;
    }

    Ok(entry)
}

/// Parse roster text into entries, preserving line order.
pub fn parse_roster_str(content: &str) -> Result<Vec<RosterEntry>> {
    let mut entries = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let entry = parse_line(trimmed, line_no).map_err(|err| match err {
            RosterError::InvalidValue { field, value } => RosterError::ParseError {
                line: line_no,
                reason: format!("invalid value for {field}: {value:?}"),
            },
            other => other,
        })?;
        entries.push(entry);
    }

    Ok(entries)
}

/// Read and parse a roster file.
pub fn parse_roster(path: &Path) -> Result<Vec<RosterEntry>> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => RosterError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => RosterError::IoError(err),
    })?;
    parse_roster_str(&content)
}

impl Roster {
    /// Load a roster file into a fresh `Roster`.
    ///
    /// Recorded stage inputs are discarded here; use [`parse_roster`] to keep them.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let entries = parse_roster(path)?;
        tracing::debug!("Loaded {} candidates from {}", entries.len(), path.display());
        Ok(Self::from_entries(&entries))
    }
}
