//! Error types for the Break Reconciliation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The only fatal conditions in the engine are ingestion failures: a CSV
//! source that cannot be read as tabular data, or a timecard header missing
//! a required logical column. Every other irregularity (blank rows,
//! unparseable time fragments, unmatched names) degrades into absent fields
//! and flows through classification as data.

use std::fmt;

/// The main error type for the Break Reconciliation Engine.
///
/// # Example
///
/// ```
/// use break_audit::error::AuditError;
///
/// let error = AuditError::MissingColumn {
///     source: "timecard".to_string(),
///     column: "pay date".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Source 'timecard' is missing required column: pay date"
/// );
/// ```
#[derive(Debug)]
pub enum AuditError {
    /// The CSV source itself could not be parsed as tabular data.
    SourceFormat {
        /// The logical source name ("timecard" or "break sheet").
        source: String,
        /// The underlying parser's message.
        message: String,
    },

    /// A required logical column could not be resolved from the header row.
    MissingColumn {
        /// The logical source name.
        source: String,
        /// The logical column that could not be resolved.
        column: String,
    },
}

impl fmt::Display for AuditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditError::SourceFormat { source, message } => {
                write!(f, "Failed to parse source '{source}': {message}")
            }
            AuditError::MissingColumn { source, column } => {
                write!(f, "Source '{source}' is missing required column: {column}")
            }
        }
    }
}

impl std::error::Error for AuditError {}

/// A type alias for Results that return AuditError.
pub type AuditResult<T> = Result<T, AuditError>;
