//! Error types for status-parser.

use thiserror::Error;

/// Errors that can occur while parsing a status database.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A record has no `Package` field, or the field is empty
    #[error("record {ordinal} (starting at line {line}) has no Package field")]
    MissingPackage {
        /// 1-based position of the record in the source text
        ordinal: usize,
        /// 1-based line number where the record starts
        line: usize,
    },
}
