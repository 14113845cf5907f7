//! Error types for package-graph.

use std::path::PathBuf;

use status_parser::ParseError;
use thiserror::Error;

/// Errors that abort a whole load. No table is produced.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read the status file
    #[error("failed to read status file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record in the status file is malformed
    #[error("failed to parse status file: {0}")]
    Parse(#[from] ParseError),
}

/// Lookup of a package name that is not in the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("package not found: {name}")]
pub struct NotFound {
    pub name: String,
}

impl NotFound {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
