//! # status-parser
//!
//! Parse a package status database (the `dpkg` status file format) into
//! name-keyed records.
//!
//! ## Overview
//!
//! The `status-parser` crate is the first half of the load pipeline:
//! - **status-parser**: Splits the text into records and extracts fields
//! - **package-graph**: Resolves dependency expressions into a graph
//!
//! Only `Package`, `Version`, `Description` and `Depends` are extracted.
//! `Description` is a folded field: lines starting with a space or tab after
//! it are appended verbatim. Every other field is skipped.
//!
//! ## Example
//!
//! ```
//! use status_parser::parse_records;
//!
//! let text = "\
//! Package: a
//! Version: 1.0
//! Depends: libc6 (>= 2.34), b | c
//! Description: short
//!  longer line
//! ";
//!
//! let records = parse_records(text).unwrap();
//! let a = records.get("a").unwrap();
//! assert_eq!(a.description, "short\n longer line");
//! assert_eq!(a.depends, vec!["libc6 (>= 2.34)", "b | c"]);
//! ```
//!
//! ## Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `parse_records()` | O(n) in input size |
//! | `RecordSet::get()` | O(1) |
//! | `RecordSet::iter()` | O(n) |

mod error;
mod parser;
mod record;
mod splitter;

pub use error::ParseError;
pub use parser::{
    parse_record, parse_records, split_depends, FieldScanner, ScanState, DEPENDS_SEPARATOR,
};
pub use record::{RecordSet, StatusRecord};
pub use splitter::{split_records, RawBlock, RecordSplitter};
