//! # package-graph
//!
//! Resolve parsed status records into a bidirectional dependency graph and
//! provide fast lookups by package name.
//!
//! ## Overview
//!
//! The `package-graph` crate builds on `status-parser`:
//! - **status-parser**: Splits the status file into name-keyed records
//! - **package-graph**: Resolves each record's `Depends` expressions
//!
//! Resolution picks, for every dependency expression, the first candidate
//! in declared order that is a package in the same file. Version constraints
//! and architecture qualifiers are ignored. Expressions with no such
//! candidate (virtual packages, packages outside the snapshot) are dropped
//! without error.
//!
//! ## Example
//!
//! ```
//! use package_graph::PackageTable;
//!
//! let text = "\
//! Package: p
//! Depends: b | a | c, ghost-pkg
//!
//! Package: a
//!
//! Package: c
//! ";
//!
//! let table = PackageTable::parse(text).unwrap();
//! let p = table.get_by_name("p").unwrap();
//! assert_eq!(p.dependencies, vec!["a"]);
//! assert_eq!(table.get_by_name("a").unwrap().required_by, vec!["p"]);
//! assert!(table.get_by_name("b").is_err());
//! ```
//!
//! ## Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `load()` / `parse()` | O(n) in input size |
//! | `get_by_name(name)` | O(1) |
//! | `get_all()` | O(1) |

mod error;
mod expression;
mod package;
mod resolve;
mod table;

pub use error::{LoadError, NotFound};
pub use expression::{bare_name, DependencyExpr, ALTERNATIVES_SEPARATOR};
pub use package::Package;
pub use resolve::{resolve, ResolveStats};
pub use table::{PackageTable, Violation};

// Re-export parser types for convenience
pub use status_parser::{ParseError, RecordSet, StatusRecord};
