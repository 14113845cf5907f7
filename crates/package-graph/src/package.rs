//! Resolved package type.

use serde::Serialize;

/// A package in a resolved [`PackageTable`](crate::PackageTable).
///
/// Edges are stored as package names. Every name in `dependencies` and
/// `required_by` is a key of the table the package belongs to; use
/// [`PackageTable::dependencies_of`](crate::PackageTable::dependencies_of)
/// and [`PackageTable::required_by_of`](crate::PackageTable::required_by_of)
/// to walk them as packages.
///
/// Serializes to `{name, version, description, dependencies, required_by}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Package {
    /// Package name, unique within the table
    pub name: String,
    /// Version string, kept opaque
    pub version: String,
    /// Folded description
    pub description: String,
    /// Resolved direct dependencies in declared order. Not de-duplicated.
    pub dependencies: Vec<String>,
    /// Packages that declare this one as a dependency
    pub required_by: Vec<String>,
}

impl Package {
    /// First line of the description.
    pub fn synopsis(&self) -> &str {
        self.description.lines().next().unwrap_or_default()
    }

    pub fn depends_on(&self, name: &str) -> bool {
        self.dependencies.iter().any(|d| d == name)
    }

    pub fn is_required_by(&self, name: &str) -> bool {
        self.required_by.iter().any(|r| r == name)
    }

    /// Format the package as human-readable text.
    pub fn format_text(&self) -> String {
        let mut text = format!("# Package: {}\n* Version: {}\n", self.name, self.version);
        if !self.dependencies.is_empty() {
            text.push_str(&format!("* Depends: {}\n", self.dependencies.join(", ")));
        }
        if !self.required_by.is_empty() {
            text.push_str(&format!("* Required by: {}\n", self.required_by.join(", ")));
        }
        if !self.description.is_empty() {
            text.push_str(&format!("* Description: {}\n", self.description));
        }
        text
    }
}
