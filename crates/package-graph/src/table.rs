//! PackageTable: the resolved, read-only package graph with O(1) lookups.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::Serialize;
use status_parser::{parse_records, ParseError};

use crate::error::{LoadError, NotFound};
use crate::package::Package;
use crate::resolve::{resolve, ResolveStats};

/// All packages from one status file snapshot, with their edges resolved.
///
/// Built once by [`PackageTable::load`] or [`PackageTable::parse`] and never
/// mutated afterwards. Share it behind an `Arc` to serve concurrent readers.
#[derive(Debug, Clone, Default)]
pub struct PackageTable {
    /// Packages in status file order
    packages: Vec<Package>,
    /// Index into `packages` by name
    by_name: HashMap<String, usize>,
    stats: ResolveStats,
}

impl PackageTable {
    pub(crate) fn from_parts(
        packages: Vec<Package>,
        by_name: HashMap<String, usize>,
        stats: ResolveStats,
    ) -> Self {
        Self {
            packages,
            by_name,
            stats,
        }
    }

    /// Read, parse and resolve the status file at `path`.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use package_graph::PackageTable;
    ///
    /// let table = PackageTable::load("/var/lib/dpkg/status")?;
    /// let bash = table.get_by_name("bash")?;
    /// for dependent in table.required_by_of(bash) {
    ///     println!("{} needs bash", dependent.name);
    /// }
    /// ```
    #[tracing::instrument(name = "load_status", level = "trace", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);
        Ok(Self::parse(&text)?)
    }

    /// Parse and resolve status file text.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Ok(resolve(parse_records(text)?))
    }

    /// All packages, in status file order.
    pub fn get_all(&self) -> &[Package] {
        &self.packages
    }

    /// O(1) lookup by package name.
    pub fn get_by_name(&self, name: &str) -> Result<&Package, NotFound> {
        self.get(name).ok_or_else(|| NotFound::new(name))
    }

    pub fn get(&self, name: &str) -> Option<&Package> {
        self.by_name.get(name).map(|&idx| &self.packages[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn stats(&self) -> ResolveStats {
        self.stats
    }

    pub fn iter(&self) -> impl Iterator<Item = &Package> {
        self.packages.iter()
    }

    /// Direct dependencies of `package`, in declared order.
    pub fn dependencies_of<'a>(
        &'a self,
        package: &'a Package,
    ) -> impl Iterator<Item = &'a Package> {
        package.dependencies.iter().filter_map(|name| self.get(name))
    }

    /// Packages that depend on `package`.
    pub fn required_by_of<'a>(
        &'a self,
        package: &'a Package,
    ) -> impl Iterator<Item = &'a Package> {
        package.required_by.iter().filter_map(|name| self.get(name))
    }

    /// Scan every edge for broken references or missing reverse edges.
    ///
    /// A table built by this crate always returns an empty list.
    pub fn check_consistency(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        for package in &self.packages {
            for dependency in &package.dependencies {
                match self.get(dependency) {
                    None => violations.push(Violation::DanglingDependency {
                        package: package.name.clone(),
                        dependency: dependency.clone(),
                    }),
                    Some(target) if !target.is_required_by(&package.name) => {
                        violations.push(Violation::MissingReverseEdge {
                            package: package.name.clone(),
                            dependency: dependency.clone(),
                        })
                    }
                    Some(_) => {}
                }
            }
            for dependent in &package.required_by {
                if !self.contains(dependent) {
                    violations.push(Violation::DanglingRequiredBy {
                        package: package.name.clone(),
                        dependent: dependent.clone(),
                    });
                }
            }
        }

        violations
    }
}

impl<'a> IntoIterator for &'a PackageTable {
    type Item = &'a Package;
    type IntoIter = std::slice::Iter<'a, Package>;

    fn into_iter(self) -> Self::IntoIter {
        self.packages.iter()
    }
}

/// A broken invariant found by [`PackageTable::check_consistency`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// `package` depends on `dependency`, which is not in the table
    DanglingDependency { package: String, dependency: String },
    /// `package` is required by `dependent`, which is not in the table
    DanglingRequiredBy { package: String, dependent: String },
    /// `package` depends on `dependency`, but is missing from its `required_by`
    MissingReverseEdge { package: String, dependency: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::DanglingDependency {
                package,
                dependency,
            } => write!(f, "{package} depends on unknown package {dependency}"),
            Violation::DanglingRequiredBy { package, dependent } => {
                write!(f, "{package} is required by unknown package {dependent}")
            }
            Violation::MissingReverseEdge {
                package,
                dependency,
            } => write!(
                f,
                "{package} depends on {dependency} but is not in its required_by"
            ),
        }
    }
}
