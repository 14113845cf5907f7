//! Dependency resolution: turn raw `Depends` expressions into graph edges.

use serde::Serialize;
use status_parser::RecordSet;
use tracing::{debug, info};

use crate::expression::DependencyExpr;
use crate::package::Package;
use crate::table::PackageTable;

/// Counters collected while resolving a record set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResolveStats {
    /// Number of packages in the table
    pub packages: usize,
    /// Number of resolved dependency edges
    pub edges: usize,
    /// Dependency expressions with no candidate in the table
    pub dropped: usize,
}

/// Resolve every record's dependency expressions against the record set.
///
/// Each expression resolves to its first candidate, in declared order, that
/// names a package in the set. Expressions with no such candidate are dropped
/// silently. For every resolved edge `a -> b`, `b` is appended to
/// `a.dependencies` and `a` to `b.required_by`.
///
/// Consumes the records, so a set can only ever be resolved once.
#[tracing::instrument(name = "resolve", level = "trace", skip_all, fields(records = records.len()))]
pub fn resolve(records: RecordSet) -> PackageTable {
    let (records, by_name) = records.into_parts();

    let mut packages = Vec::with_capacity(records.len());
    let mut edges = Vec::new();
    let mut dropped = 0;

    for (from, record) in records.into_iter().enumerate() {
        for raw in &record.depends {
            let expr = DependencyExpr::parse(raw);
            let target = expr
                .select(|name| by_name.contains_key(name))
                .and_then(|name| by_name.get(name).copied());
            match target {
                Some(to) => edges.push((from, to)),
                None => {
                    dropped += 1;
                    debug!("{}: no package satisfies {:?}, dropping", record.name, raw);
                }
            }
        }

        packages.push(Package {
            name: record.name,
            version: record.version,
            description: record.description,
            dependencies: Vec::new(),
            required_by: Vec::new(),
        });
    }

    for &(from, to) in &edges {
        let dependency = packages[to].name.clone();
        let dependent = packages[from].name.clone();
        packages[from].dependencies.push(dependency);
        packages[to].required_by.push(dependent);
    }

    let stats = ResolveStats {
        packages: packages.len(),
        edges: edges.len(),
        dropped,
    };
    info!(
        "resolved {} packages, {} edges, {} dropped dependencies",
        stats.packages, stats.edges, stats.dropped
    );

    PackageTable::from_parts(packages, by_name, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use status_parser::StatusRecord;

    fn record(name: &str, depends: &[&str]) -> StatusRecord {
        StatusRecord {
            name: name.to_string(),
            version: "1.0".to_string(),
            depends: depends.iter().map(|d| d.to_string()).collect(),
            ..Default::default()
        }
    }

    fn records(list: Vec<StatusRecord>) -> RecordSet {
        list.into_iter().collect()
    }

    #[test]
    fn test_alternatives_first_match() {
        let table = resolve(records(vec![
            record("p", &["b | a | c"]),
            record("a", &[]),
            record("c", &[]),
        ]));

        let p = table.get_by_name("p").unwrap();
        assert_eq!(p.dependencies, vec!["a"]);

        let a = table.get_by_name("a").unwrap();
        assert_eq!(a.required_by, vec!["p"]);

        let c = table.get_by_name("c").unwrap();
        assert!(c.required_by.is_empty());
        assert!(table.get_by_name("b").is_err());
    }

    #[test]
    fn test_alternatives_none_exist() {
        let table = resolve(records(vec![record("p", &["x | y | z"])]));
        assert!(table.get_by_name("p").unwrap().dependencies.is_empty());
        assert_eq!(table.stats().dropped, 1);
    }

    #[test]
    fn test_unresolvable_is_dropped() {
        let table = resolve(records(vec![
            record("p", &["ghost-pkg", "real"]),
            record("real", &[]),
        ]));

        assert_eq!(table.get_by_name("p").unwrap().dependencies, vec!["real"]);
        assert_eq!(
            table.stats(),
            ResolveStats {
                packages: 2,
                edges: 1,
                dropped: 1,
            }
        );
    }

    #[test]
    fn test_bare_name_extraction() {
        let table = resolve(records(vec![
            record("p", &["libfoo (>= 2.0)", "libbar:amd64"]),
            record("libfoo", &[]),
            record("libbar", &[]),
        ]));

        let p = table.get_by_name("p").unwrap();
        assert_eq!(p.dependencies, vec!["libfoo", "libbar"]);
        assert_eq!(table.get_by_name("libbar").unwrap().required_by, vec!["p"]);
    }

    #[test]
    fn test_forward_reference() {
        let table = resolve(records(vec![record("b", &["a"]), record("a", &[])]));
        assert_eq!(table.get_by_name("b").unwrap().dependencies, vec!["a"]);
        assert_eq!(table.get_by_name("a").unwrap().required_by, vec!["b"]);
    }

    #[test]
    fn test_duplicates_kept() {
        let table = resolve(records(vec![
            record("p", &["a", "a (>= 1)", "x | a"]),
            record("a", &[]),
        ]));

        assert_eq!(
            table.get_by_name("p").unwrap().dependencies,
            vec!["a", "a", "a"]
        );
        assert_eq!(
            table.get_by_name("a").unwrap().required_by,
            vec!["p", "p", "p"]
        );
    }

    #[test]
    fn test_required_by_follows_source_order() {
        let table = resolve(records(vec![
            record("z", &["lib"]),
            record("lib", &[]),
            record("m", &["lib"]),
            record("a", &["lib"]),
        ]));

        assert_eq!(
            table.get_by_name("lib").unwrap().required_by,
            vec!["z", "m", "a"]
        );
    }

    #[test]
    fn test_self_and_cyclic_dependencies() {
        let table = resolve(records(vec![
            record("a", &["b", "a"]),
            record("b", &["a"]),
        ]));

        assert_eq!(table.get_by_name("a").unwrap().dependencies, vec!["b", "a"]);
        assert_eq!(table.get_by_name("a").unwrap().required_by, vec!["a", "b"]);
        assert!(table.check_consistency().is_empty());
    }

    #[test]
    fn test_empty_dependencies() {
        let table = resolve(records(vec![record("lonely", &[])]));
        let lonely = table.get_by_name("lonely").unwrap();
        assert!(lonely.dependencies.is_empty());
        assert!(lonely.required_by.is_empty());
        assert_eq!(table.stats().edges, 0);
    }
}
