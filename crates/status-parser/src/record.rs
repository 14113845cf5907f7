//! Parsed status records and the name-keyed record set.

use std::collections::HashMap;

use tracing::warn;

/// The fields extracted from one status record.
///
/// `depends` holds the raw dependency expressions exactly as declared, one
/// per `", "`-separated item. Alternatives and version qualifiers are still
/// present; resolving them is left to the graph builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusRecord {
    /// Package name (never empty)
    pub name: String,
    /// Version string, kept opaque
    pub version: String,
    /// Folded description with trailing whitespace trimmed
    pub description: String,
    /// Raw dependency expressions (e.g. `"libc6 (>= 2.34)"`, `"foo | bar"`)
    pub depends: Vec<String>,
}

/// Records keyed by package name, preserving source order.
///
/// Inserting a name that is already present replaces the stored record but
/// keeps the position of the first occurrence.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    records: Vec<StatusRecord>,
    by_name: HashMap<String, usize>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            by_name: HashMap::with_capacity(capacity),
        }
    }

    /// Insert a record, returning the record it replaced if the name was
    /// already taken.
    pub fn insert(&mut self, record: StatusRecord) -> Option<StatusRecord> {
        if let Some(&idx) = self.by_name.get(&record.name) {
            warn!(
                "duplicate record for package {}, later record wins",
                record.name
            );
            return Some(std::mem::replace(&mut self.records[idx], record));
        }
        self.by_name.insert(record.name.clone(), self.records.len());
        self.records.push(record);
        None
    }

    pub fn get(&self, name: &str) -> Option<&StatusRecord> {
        self.by_name.get(name).map(|&idx| &self.records[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Position of `name` in insertion order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &StatusRecord> {
        self.records.iter()
    }

    /// Consume the set, yielding records in insertion order together with
    /// the name index.
    pub fn into_parts(self) -> (Vec<StatusRecord>, HashMap<String, usize>) {
        (self.records, self.by_name)
    }
}

impl IntoIterator for RecordSet {
    type Item = StatusRecord;
    type IntoIter = std::vec::IntoIter<StatusRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl FromIterator<StatusRecord> for RecordSet {
    fn from_iter<I: IntoIterator<Item = StatusRecord>>(iter: I) -> Self {
        let mut set = RecordSet::new();
        for record in iter {
            set.insert(record);
        }
        set
    }
}
