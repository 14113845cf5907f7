//! Field extraction for status records.

use tracing::{debug, trace};

use crate::error::ParseError;
use crate::record::{RecordSet, StatusRecord};
use crate::splitter::{split_records, RawBlock};

const PACKAGE: &str = "Package";
const VERSION: &str = "Version";
const DESCRIPTION: &str = "Description";
const DEPENDS: &str = "Depends";

/// Separator between items of a `Depends` field.
pub const DEPENDS_SEPARATOR: &str = ", ";

/// What the scanner does with the next line it is fed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanState {
    /// Looking for a field line; indented lines are ignored
    #[default]
    SeekingField,
    /// Inside a `Description`; indented lines are appended to it
    AccumulatingDescription,
}

/// Line-at-a-time scanner over the lines of one record.
#[derive(Debug, Default)]
pub struct FieldScanner {
    state: ScanState,
    name: Option<String>,
    version: String,
    description: String,
    depends: Vec<String>,
}

impl FieldScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Feed one line (without its terminator) to the scanner.
    pub fn feed(&mut self, line: &str) {
        if self.state == ScanState::AccumulatingDescription {
            if is_continuation(line) {
                self.description.push_str(line);
                self.description.push('\n');
                return;
            }
            self.state = ScanState::SeekingField;
        }

        // continuation of a field we don't extract
        if is_continuation(line) {
            return;
        }

        let Some((tag, _)) = line.split_once(':') else {
            return;
        };
        let value = field_value(line);
        match tag {
            PACKAGE => self.name = Some(value.trim().to_string()),
            VERSION => self.version = value.trim().to_string(),
            DESCRIPTION => {
                self.description.clear();
                self.description.push_str(value);
                self.description.push('\n');
                self.state = ScanState::AccumulatingDescription;
            }
            DEPENDS => self.depends = split_depends(value),
            _ => {}
        }
    }

    /// Finish scanning. Returns `None` if no non-empty `Package` field was seen.
    pub fn finish(self) -> Option<StatusRecord> {
        let name = self.name.filter(|n| !n.is_empty())?;
        Some(StatusRecord {
            name,
            version: self.version,
            description: self.description.trim_end().to_string(),
            depends: self.depends,
        })
    }
}

fn is_continuation(line: &str) -> bool {
    line.starts_with([' ', '\t'])
}

/// Text after the first `": "` of a field line, or empty if there is none.
fn field_value(line: &str) -> &str {
    line.split_once(": ").map_or("", |(_, value)| value)
}

/// Split a `Depends` value into raw dependency expressions.
pub fn split_depends(value: &str) -> Vec<String> {
    value
        .split(DEPENDS_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a single block into a record.
pub fn parse_record(block: &RawBlock<'_>) -> Result<StatusRecord, ParseError> {
    let mut scanner = FieldScanner::new();
    for line in &block.lines {
        scanner.feed(line);
    }
    scanner.finish().ok_or(ParseError::MissingPackage {
        ordinal: block.ordinal,
        line: block.line,
    })
}

/// Parse a whole status database into records keyed by package name.
///
/// Fails on the first record without a `Package` field; no partial set is
/// returned.
#[tracing::instrument(name = "parse_records", level = "trace", skip_all, fields(bytes = text.len()))]
pub fn parse_records(text: &str) -> Result<RecordSet, ParseError> {
    let mut records = RecordSet::new();
    for block in split_records(text) {
        let record = parse_record(&block)?;
        trace!(
            "record {} at line {}: {} {}",
            block.ordinal,
            block.line,
            record.name,
            record.version
        );
        records.insert(record);
    }
    debug!("parsed {} records", records.len());
    Ok(records)
}
