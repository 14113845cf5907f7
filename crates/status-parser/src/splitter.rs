//! Splits status database text into blank-line-separated blocks.

/// One record's worth of lines, borrowed from the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock<'a> {
    /// 1-based position among the non-empty blocks
    pub ordinal: usize,
    /// 1-based line number of the block's first line
    pub line: usize,
    /// Lines of the block with line terminators removed
    pub lines: Vec<&'a str>,
}

/// Iterator over the record blocks of a status database.
///
/// A block ends at an empty line or at end of input. Consecutive empty lines
/// and a terminal separator never yield an empty block, and blocks made only
/// of whitespace are skipped.
pub struct RecordSplitter<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    ordinal: usize,
}

impl<'a> RecordSplitter<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            ordinal: 0,
        }
    }
}

impl<'a> Iterator for RecordSplitter<'a> {
    type Item = RawBlock<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut start = None;
        let mut lines: Vec<&'a str> = Vec::new();

        for (idx, line) in self.lines.by_ref() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.is_empty() {
                if lines.iter().any(|l| !l.trim().is_empty()) {
                    break;
                }
                start = None;
                lines.clear();
                continue;
            }
            start.get_or_insert(idx + 1);
            lines.push(line);
        }

        if lines.iter().all(|l| l.trim().is_empty()) {
            return None;
        }

        self.ordinal += 1;
        Some(RawBlock {
            ordinal: self.ordinal,
            line: start.unwrap_or(1),
            lines,
        })
    }
}

/// Split `text` into record blocks.
pub fn split_records(text: &str) -> RecordSplitter<'_> {
    RecordSplitter::new(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_two_records() {
        let text = "Package: a\nVersion: 1\n\nPackage: b\nVersion: 2\n";
        let blocks: Vec<_> = split_records(text).collect();

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].lines, vec!["Package: a", "Version: 1"]);
        assert_eq!(blocks[0].line, 1);
        assert_eq!(blocks[1].lines, vec!["Package: b", "Version: 2"]);
        assert_eq!(blocks[1].line, 4);
        assert_eq!(blocks[1].ordinal, 2);
    }

    #[test]
    fn test_trailing_separator_is_discarded() {
        let text = "Package: a\n\nPackage: b\n\n";
        let blocks: Vec<_> = split_records(text).collect();
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_repeated_blank_lines() {
        let text = "\n\nPackage: a\n\n\n\nPackage: b\n\n\n";
        let blocks: Vec<_> = split_records(text).collect();

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].line, 3);
        assert_eq!(blocks[1].line, 7);
        assert_eq!(blocks[1].ordinal, 2);
    }

    #[test]
    fn test_crlf_input() {
        let text = "Package: a\r\nVersion: 1\r\n\r\nPackage: b\r\n";
        let blocks: Vec<_> = split_records(text).collect();

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].lines, vec!["Package: a", "Version: 1"]);
    }

    #[test]
    fn test_whitespace_only_block_is_skipped() {
        let text = "Package: a\n\n  \n\t\n\nPackage: b\n";
        let blocks: Vec<_> = split_records(text).collect();

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].lines, vec!["Package: b"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(split_records("").count(), 0);
        assert_eq!(split_records("\n\n\n").count(), 0);
    }
}
