//! Dependency expression parsing.
//!
//! A raw expression is one item of a `Depends` field. It is either a single
//! package or an alternatives group (`a | b (>= 1) | c:any`). Version
//! constraints and architecture qualifiers are stripped; only the bare names
//! take part in resolution.

/// Separator between the alternatives of a group.
pub const ALTERNATIVES_SEPARATOR: &str = " | ";

/// Strip version constraints and architecture qualifiers from a token.
///
/// Truncates at the first space, then at the first `:`.
///
/// ```
/// use package_graph::bare_name;
///
/// assert_eq!(bare_name("libfoo (>= 2.0)"), "libfoo");
/// assert_eq!(bare_name("libbar:amd64"), "libbar");
/// assert_eq!(bare_name("python3:any (>= 3.9~)"), "python3");
/// ```
pub fn bare_name(token: &str) -> &str {
    let token = token.trim_start();
    let token = token.split(' ').next().unwrap_or(token);
    token.split(':').next().unwrap_or(token)
}

/// A parsed dependency expression: its candidate names in declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyExpr<'a> {
    raw: &'a str,
    candidates: Vec<&'a str>,
}

impl<'a> DependencyExpr<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let candidates = if raw.contains(ALTERNATIVES_SEPARATOR) {
            raw.split(ALTERNATIVES_SEPARATOR).map(bare_name).collect()
        } else {
            vec![bare_name(raw)]
        };
        Self { raw, candidates }
    }

    /// The expression as it appeared in the status file.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Bare candidate names, in declared order.
    pub fn candidates(&self) -> &[&'a str] {
        &self.candidates
    }

    pub fn is_alternatives(&self) -> bool {
        self.candidates.len() > 1
    }

    /// The first candidate, in declared order, for which `exists` holds.
    pub fn select<F>(&self, exists: F) -> Option<&'a str>
    where
        F: Fn(&str) -> bool,
    {
        self.candidates
            .iter()
            .copied()
            .find(|name| !name.is_empty() && exists(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_name() {
        assert_eq!(bare_name("libfoo"), "libfoo");
        assert_eq!(bare_name("libfoo (>= 2.0)"), "libfoo");
        assert_eq!(bare_name("libbar:amd64"), "libbar");
        assert_eq!(bare_name("libbaz:any (<< 3)"), "libbaz");
        assert_eq!(bare_name(""), "");
    }

    #[test]
    fn test_single_expression() {
        let expr = DependencyExpr::parse("libc6 (>= 2.34)");
        assert!(!expr.is_alternatives());
        assert_eq!(expr.candidates(), &["libc6"]);
        assert_eq!(expr.raw(), "libc6 (>= 2.34)");
    }

    #[test]
    fn test_alternatives_group() {
        let expr = DependencyExpr::parse("default-mta | mail-transport-agent:any | exim4 (>= 4)");
        assert!(expr.is_alternatives());
        assert_eq!(
            expr.candidates(),
            &["default-mta", "mail-transport-agent", "exim4"]
        );
    }

    #[test]
    fn test_select_first_existing() {
        let expr = DependencyExpr::parse("b | a | c");
        let table = ["a", "c"];
        assert_eq!(expr.select(|n| table.contains(&n)), Some("a"));
    }

    #[test]
    fn test_select_none() {
        let expr = DependencyExpr::parse("x | y");
        assert_eq!(expr.select(|_| false), None);

        let expr = DependencyExpr::parse("ghost-pkg");
        assert_eq!(expr.select(|n| n == "real"), None);
    }

    #[test]
    fn test_pipe_without_spaces_is_one_name() {
        let expr = DependencyExpr::parse("a|b");
        assert!(!expr.is_alternatives());
        assert_eq!(expr.candidates(), &["a|b"]);
    }
}
