//! # Namespace arithmetic on event names.
//!
//! An event name is a string of segments joined by the emitter's delimiter:
//! `"a.b.c"` sits below `"a.b"`, which sits below `"a"`. All matching here is
//! literal substring work; there is no escaping, and a delimiter occurring
//! inside a segment is treated as a separator.
//!
//! ## Contents
//! - [`parent`] truncates a name at the last delimiter occurrence
//! - [`in_branch`] tests "same name or namespace descendant"
//! - [`ancestors`] walks a name and its chain of strict ancestors

/// Returns the parent of `name`: everything before the last occurrence of
/// `delimiter`, or `None` when truncation would yield the empty string
/// (no delimiter left, or the name starts with one).
pub(crate) fn parent<'a>(name: &'a str, delimiter: &str) -> Option<&'a str> {
    match name.rfind(delimiter) {
        Some(idx) if idx > 0 => Some(&name[..idx]),
        _ => None,
    }
}

/// True when `key` lies in the branch rooted at `root`: either the exact
/// same name, or a descendant (`root` followed immediately by `delimiter`).
///
/// Ancestors of `root` are *not* in its branch; the test is asymmetric on
/// purpose (unsubscribe scopes to "this name and below").
pub(crate) fn in_branch(key: &str, root: &str, delimiter: &str) -> bool {
    if key == root {
        return true;
    }
    key.len() > root.len() && key.starts_with(root) && key[root.len()..].starts_with(delimiter)
}

/// Iterator over `name` and its strict namespace ancestors, nearest first.
///
/// `ancestors("a.b.c", ".")` yields `"a.b.c"`, `"a.b"`, `"a"`. An empty name
/// yields nothing.
pub(crate) fn ancestors<'a>(name: &'a str, delimiter: &'a str) -> Ancestors<'a> {
    Ancestors {
        next: if name.is_empty() { None } else { Some(name) },
        delimiter,
    }
}

pub(crate) struct Ancestors<'a> {
    next: Option<&'a str>,
    delimiter: &'a str,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let current = self.next.take()?;
        self.next = parent(current, self.delimiter);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_truncates_last_segment() {
        assert_eq!(parent("a.b.c", "."), Some("a.b"));
        assert_eq!(parent("a.b", "."), Some("a"));
        assert_eq!(parent("a", "."), None);
    }

    #[test]
    fn test_parent_with_leading_delimiter() {
        assert_eq!(parent(".a", "."), None, "truncation to empty stops");
    }

    #[test]
    fn test_parent_multi_char_delimiter() {
        assert_eq!(parent("a::b::c", "::"), Some("a::b"));
        assert_eq!(parent("a::b", "::"), Some("a"));
        assert_eq!(parent("a.b", "::"), None);
    }

    #[test]
    fn test_in_branch_exact_and_descendants() {
        assert!(in_branch("a", "a", "."));
        assert!(in_branch("a.b", "a", "."));
        assert!(in_branch("a.b.c.d", "a", "."), "depth does not matter");
    }

    #[test]
    fn test_in_branch_rejects_ancestors_and_siblings() {
        assert!(!in_branch("a", "a.b", "."), "ancestors are not in the branch");
        assert!(!in_branch("ab", "a", "."), "prefix without delimiter");
        assert!(!in_branch("b.a", "a", "."));
    }

    #[test]
    fn test_ancestors_chain() {
        let chain: Vec<&str> = ancestors("a.b.c", ".").collect();
        assert_eq!(chain, ["a.b.c", "a.b", "a"]);
    }

    #[test]
    fn test_ancestors_single_segment() {
        let chain: Vec<&str> = ancestors("root", ".").collect();
        assert_eq!(chain, ["root"]);
    }

    #[test]
    fn test_ancestors_empty_name_yields_nothing() {
        assert_eq!(ancestors("", ".").count(), 0);
    }
}
