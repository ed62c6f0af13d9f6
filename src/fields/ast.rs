//! Selector types produced by the fields parser.

use indexmap::IndexSet;
use std::fmt;

/// Separator between segments of a selector, e.g. `a/b/c`.
pub const SEPARATOR: char = '/';

/// One concrete path a caller wants present in the output, e.g. `a/b/c`.
///
/// A selector always has at least one segment and no segment is empty, so a
/// `Selector` can never stand for "the root" or contain `//`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Selector {
    segments: Vec<String>,
}

impl Selector {
    /// Creates a selector from its segments.
    ///
    /// Returns `None` if `segments` is empty or any segment is empty or
    /// contains one of the reserved characters `/ , ( )`.
    ///
    /// # Example
    ///
    /// ```
    /// use fieldquill::fields::Selector;
    ///
    /// let selector = Selector::new(vec!["a".to_string(), "b".to_string()]).unwrap();
    /// assert_eq!(selector.to_string(), "a/b");
    ///
    /// assert!(Selector::new(vec![]).is_none());
    /// assert!(Selector::new(vec!["a/b".to_string()]).is_none());
    /// ```
    pub fn new(segments: Vec<String>) -> Option<Self> {
        if segments.is_empty() || !segments.iter().all(|s| is_valid_segment(s)) {
            return None;
        }
        Some(Self { segments })
    }

    /// Parser-internal constructor; the parser only emits checked segments.
    pub(crate) fn from_parsed(segments: Vec<String>) -> Self {
        debug_assert!(!segments.is_empty());
        Self { segments }
    }

    /// Returns the segments of this selector.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the number of segments (always at least one).
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

/// Returns true if `c` is part of the selector syntax and may not appear in a segment.
pub(crate) fn is_reserved(c: char) -> bool {
    matches!(c, '/' | ',' | '(' | ')')
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty() && !segment.chars().any(is_reserved)
}

/// The de-duplicated set of selectors produced by one parse.
///
/// An empty `Fields` is a valid selection that matches nothing. Equality
/// ignores the order selectors were written in, so `a(b,c)` and `a/c,a/b`
/// compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    selectors: IndexSet<Selector>,
}

impl Fields {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a selector. Returns false if it was already present.
    pub fn insert(&mut self, selector: Selector) -> bool {
        self.selectors.insert(selector)
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    pub fn contains(&self, selector: &Selector) -> bool {
        self.selectors.contains(selector)
    }

    /// Iterates the selectors in the order they were first written.
    pub fn iter(&self) -> impl Iterator<Item = &Selector> {
        self.selectors.iter()
    }

    /// Merges all selectors of `other` into this set.
    pub fn extend(&mut self, other: Fields) {
        self.selectors.extend(other.selectors);
    }
}

impl FromIterator<Selector> for Fields {
    fn from_iter<I: IntoIterator<Item = Selector>>(iter: I) -> Self {
        Self {
            selectors: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a Selector;
    type IntoIter = indexmap::set::Iter<'a, Selector>;

    fn into_iter(self) -> Self::IntoIter {
        self.selectors.iter()
    }
}

impl fmt::Display for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, selector) in self.selectors.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", selector)?;
        }
        Ok(())
    }
}
