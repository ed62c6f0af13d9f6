//! Path matching against a set of selectors.
//!
//! A path is selected when it and some selector are related by the prefix
//! relation in either direction: the path is at or below a selector (the
//! selector's subtree is kept), or the path is an ancestor of a selector
//! (kept so the selected subtree stays reachable).

use super::ast::{Fields, Selector};
use super::error::FieldsError;
use super::parser::Parser;

/// How segment names are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    #[default]
    Sensitive,
    Insensitive,
}

impl CaseSensitivity {
    /// Maps an `ignore_case` configuration flag to a comparison mode.
    pub fn from_ignore_case(ignore_case: bool) -> Self {
        if ignore_case {
            CaseSensitivity::Insensitive
        } else {
            CaseSensitivity::Sensitive
        }
    }

    /// Compares two segment names under this mode.
    pub fn segments_equal(self, left: &str, right: &str) -> bool {
        match self {
            CaseSensitivity::Sensitive => left == right,
            CaseSensitivity::Insensitive => left
                .chars()
                .flat_map(char::to_lowercase)
                .eq(right.chars().flat_map(char::to_lowercase)),
        }
    }
}

/// Returns true if one of `path` and `selector` is a segment-wise prefix of the other.
fn related<S: AsRef<str>>(path: &[S], selector: &Selector, case: CaseSensitivity) -> bool {
    path.iter()
        .zip(selector.segments())
        .all(|(p, s)| case.segments_equal(p.as_ref(), s))
}

impl Fields {
    /// Returns true if the property at `path` is selected.
    ///
    /// `path` is the sequence of property names from the root, e.g.
    /// `["a", "b"]` for the property `b` of the object at `a`.
    ///
    /// # Example
    ///
    /// ```
    /// use fieldquill::fields::{CaseSensitivity, Fields};
    ///
    /// let fields = Fields::parse("a/b").unwrap();
    /// assert!(fields.matches(&["a"], CaseSensitivity::Sensitive));
    /// assert!(fields.matches(&["a", "b", "c"], CaseSensitivity::Sensitive));
    /// assert!(!fields.matches(&["a", "c"], CaseSensitivity::Sensitive));
    /// ```
    pub fn matches<S: AsRef<str>>(&self, path: &[S], case: CaseSensitivity) -> bool {
        self.iter().any(|selector| related(path, selector, case))
    }

    /// Parses selector text, failing on malformed input.
    pub fn parse(text: &str) -> Result<Fields, FieldsError> {
        Parser::parse(text)
    }
}

/// Tests a concrete path, itself expressed as a selector, against a selection.
pub fn matches(path: &Selector, fields: &Fields, case: CaseSensitivity) -> bool {
    fields.matches(path.segments(), case)
}

/// Selectors retained regardless of the caller's selection.
///
/// Built once from configuration and shared read-only afterwards. Carries its
/// own case sensitivity, independent of the caller's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlwaysIncluded {
    fields: Fields,
    case_sensitivity: CaseSensitivity,
}

impl AlwaysIncluded {
    pub fn new(fields: Fields, case_sensitivity: CaseSensitivity) -> Self {
        Self {
            fields,
            case_sensitivity,
        }
    }

    /// Parses and merges several selector expressions into one set.
    pub fn parse<I, S>(expressions: I, case_sensitivity: CaseSensitivity) -> Result<Self, FieldsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut fields = Fields::new();
        for expression in expressions {
            fields.extend(Fields::parse(expression.as_ref())?);
        }
        Ok(Self::new(fields, case_sensitivity))
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn case_sensitivity(&self) -> CaseSensitivity {
        self.case_sensitivity
    }

    pub fn matches<S: AsRef<str>>(&self, path: &[S]) -> bool {
        self.fields.matches(path, self.case_sensitivity)
    }
}
