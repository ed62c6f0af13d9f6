//! Three-state result of parsing a caller-supplied selector.

use super::ast::Fields;
use super::error::FieldsError;
use super::parser::Parser;

/// Outcome of attempting to parse an optional selector.
///
/// Consumers must distinguish all three states: `Absent` means the feature
/// is not engaged and output is untouched, while `Selected` with an empty
/// set prunes everything not always-included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// No selector was supplied.
    Absent,
    /// A selector was supplied but is not valid syntax.
    Malformed(FieldsError),
    /// A valid selector.
    Selected(Fields),
}

impl ParseOutcome {
    /// True if the caller supplied a selector, valid or not.
    pub fn is_present(&self) -> bool {
        !matches!(self, ParseOutcome::Absent)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ParseOutcome::Malformed(_))
    }

    /// True if a selector was supplied and parsed.
    pub fn is_valid(&self) -> bool {
        matches!(self, ParseOutcome::Selected(_))
    }

    pub fn fields(&self) -> Option<&Fields> {
        match self {
            ParseOutcome::Selected(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FieldsError> {
        match self {
            ParseOutcome::Malformed(error) => Some(error),
            _ => None,
        }
    }
}

/// Parses an optional selector into a [`ParseOutcome`].
///
/// `None` is `Absent`; the empty string is a valid, empty selection.
/// Never panics.
///
/// # Example
///
/// ```
/// use fieldquill::fields::{parse_selector, ParseOutcome};
///
/// assert_eq!(parse_selector(None), ParseOutcome::Absent);
/// assert!(parse_selector(Some("a/b")).is_valid());
/// assert!(parse_selector(Some("a/")).is_error());
/// ```
pub fn parse_selector(text: Option<&str>) -> ParseOutcome {
    let Some(text) = text else {
        return ParseOutcome::Absent;
    };

    match Parser::parse(text) {
        Ok(fields) => {
            log::debug!("Parsed fields selector into {} selector(s)", fields.len());
            ParseOutcome::Selected(fields)
        }
        Err(error) => {
            log::warn!("Failed to parse fields for partial response: {}", error);
            ParseOutcome::Malformed(error)
        }
    }
}
