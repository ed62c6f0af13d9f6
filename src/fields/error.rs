//! Error types for fields selector parsing.

use thiserror::Error;

/// Syntax errors reported by the fields parser.
///
/// Positions are character offsets into the selector text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldsError {
    /// A segment was expected but none was found (`a//b`, `a,`, `,a`, `a()`).
    #[error("Empty segment at position {position}")]
    EmptySegment { position: usize },

    /// A character that cannot follow the preceding token, e.g. `a(b)c`.
    #[error("Unexpected '{found}' at position {position}, expected {expected}")]
    UnexpectedCharacter {
        position: usize,
        found: char,
        expected: &'static str,
    },

    /// Input ended inside a group opened at `position`.
    #[error("Unclosed '(' opened at position {position}")]
    UnclosedGroup { position: usize },

    /// A `)` with no matching `(`.
    #[error("Unmatched ')' at position {position}")]
    UnmatchedClose { position: usize },
}

impl FieldsError {
    /// Returns the character offset the error was reported at.
    pub fn position(&self) -> usize {
        match self {
            FieldsError::EmptySegment { position }
            | FieldsError::UnexpectedCharacter { position, .. }
            | FieldsError::UnclosedGroup { position }
            | FieldsError::UnmatchedClose { position } => *position,
        }
    }
}
