//! Fields selector parser.
//!
//! Grammar:
//!
//! ```text
//! selector-list := selector (',' selector)*
//! selector      := segment ('/' segment)* group?
//! group         := '(' selector-list ')'
//! segment       := one or more characters other than '/', ',', '(', ')'
//! ```
//!
//! Groups expand to the cross product of their prefix and contents, so
//! `a(b,c(d,e))` yields `a/b`, `a/c/d` and `a/c/e`. The parser is iterative:
//! open groups live on an explicit stack, so arbitrarily deep nesting cannot
//! exhaust the call stack.

use super::ast::{is_reserved, Fields, Selector};
use super::error::FieldsError;

/// Parser for fields selector strings.
pub struct Parser {
    input: Vec<char>,
    position: usize,
}

/// A group opened by `(` that has not been closed yet.
struct OpenGroup {
    /// Length of the shared prefix before this group extended it.
    restore_len: usize,
    opened_at: usize,
}

impl Parser {
    /// Creates a new parser for the given selector text.
    pub fn new(text: &str) -> Self {
        Self {
            input: text.chars().collect(),
            position: 0,
        }
    }

    /// Parses selector text into a set of selectors.
    ///
    /// The empty string parses to an empty set.
    ///
    /// # Example
    ///
    /// ```
    /// use fieldquill::fields::Parser;
    ///
    /// let fields = Parser::parse("a(b,c),d/e").unwrap();
    /// assert_eq!(fields.to_string(), "a/b,a/c,d/e");
    ///
    /// assert!(Parser::parse("a(b").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Fields, FieldsError> {
        let mut parser = Parser::new(text);
        parser.parse_fields()
    }

    fn parse_fields(&mut self) -> Result<Fields, FieldsError> {
        let mut fields = Fields::new();
        if self.is_eof() {
            return Ok(fields);
        }

        let mut groups: Vec<OpenGroup> = Vec::new();
        // Absolute segments contributed by the open groups.
        let mut prefix: Vec<String> = Vec::new();
        // Segments of the selector being read, relative to the innermost group.
        let mut current: Vec<String> = Vec::new();

        loop {
            current.push(self.parse_segment()?);

            match self.peek() {
                Some('/') => {
                    self.next();
                }
                Some('(') => {
                    let opened_at = self.position;
                    self.next();
                    groups.push(OpenGroup {
                        restore_len: prefix.len(),
                        opened_at,
                    });
                    prefix.append(&mut current);
                }
                Some(',') => {
                    self.next();
                    fields.insert(Self::complete(&prefix, &mut current));
                }
                _ => {
                    fields.insert(Self::complete(&prefix, &mut current));
                    if !self.close_groups(&mut groups, &mut prefix)? {
                        return Ok(fields);
                    }
                }
            }
        }
    }

    /// Consumes `)` characters after a completed selector.
    ///
    /// Returns `Ok(true)` when a `,` follows and another selector must be
    /// read, `Ok(false)` at a well-formed end of input.
    fn close_groups(
        &mut self,
        groups: &mut Vec<OpenGroup>,
        prefix: &mut Vec<String>,
    ) -> Result<bool, FieldsError> {
        loop {
            match self.peek() {
                None => {
                    return match groups.last() {
                        Some(group) => Err(FieldsError::UnclosedGroup {
                            position: group.opened_at,
                        }),
                        None => Ok(false),
                    };
                }
                Some(')') => {
                    let group = groups.pop().ok_or(FieldsError::UnmatchedClose {
                        position: self.position,
                    })?;
                    prefix.truncate(group.restore_len);
                    self.next();
                }
                Some(',') => {
                    self.next();
                    return Ok(true);
                }
                Some(found) => {
                    return Err(FieldsError::UnexpectedCharacter {
                        position: self.position,
                        found,
                        expected: "',' or ')'",
                    });
                }
            }
        }
    }

    /// Parses one segment: a maximal run of non-reserved characters.
    fn parse_segment(&mut self) -> Result<String, FieldsError> {
        let start = self.position;
        let mut segment = String::new();
        while let Some(ch) = self.peek() {
            if is_reserved(ch) {
                break;
            }
            segment.push(ch);
            self.next();
        }
        if segment.is_empty() {
            Err(FieldsError::EmptySegment { position: start })
        } else {
            Ok(segment)
        }
    }

    /// Builds the absolute selector for `current` and resets it.
    fn complete(prefix: &[String], current: &mut Vec<String>) -> Selector {
        let mut segments = Vec::with_capacity(prefix.len() + current.len());
        segments.extend_from_slice(prefix);
        segments.append(current);
        Selector::from_parsed(segments)
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Returns the current character and advances past it.
    fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }

    fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }
}
