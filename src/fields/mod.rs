//! Fields selector language.
//!
//! A fields expression names the properties a caller wants to see in a
//! response, in the style of REST sparse fieldsets.
//!
//! # Supported Syntax
//!
//! - `a` - Property `a` and everything below it
//! - `a/b` - Property `b` of `a` (and `a` itself, so `b` stays reachable)
//! - `a,b` - Several selectors
//! - `a(b,c)` - Grouping, equivalent to `a/b,a/c`; groups nest
//!
//! # Examples
//!
//! ```
//! use fieldquill::fields::{parse_selector, CaseSensitivity};
//!
//! let outcome = parse_selector(Some("items(id,name),total"));
//! let fields = outcome.fields().unwrap();
//! assert!(fields.matches(&["items", "id"], CaseSensitivity::Sensitive));
//! assert!(!fields.matches(&["items", "price"], CaseSensitivity::Sensitive));
//! ```

pub mod ast;
pub mod error;
pub mod matcher;
pub mod outcome;
pub mod parser;

pub use ast::{Fields, Selector};
pub use error::FieldsError;
pub use matcher::{matches, AlwaysIncluded, CaseSensitivity};
pub use outcome::{parse_selector, ParseOutcome};
pub use parser::Parser;
