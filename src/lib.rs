//! FieldQuill - partial responses for JSON and YAML documents.
//!
//! A caller names the properties it wants with a compact selector such as
//! `items(id,author/name),totalCount`, and the document is pruned to just
//! those properties and the containers that lead to them.
//!
//! # Example
//!
//! ```
//! use fieldquill::document::TreeValue;
//! use fieldquill::fields::{parse_selector, CaseSensitivity};
//! use fieldquill::prune::apply_outcome;
//! use serde_json::json;
//!
//! let outcome = parse_selector(Some("items(id)"));
//! let value = TreeValue::from(json!({
//!     "items": [{"id": 1, "name": "x"}, {"id": 2, "name": "y"}],
//!     "next": "abc"
//! }));
//!
//! let pruned = apply_outcome(value, &outcome, CaseSensitivity::Sensitive, None);
//! assert_eq!(
//!     serde_json::Value::from(pruned),
//!     json!({"items": [{"id": 1}, {"id": 2}]})
//! );
//! ```

pub mod config;
pub mod document;
pub mod fields;
pub mod file;
pub mod prune;
pub mod response;

pub use fields::{parse_selector, AlwaysIncluded, CaseSensitivity, Fields, FieldsError, ParseOutcome};
pub use prune::{apply_outcome, prune};
