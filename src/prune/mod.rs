//! Pruning of tree values down to a fields selection.
//!
//! # Example
//!
//! ```
//! use fieldquill::document::TreeValue;
//! use fieldquill::fields::{CaseSensitivity, Fields};
//! use fieldquill::prune::prune;
//! use serde_json::json;
//!
//! let value = TreeValue::from(json!({"a": {"b": 1, "c": 2}, "d": 3}));
//! let fields = Fields::parse("a/b").unwrap();
//! let pruned = prune(value, &fields, CaseSensitivity::Sensitive, None);
//! assert_eq!(serde_json::Value::from(pruned), json!({"a": {"b": 1}}));
//! ```

pub mod cache;
pub mod pruner;

pub use cache::MatchCache;
pub use pruner::Pruner;

use crate::document::node::TreeValue;
use crate::document::tree::Document;
use crate::fields::{AlwaysIncluded, CaseSensitivity, Fields, ParseOutcome};

/// Prunes `value` to the properties selected by `fields` or `always_included`.
///
/// Each call uses its own match cache.
pub fn prune(
    value: TreeValue,
    fields: &Fields,
    case_sensitivity: CaseSensitivity,
    always_included: Option<&AlwaysIncluded>,
) -> TreeValue {
    Pruner::new(fields, case_sensitivity, always_included).prune(value)
}

/// Applies a parse outcome to `value`.
///
/// Only `Selected` prunes. `Absent` returns the value untouched, and so does
/// `Malformed`: deciding whether a malformed selector is an error is the
/// caller's policy and must happen before this point.
pub fn apply_outcome(
    value: TreeValue,
    outcome: &ParseOutcome,
    case_sensitivity: CaseSensitivity,
    always_included: Option<&AlwaysIncluded>,
) -> TreeValue {
    match outcome {
        ParseOutcome::Selected(fields) => prune(value, fields, case_sensitivity, always_included),
        ParseOutcome::Absent | ParseOutcome::Malformed(_) => value,
    }
}

/// Prunes every root value of a document independently.
pub fn prune_document(
    document: Document,
    fields: &Fields,
    case_sensitivity: CaseSensitivity,
    always_included: Option<&AlwaysIncluded>,
) -> Document {
    document.map(|value| prune(value, fields, case_sensitivity, always_included))
}
