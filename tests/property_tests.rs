//! Property-based tests for selector parsing and pruning.
//!
//! Tests invariants like:
//! - pruning is idempotent
//! - an absent selector leaves the value untouched
//! - a group is equivalent to its flattened selector list
//! - the parser classifies every input without panicking

use fieldquill::document::TreeValue;
use fieldquill::fields::{parse_selector, CaseSensitivity, Fields, ParseOutcome};
use fieldquill::prune::{apply_outcome, prune};
use proptest::prelude::*;
use serde_json::{Map, Value};

/// Property names drawn from a small alphabet so selectors and trees overlap.
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-d]{1,2}"
}

/// Strategy for JSON-like trees with nested objects and arrays.
fn tree_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::from),
        "[a-z]{0,4}".prop_map(Value::String),
    ];

    leaf.prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec((segment_strategy(), inner), 0..5).prop_map(|entries| {
                let mut map = Map::new();
                for (name, value) in entries {
                    map.insert(name, value);
                }
                Value::Object(map)
            }),
        ]
    })
}

/// Strategy for well-formed, flat selector text such as `a/b,c`.
fn selector_text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::collection::vec(segment_strategy(), 1..4), 0..4).prop_map(
        |paths| {
            paths
                .iter()
                .map(|segments| segments.join("/"))
                .collect::<Vec<_>>()
                .join(",")
        },
    )
}

proptest! {
    /// prune(prune(v, S), S) == prune(v, S)
    #[test]
    fn prune_is_idempotent(value in tree_strategy(), text in selector_text_strategy()) {
        let fields = Fields::parse(&text).unwrap();
        let once = prune(TreeValue::from(value), &fields, CaseSensitivity::Sensitive, None);
        let twice = prune(once.clone(), &fields, CaseSensitivity::Sensitive, None);
        prop_assert_eq!(once, twice);
    }

    /// An absent selector emits the input unchanged
    #[test]
    fn absent_is_identity(value in tree_strategy()) {
        let tree = TreeValue::from(value.clone());
        let result = apply_outcome(tree, &ParseOutcome::Absent, CaseSensitivity::Sensitive, None);
        prop_assert_eq!(Value::from(result), value);
    }

    /// Selecting every top-level property keeps the whole object
    #[test]
    fn selecting_all_keys_is_identity(value in tree_strategy()) {
        if let Value::Object(map) = &value {
            let text = map.keys().cloned().collect::<Vec<_>>().join(",");
            let fields = Fields::parse(&text).unwrap();
            let pruned = prune(TreeValue::from(value.clone()), &fields, CaseSensitivity::Sensitive, None);
            prop_assert_eq!(Value::from(pruned), value);
        }
    }

    /// `p(c1,c2,...)` parses to the same set as `p/c1,p/c2,...`
    #[test]
    fn group_equals_flattened_list(
        prefix in prop::collection::vec(segment_strategy(), 1..3),
        children in prop::collection::vec(prop::collection::vec(segment_strategy(), 1..3), 1..4),
    ) {
        let prefix = prefix.join("/");
        let inner: Vec<String> = children.iter().map(|c| c.join("/")).collect();

        let grouped = format!("{}({})", prefix, inner.join(","));
        let flattened = inner
            .iter()
            .map(|child| format!("{}/{}", prefix, child))
            .collect::<Vec<_>>()
            .join(",");

        prop_assert_eq!(Fields::parse(&grouped).unwrap(), Fields::parse(&flattened).unwrap());
    }

    /// Every input is classified; valid selections print back to an equal set
    #[test]
    fn parser_is_total(text in "[a-c/,()]{0,16}") {
        match parse_selector(Some(&text)) {
            ParseOutcome::Selected(fields) => {
                prop_assert_eq!(Fields::parse(&fields.to_string()).unwrap(), fields);
            }
            ParseOutcome::Malformed(error) => {
                prop_assert!(error.position() <= text.chars().count());
            }
            ParseOutcome::Absent => prop_assert!(false, "present input parsed as absent"),
        }
    }

    /// Case-insensitive matching never keeps less than case-sensitive matching
    #[test]
    fn insensitive_keeps_superset(value in tree_strategy(), text in "[a-dA-D]{1,2}") {
        let fields = Fields::parse(&text).unwrap();
        let tree = TreeValue::from(value);
        let sensitive = prune(tree.clone(), &fields, CaseSensitivity::Sensitive, None);
        let insensitive = prune(tree, &fields, CaseSensitivity::Insensitive, None);
        prop_assert!(insensitive.len() >= sensitive.len());
    }
}
