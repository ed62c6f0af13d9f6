//! Tree value representation.
//!
//! `TreeValue` is the closed set of node kinds the pruner understands: null,
//! scalars, arrays and objects. Objects keep their properties in insertion
//! order so pruned output lists properties in the order they were written.
//!
//! # Example
//!
//! ```
//! use fieldquill::document::node::{Scalar, TreeValue};
//! use indexmap::IndexMap;
//!
//! let mut map = IndexMap::new();
//! map.insert("name".to_string(), TreeValue::from("fieldquill"));
//! map.insert("version".to_string(), TreeValue::from(1i64));
//! let object = TreeValue::Object(map);
//!
//! assert!(object.is_object());
//! assert_eq!(object.get("name"), Some(&TreeValue::Scalar(Scalar::String("fieldquill".to_string()))));
//! ```

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// A leaf value that is not null.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::String(s) => f.write_str(s),
        }
    }
}

/// A JSON-like tree value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TreeValue {
    #[default]
    Null,
    Scalar(Scalar),
    Array(Vec<TreeValue>),
    Object(IndexMap<String, TreeValue>),
}

impl TreeValue {
    pub fn is_null(&self) -> bool {
        matches!(self, TreeValue::Null)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, TreeValue::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, TreeValue::Array(_))
    }

    /// Returns true if this value is an object or an array.
    pub fn is_container(&self) -> bool {
        matches!(self, TreeValue::Object(_) | TreeValue::Array(_))
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, TreeValue>> {
        match self {
            TreeValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[TreeValue]> {
        match self {
            TreeValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Looks up a property of an object. Returns `None` for other kinds.
    pub fn get(&self, name: &str) -> Option<&TreeValue> {
        self.as_object().and_then(|map| map.get(name))
    }

    /// Number of properties or elements; zero for scalars and null.
    pub fn len(&self) -> usize {
        match self {
            TreeValue::Object(map) => map.len(),
            TreeValue::Array(items) => items.len(),
            _ => 0,
        }
    }

    /// True for empty containers, scalars and null.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<bool> for TreeValue {
    fn from(value: bool) -> Self {
        TreeValue::Scalar(Scalar::Bool(value))
    }
}

impl From<i64> for TreeValue {
    fn from(value: i64) -> Self {
        TreeValue::Scalar(Scalar::Number(value.into()))
    }
}

impl From<&str> for TreeValue {
    fn from(value: &str) -> Self {
        TreeValue::Scalar(Scalar::String(value.to_string()))
    }
}

impl From<String> for TreeValue {
    fn from(value: String) -> Self {
        TreeValue::Scalar(Scalar::String(value))
    }
}

impl From<serde_json::Value> for TreeValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => TreeValue::Null,
            Value::Bool(b) => TreeValue::Scalar(Scalar::Bool(b)),
            Value::Number(n) => TreeValue::Scalar(Scalar::Number(n)),
            Value::String(s) => TreeValue::Scalar(Scalar::String(s)),
            Value::Array(items) => TreeValue::Array(items.into_iter().map(TreeValue::from).collect()),
            Value::Object(map) => TreeValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, TreeValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<TreeValue> for serde_json::Value {
    fn from(value: TreeValue) -> Self {
        use serde_json::Value;

        match value {
            TreeValue::Null => Value::Null,
            TreeValue::Scalar(Scalar::Bool(b)) => Value::Bool(b),
            TreeValue::Scalar(Scalar::Number(n)) => Value::Number(n),
            TreeValue::Scalar(Scalar::String(s)) => Value::String(s),
            TreeValue::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            TreeValue::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl Serialize for TreeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TreeValue::Null => serializer.serialize_unit(),
            TreeValue::Scalar(Scalar::Bool(b)) => serializer.serialize_bool(*b),
            TreeValue::Scalar(Scalar::Number(n)) => n.serialize(serializer),
            TreeValue::Scalar(Scalar::String(s)) => serializer.serialize_str(s),
            TreeValue::Array(items) => serializer.collect_seq(items),
            TreeValue::Object(map) => serializer.collect_map(map),
        }
    }
}

impl<'de> Deserialize<'de> for TreeValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TreeValueVisitor)
    }
}

struct TreeValueVisitor;

impl<'de> Visitor<'de> for TreeValueVisitor {
    type Value = TreeValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON-compatible value")
    }

    fn visit_bool<E>(self, value: bool) -> Result<TreeValue, E> {
        Ok(TreeValue::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<TreeValue, E> {
        Ok(TreeValue::Scalar(Scalar::Number(value.into())))
    }

    fn visit_u64<E>(self, value: u64) -> Result<TreeValue, E> {
        Ok(TreeValue::Scalar(Scalar::Number(value.into())))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<TreeValue, E> {
        serde_json::Number::from_f64(value)
            .map(|n| TreeValue::Scalar(Scalar::Number(n)))
            .ok_or_else(|| E::custom(format!("non-finite number {} is not supported", value)))
    }

    fn visit_str<E>(self, value: &str) -> Result<TreeValue, E> {
        Ok(TreeValue::from(value))
    }

    fn visit_string<E>(self, value: String) -> Result<TreeValue, E> {
        Ok(TreeValue::from(value))
    }

    fn visit_none<E>(self) -> Result<TreeValue, E> {
        Ok(TreeValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<TreeValue, D::Error> {
        TreeValue::deserialize(deserializer)
    }

    fn visit_unit<E>(self) -> Result<TreeValue, E> {
        Ok(TreeValue::Null)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<TreeValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(TreeValue::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<TreeValue, A::Error> {
        let mut map = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, TreeValue>()? {
            map.insert(key, value);
        }
        Ok(TreeValue::Object(map))
    }
}
