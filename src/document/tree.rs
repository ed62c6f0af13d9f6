//! Documents: one tree value, or a stream of them.
//!
//! A JSON file holds a single value. JSON Lines files and multi-document
//! YAML files hold a stream of values, each of which is pruned on its own.

use super::node::TreeValue;
use std::path::Path;

/// On-disk representation of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    JsonLines,
    Yaml,
}

impl DocumentFormat {
    /// Determines the format from a file name, ignoring a trailing `.gz`.
    ///
    /// Examples:
    /// - `data.json` → Json
    /// - `data.jsonl.gz` → JsonLines
    /// - `config.yml` → Yaml
    /// - anything else → Json
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let base = path_str.strip_suffix(".gz").unwrap_or(&path_str);

        if base.ends_with(".jsonl") || base.ends_with(".ndjson") {
            DocumentFormat::JsonLines
        } else if base.ends_with(".yaml") || base.ends_with(".yml") {
            DocumentFormat::Yaml
        } else {
            DocumentFormat::Json
        }
    }
}

/// A parsed document.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// A single root value.
    Single(TreeValue),
    /// Independent root values (JSON Lines, multi-document YAML).
    Stream(Vec<TreeValue>),
}

impl Document {
    /// Returns the root values of the document.
    pub fn values(&self) -> &[TreeValue] {
        match self {
            Document::Single(value) => std::slice::from_ref(value),
            Document::Stream(values) => values,
        }
    }

    /// Applies `f` to every root value.
    pub fn map<F>(self, mut f: F) -> Document
    where
        F: FnMut(TreeValue) -> TreeValue,
    {
        match self {
            Document::Single(value) => Document::Single(f(value)),
            Document::Stream(values) => Document::Stream(values.into_iter().map(f).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(DocumentFormat::from_path("data.json"), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path("data.jsonl"), DocumentFormat::JsonLines);
        assert_eq!(DocumentFormat::from_path("data.ndjson"), DocumentFormat::JsonLines);
        assert_eq!(
            DocumentFormat::from_path("path/to/data.jsonl.gz"),
            DocumentFormat::JsonLines
        );
        assert_eq!(DocumentFormat::from_path("data.json.gz"), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path("a.yml"), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path("a.yaml.gz"), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path("noext"), DocumentFormat::Json);
    }

    #[test]
    fn test_map_applies_to_each_value() {
        let doc = Document::Stream(vec![TreeValue::from(1i64), TreeValue::from(2i64)]);
        let mapped = doc.map(|_| TreeValue::Null);
        assert_eq!(mapped.values(), &[TreeValue::Null, TreeValue::Null]);
    }
}
