//! Text to `Document` parsing for JSON, JSON Lines and YAML.

use super::node::{Scalar, TreeValue};
use super::tree::{Document, DocumentFormat};
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;

/// Parses text in the given format.
pub fn parse_document(content: &str, format: DocumentFormat) -> Result<Document> {
    match format {
        DocumentFormat::Json => parse_json(content),
        DocumentFormat::JsonLines => parse_json_lines(content),
        DocumentFormat::Yaml => parse_yaml(content),
    }
}

/// Parses a single JSON value.
///
/// ```
/// use fieldquill::document::parser::parse_json;
///
/// assert!(parse_json(r#"{"key": "value"}"#).is_ok());
/// assert!(parse_json(r#"{"unclosed": "#).is_err());
/// ```
pub fn parse_json(content: &str) -> Result<Document> {
    let value: TreeValue = serde_json::from_str(content).context("Failed to parse JSON")?;
    Ok(Document::Single(value))
}

/// Parses newline-delimited JSON. Blank lines are skipped.
pub fn parse_json_lines(content: &str) -> Result<Document> {
    let mut values = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let value: TreeValue = serde_json::from_str(line)
            .with_context(|| format!("Invalid JSON on line {}", line_num + 1))?;
        values.push(value);
    }

    if values.is_empty() {
        anyhow::bail!("No valid JSON found in JSONL content");
    }

    Ok(Document::Stream(values))
}

/// Parses YAML. A file with several `---` documents becomes a stream.
///
/// Merge keys (`<<: *anchor`) are resolved, and scalar mapping keys such as
/// `1` or `true` become their string form.
pub fn parse_yaml(content: &str) -> Result<Document> {
    let mut values = Vec::new();
    for (index, document) in serde_yaml::Deserializer::from_str(content).enumerate() {
        let mut yaml = serde_yaml::Value::deserialize(document)
            .with_context(|| format!("Failed to parse YAML document {}", index + 1))?;
        yaml.apply_merge().with_context(|| {
            format!("Failed to resolve merge keys in YAML document {}", index + 1)
        })?;
        values.push(yaml_to_tree(yaml)?);
    }

    match values.len() {
        0 => Ok(Document::Single(TreeValue::Null)),
        1 => Ok(Document::Single(values.remove(0))),
        _ => Ok(Document::Stream(values)),
    }
}

fn yaml_to_tree(value: serde_yaml::Value) -> Result<TreeValue> {
    use serde_yaml::Value;

    Ok(match value {
        Value::Null => TreeValue::Null,
        Value::Bool(b) => TreeValue::from(b),
        Value::Number(n) => TreeValue::Scalar(Scalar::Number(yaml_number(&n)?)),
        Value::String(s) => TreeValue::from(s),
        Value::Sequence(items) => TreeValue::Array(
            items
                .into_iter()
                .map(yaml_to_tree)
                .collect::<Result<Vec<_>>>()?,
        ),
        Value::Mapping(mapping) => {
            let mut map = IndexMap::with_capacity(mapping.len());
            for (key, value) in mapping {
                map.insert(yaml_key(key)?, yaml_to_tree(value)?);
            }
            TreeValue::Object(map)
        }
        Value::Tagged(tagged) => yaml_to_tree(tagged.value)?,
    })
}

fn yaml_number(n: &serde_yaml::Number) -> Result<serde_json::Number> {
    if let Some(i) = n.as_u64() {
        Ok(i.into())
    } else if let Some(i) = n.as_i64() {
        Ok(i.into())
    } else {
        n.as_f64()
            .and_then(serde_json::Number::from_f64)
            .ok_or_else(|| anyhow::anyhow!("Unsupported YAML number {}", n))
    }
}

fn yaml_key(key: serde_yaml::Value) -> Result<String> {
    use serde_yaml::Value;

    match key {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Tagged(tagged) => yaml_key(tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => {
            anyhow::bail!("Unsupported YAML mapping key: only scalar keys are allowed")
        }
    }
}
