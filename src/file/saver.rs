//! Document serialization and saving.
//!
//! This module turns pruned documents back into text and writes them to
//! files with atomic write operations and optional gzip compression.

use crate::config::Config;
use crate::document::node::TreeValue;
use crate::document::tree::{Document, DocumentFormat};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Serializes one value as JSON, compact or pretty per `config`.
///
/// # Example
///
/// ```
/// use fieldquill::config::Config;
/// use fieldquill::document::TreeValue;
/// use fieldquill::file::saver::serialize_json;
/// use serde_json::json;
///
/// let value = TreeValue::from(json!({"a": [1, 2]}));
/// let config = Config { compact: true, ..Config::default() };
/// assert_eq!(serialize_json(&value, &config).unwrap(), r#"{"a":[1,2]}"#);
/// ```
pub fn serialize_json(value: &TreeValue, config: &Config) -> Result<String> {
    if config.compact {
        return serde_json::to_string(value).context("Failed to serialize JSON");
    }

    let indent = " ".repeat(config.indent_size);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value
        .serialize(&mut serializer)
        .context("Failed to serialize JSON")?;
    String::from_utf8(buffer).context("Serialized JSON is not valid UTF-8")
}

/// Serializes a document in the given format. The output ends with a newline.
///
/// Streams are always written one value per line for JSON formats, and as
/// `---`-separated documents for YAML.
pub fn serialize_document(
    document: &Document,
    format: DocumentFormat,
    config: &Config,
) -> Result<String> {
    let mut output = String::new();

    match (document, format) {
        (_, DocumentFormat::Yaml) => {
            for (i, value) in document.values().iter().enumerate() {
                if i > 0 {
                    output.push_str("---\n");
                }
                output.push_str(&serde_yaml::to_string(value).context("Failed to serialize YAML")?);
            }
        }
        (Document::Single(value), DocumentFormat::Json) => {
            output.push_str(&serialize_json(value, config)?);
            output.push('\n');
        }
        (Document::Single(_), DocumentFormat::JsonLines) | (Document::Stream(_), _) => {
            for (i, value) in document.values().iter().enumerate() {
                // JSON Lines requires compact single-line JSON
                let line = serde_json::to_string(value)
                    .with_context(|| format!("Failed to serialize line {}", i + 1))?;
                output.push_str(&line);
                output.push('\n');
            }
        }
    }

    Ok(output)
}

/// Writes a serialized document to `writer`.
pub fn write_document<W: Write>(
    mut writer: W,
    document: &Document,
    format: DocumentFormat,
    config: &Config,
) -> Result<()> {
    let text = serialize_document(document, format, config)?;
    writer
        .write_all(text.as_bytes())
        .context("Failed to write output")?;
    writer.flush().context("Failed to flush output")?;
    Ok(())
}

/// Saves a document to a file.
///
/// The format comes from the target file name, and a `.gz` suffix
/// compresses the output. The file is written to a temporary file in the
/// same directory and then renamed over the target, so the target is never
/// left partially written. The temporary file is removed if any step fails.
///
/// # Examples
///
/// ```no_run
/// use fieldquill::config::Config;
/// use fieldquill::document::{Document, TreeValue};
/// use fieldquill::file::saver::save_document_file;
///
/// let document = Document::Single(TreeValue::Null);
/// save_document_file("output.json", &document, &Config::default()).unwrap();
/// ```
pub fn save_document_file<P: AsRef<Path>>(
    path: P,
    document: &Document,
    config: &Config,
) -> Result<()> {
    let path = path.as_ref();
    let should_compress = path.to_string_lossy().ends_with(".gz");
    let text = serialize_document(document, DocumentFormat::from_path(path), config)?;
    write_file_atomic(path, text.as_bytes(), should_compress)
}

/// Writes data to a file atomically, optionally compressing with gzip.
fn write_file_atomic<P: AsRef<Path>>(path: P, data: &[u8], compress: bool) -> Result<()> {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Removed on drop unless persisted
    let mut temp = NamedTempFile::new_in(dir).context("Failed to create temp file")?;
    if compress {
        let mut encoder = GzEncoder::new(temp.as_file_mut(), Compression::default());
        encoder.write_all(data).context("Failed to write compressed data")?;
        encoder.finish().context("Failed to finish compression")?;
    } else {
        temp.write_all(data).context("Failed to write temp file")?;
    }

    temp
        .persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_json_pretty_indent() {
        let value = TreeValue::from(json!({"a": {"b": 1}}));
        let config = Config {
            indent_size: 4,
            ..Config::default()
        };
        assert_eq!(
            serialize_json(&value, &config).unwrap(),
            "{\n    \"a\": {\n        \"b\": 1\n    }\n}"
        );
    }

    #[test]
    fn test_serialize_stream_as_lines() {
        let doc = Document::Stream(vec![
            TreeValue::from(json!({"id": 1})),
            TreeValue::from(json!({"id": 2})),
        ]);
        let text = serialize_document(&doc, DocumentFormat::Json, &Config::default()).unwrap();
        assert_eq!(text, "{\"id\":1}\n{\"id\":2}\n");
    }

    #[test]
    fn test_serialize_yaml_stream() {
        let doc = Document::Stream(vec![
            TreeValue::from(json!({"a": 1})),
            TreeValue::from(json!({"b": 2})),
        ]);
        let text = serialize_document(&doc, DocumentFormat::Yaml, &Config::default()).unwrap();
        assert_eq!(text, "a: 1\n---\nb: 2\n");
    }

    #[test]
    fn test_write_document() {
        let doc = Document::Single(TreeValue::from(json!({"a": 1})));
        let config = Config {
            compact: true,
            ..Config::default()
        };
        let mut out = Vec::new();
        write_document(&mut out, &doc, DocumentFormat::Json, &config).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\"a\":1}\n");
    }
}
