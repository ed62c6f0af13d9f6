//! Document loading functionality.
//!
//! This module provides functions to load documents from files or stdin,
//! parsing them into `Document` values ready to be pruned.

use crate::document::parser::{parse_document, parse_json, parse_json_lines, parse_yaml};
use crate::document::tree::{Document, DocumentFormat};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Loads and parses a document from the filesystem.
///
/// The format is chosen from the file name (`.json`, `.jsonl`/`.ndjson`,
/// `.yaml`/`.yml`); a trailing `.gz` means the file is gzip-compressed.
///
/// # Examples
///
/// ```no_run
/// use fieldquill::file::loader::load_document_file;
///
/// let document = load_document_file("response.json.gz").unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist or cannot be read
/// - The file is named `.gz` but is not valid gzip
/// - The contents are not valid in the detected format
pub fn load_document_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    parse_document(&content, DocumentFormat::from_path(path_ref))
}

/// Loads and parses a document from standard input.
///
/// Gzip input is detected by its magic bytes. The content is tried as a
/// single JSON value, then as JSON Lines, then as YAML.
pub fn load_document_from_stdin() -> Result<Document> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    parse_bytes(buffer)
}

/// Detects compression and format of raw input bytes.
pub fn parse_bytes(buffer: Vec<u8>) -> Result<Document> {
    // Check for gzip magic bytes (0x1f 0x8b)
    let content = if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer)?
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in input")?
    };

    if let Ok(document) = parse_json(&content) {
        return Ok(document);
    }
    if let Ok(document) = parse_json_lines(&content) {
        return Ok(document);
    }
    parse_yaml(&content).context("Failed to parse input: it is not valid JSON, JSON Lines or YAML")
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped input")?;
    Ok(content)
}
