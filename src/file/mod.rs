//! File I/O operations for documents.
//!
//! This module provides functionality to load JSON, JSON Lines and YAML
//! documents from disk or stdin, and to save pruned documents back to files
//! with atomic write operations and optional gzip compression.

pub mod loader;
pub mod saver;
