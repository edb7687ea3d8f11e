//! Failure modes of a comparison run.
//!
//! This module defines the error surface shared by the loaders and the
//! reporter. It provides:
//! 1. **I/O Failures:** Unreadable source documents or an unwritable report
//!    destination, always carrying the offending path.
//! 2. **Parse Failures:** Structurally invalid YAML or JSON documents.
//! 3. **Validation Failures:** Entries missing required keys, reported with
//!    their position in the document.
//!
//! Every variant is fatal. The tool runs a single pass with no retry or
//! partial-output path, so callers propagate these unchanged and the binary
//! maps any of them to a non-zero exit.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading documents or writing the report.
#[derive(Debug, Error)]
pub enum Error {
    /// A source document could not be read, or the report destination
    /// could not be created or written.
    #[error("cannot access '{}': {source}", path.display())]
    Io {
        /// Path of the file or directory that failed.
        path: PathBuf,
        /// Underlying operating-system failure.
        #[source]
        source: io::Error,
    },

    /// The ground-truth document is not structurally valid YAML.
    #[error("malformed UDB document '{}': {source}", path.display())]
    Yaml {
        /// Path of the offending document.
        path: PathBuf,
        /// Parser diagnostic, including the document position.
        #[source]
        source: serde_yaml::Error,
    },

    /// The model-output document is not structurally valid JSON.
    #[error("malformed LLM output '{}': {source}", path.display())]
    Json {
        /// Path of the offending document.
        path: PathBuf,
        /// Parser diagnostic, including the document position.
        #[source]
        source: serde_json::Error,
    },

    /// A model-output entry lacks one of its required keys.
    #[error("parameter entry {index} is missing required field '{field}'")]
    MissingField {
        /// Name of the absent key, `name` or `type`.
        field: &'static str,
        /// Zero-based position of the entry in the `parameters` sequence.
        index: usize,
    },
}

impl Error {
    /// Wraps an I/O failure with the path it occurred on.
    ///
    /// # Arguments
    ///
    /// * `path` - The file or directory the operation targeted.
    /// * `source` - The failure reported by the operating system.
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
