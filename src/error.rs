//! Domain error taxonomy.
//!
//! Precondition failures get their own variants so the CLI can fail with a
//! descriptive message before any output is written.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("missing required column '{column}' in {path} (found: {available})")]
    MissingColumn {
        column: String,
        path: PathBuf,
        available: String,
    },

    #[error("column '{column}' appears {count} times in {path}; join key must be unique")]
    AmbiguousColumn {
        column: String,
        path: PathBuf,
        count: usize,
    },

    #[error("delimiter must be a single character (got '{0}')")]
    InvalidDelimiter(String),

    #[error("suffixes must be two distinct non-empty values (got '{0}')")]
    InvalidSuffixes(String),

    #[error("join mode must be specified explicitly (--mode or config 'mode': inner, left, right, or full)")]
    MissingJoinMode,
}
