//! In-memory tabular dataset loaded from a delimited file.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::error::MergeError;

/// A fully-loaded table: header row plus data rows. Both inputs are read
/// once at startup and held in memory for the duration of the merge.
#[derive(Debug)]
pub struct Table {
    pub path: PathBuf,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Read an entire delimited file. The first row supplies column names.
    /// Ragged rows surface as errors from the reader.
    pub fn from_path(path: &Path, delimiter: u8) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .from_path(path)
            .with_context(|| format!("failed opening {}", path.display()))?;

        let headers = reader
            .headers()
            .with_context(|| format!("failed reading header from {}", path.display()))?
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record =
                record.with_context(|| format!("failed reading from {}", path.display()))?;
            rows.push(record.iter().map(|s| s.to_string()).collect::<Vec<_>>());
        }

        tracing::debug!(
            path = %path.display(),
            columns = headers.len(),
            rows = rows.len(),
            "loaded table"
        );

        Ok(Table {
            path: path.to_path_buf(),
            headers,
            rows,
        })
    }

    /// Position of the join key in the header. Fails when the column is
    /// absent or appears more than once.
    pub fn key_index(&self, column: &str) -> Result<usize, MergeError> {
        let matches: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .filter(|(_, name)| name.as_str() == column)
            .map(|(idx, _)| idx)
            .collect();

        match matches.len() {
            1 => Ok(matches[0]),
            0 => Err(MergeError::MissingColumn {
                column: column.to_string(),
                path: self.path.clone(),
                available: self.headers.join(", "),
            }),
            count => Err(MergeError::AmbiguousColumn {
                column: column.to_string(),
                path: self.path.clone(),
                count,
            }),
        }
    }
}
