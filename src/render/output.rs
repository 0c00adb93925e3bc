//! Joined-table CSV serialization.

use anyhow::{Context, Result};
use std::path::Path;

use crate::join::JoinOutput;

/// Write the joined table, overwriting any existing file. The header row is
/// always written, even when no data rows survived the join.
pub fn write_output(output_path: &Path, joined: &JoinOutput, delimiter: u8) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed creating {}", parent.display()))?;
        }
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(output_path)
        .with_context(|| format!("failed opening {} for writing", output_path.display()))?;

    writer
        .write_record(&joined.headers)
        .with_context(|| format!("failed writing header to {}", output_path.display()))?;
    for row in &joined.rows {
        writer
            .write_record(row)
            .with_context(|| format!("failed writing to {}", output_path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("failed flushing {}", output_path.display()))?;

    tracing::debug!(path = %output_path.display(), rows = joined.rows.len(), "output written");
    Ok(())
}
