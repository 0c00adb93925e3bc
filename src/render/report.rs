//! Merge report JSON generation.

use anyhow::Result;
use chrono::Utc;
use serde_json::{Map, Value};
use std::path::Path;

use crate::domain::{Config, MergeStats, REPORT_SCHEMA_VERSION};

/// Write a machine-readable report of one merge: the effective config, the
/// row accounting, and the output location. `include_timestamp = false`
/// keeps the file reproducible across reruns.
pub fn write_report(
    report_path: &Path,
    config: &Config,
    stats: &MergeStats,
    output_file: &str,
    include_timestamp: bool,
) -> Result<()> {
    let mut report = Map::new();
    report.insert("schema_version".to_string(), Value::String(REPORT_SCHEMA_VERSION.to_string()));
    if include_timestamp {
        report.insert(
            "generated_at".to_string(),
            Value::String(Utc::now().format("%Y-%m-%dT%H:%M:%S+00:00").to_string()),
        );
    }
    report.insert("config".to_string(), serde_json::to_value(config)?);
    report.insert("stats".to_string(), serde_json::to_value(stats)?);
    report.insert("output_file".to_string(), Value::String(output_file.to_string()));

    if let Some(parent) = report_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(report_path, serde_json::to_string_pretty(&Value::Object(report))?)?;
    Ok(())
}
