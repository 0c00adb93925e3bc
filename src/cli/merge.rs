//! Merge command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use super::utils::parse_csv;
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::JoinMode;
use crate::join::join;
use crate::render::{write_output, write_report};
use crate::table::Table;

#[derive(Args)]
pub struct MergeArgs {
    /// Left input file
    #[arg(value_name = "LEFT")]
    pub left: PathBuf,

    /// Right input file
    #[arg(value_name = "RIGHT")]
    pub right: PathBuf,

    /// Join key column name, present in both inputs
    #[arg(long, value_name = "COLUMN")]
    pub on: Option<String>,

    /// Join semantics (required here or in the config file)
    #[arg(short, long, value_name = "MODE", value_enum)]
    pub mode: Option<JoinMode>,

    /// Output file path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Field delimiter for inputs and output (use '\t' for TSV)
    #[arg(short, long, value_name = "CHAR")]
    pub delimiter: Option<String>,

    /// Suffix pair for overlapping non-key column names (comma-separated)
    #[arg(long, value_name = "L,R")]
    pub suffixes: Option<String>,

    /// Write a JSON report of the merge to this path
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Omit the timestamp from the JSON report
    #[arg(long)]
    pub no_timestamp: bool,

    /// Path to config file (csv-merge.toml or .csv-merge.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: MergeArgs) -> Result<()> {
    let search_dir = std::env::current_dir().context("failed resolving current directory")?;
    let file_config = load_config(&search_dir, args.config.as_deref())?;

    let overrides = CliOverrides {
        on: args.on,
        mode: args.mode,
        output: args.output,
        delimiter: args.delimiter,
        suffixes: parse_csv(&args.suffixes),
    };
    let config = merge_cli_with_config(file_config, overrides);

    // Validate everything up front; nothing is read or written until the
    // settings are known good.
    let mode = config.require_mode()?;
    let delimiter = config.delimiter_byte()?;
    let suffixes = config.suffix_pair()?;

    tracing::debug!(
        left = %args.left.display(),
        right = %args.right.display(),
        mode = %mode,
        on = %config.on,
        "starting merge"
    );

    let left = Table::from_path(&args.left, delimiter)?;
    let right = Table::from_path(&args.right, delimiter)?;

    // Key column existence is checked before the join builds anything.
    left.key_index(&config.on)?;
    right.key_index(&config.on)?;

    let joined = join(&left, &right, &config.on, mode, suffixes)?;
    let stats = &joined.stats;

    write_output(Path::new(&config.output), &joined, delimiter)?;

    if let Some(report_path) = &args.report {
        write_report(report_path, &config, stats, &config.output, !args.no_timestamp)?;
    }

    println!(
        "Merged {} rows into {} ({} join on '{}')",
        stats.rows_out, config.output, mode, config.on
    );
    println!(
        "  unmatched left rows: {} ({})",
        stats.unmatched_left,
        if mode.keeps_unmatched_left() { "kept" } else { "dropped" }
    );
    println!(
        "  unmatched right rows: {} ({})",
        stats.unmatched_right,
        if mode.keeps_unmatched_right() { "kept" } else { "dropped" }
    );

    Ok(())
}
