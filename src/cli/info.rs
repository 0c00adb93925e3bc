//! Info command implementation

use anyhow::Result;
use clap::Args;
use std::collections::HashMap;
use std::path::PathBuf;

use super::utils::format_with_commas;
use crate::domain::Config;
use crate::table::Table;

#[derive(Args)]
pub struct InfoArgs {
    /// Delimited file to inspect
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Report statistics for this key column
    #[arg(long, value_name = "COLUMN")]
    pub on: Option<String>,

    /// Field delimiter (use '\t' for TSV)
    #[arg(short, long, value_name = "CHAR")]
    pub delimiter: Option<String>,
}

pub fn run(args: InfoArgs) -> Result<()> {
    let delimiter = Config {
        delimiter: args.delimiter.unwrap_or_else(|| ",".to_string()),
        ..Config::default()
    }
    .delimiter_byte()?;

    let table = Table::from_path(&args.file, delimiter)?;

    println!("File: {}", args.file.display());
    println!("Columns: {}", table.headers.len());
    for name in &table.headers {
        println!("  {}", name);
    }
    println!("Rows: {}", format_with_commas(table.rows.len() as u64));

    if let Some(key) = &args.on {
        let key_idx = table.key_index(key)?;

        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut empty = 0usize;
        for row in &table.rows {
            let value = row[key_idx].as_str();
            if value.is_empty() {
                empty += 1;
            }
            *counts.entry(value).or_default() += 1;
        }
        let duplicates = counts.values().filter(|&&n| n > 1).count();

        println!("Key column '{}':", key);
        println!("  distinct values: {}", format_with_commas(counts.len() as u64));
        println!("  duplicated values: {}", format_with_commas(duplicates as u64));
        println!("  empty values: {}", format_with_commas(empty as u64));
    }

    Ok(())
}
