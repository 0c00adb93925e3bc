//! csv-merge: Join two delimited files on a shared key column
//!
//! Reads both inputs fully into memory, joins them with explicit
//! inner/left/right/full semantics, and writes the combined file along
//! with an accounting of unmatched rows.

use anyhow::Result;

mod cli;
mod config;
mod domain;
mod error;
mod join;
mod render;
mod table;

fn main() -> Result<()> {
    cli::run()
}
