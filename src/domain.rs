//! Core domain types shared across the CLI, config, and join engine.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::MergeError;

pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

pub const DEFAULT_KEY_COLUMN: &str = "SOURCE_ID";
pub const DEFAULT_OUTPUT_FILE: &str = "combined_file.csv";
pub const DEFAULT_SUFFIXES: (&str, &str) = ("_x", "_y");

/// Which rows survive the merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinMode {
    /// Keep only rows whose key appears in both inputs
    Inner,
    /// Keep every left row, filling right columns with empties when unmatched
    Left,
    /// Keep every right row, filling left columns with empties when unmatched
    Right,
    /// Keep every row from both inputs
    Full,
}

impl JoinMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinMode::Inner => "inner",
            JoinMode::Left => "left",
            JoinMode::Right => "right",
            JoinMode::Full => "full",
        }
    }

    pub fn keeps_unmatched_left(&self) -> bool {
        matches!(self, JoinMode::Left | JoinMode::Full)
    }

    pub fn keeps_unmatched_right(&self) -> bool {
        matches!(self, JoinMode::Right | JoinMode::Full)
    }
}

impl std::fmt::Display for JoinMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Merge settings after CLI arguments and any config file have been combined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Join key column name, present in both inputs
    #[serde(default = "default_key_column")]
    pub on: String,

    /// Join semantics; deliberately has no default and must be stated
    #[serde(default)]
    pub mode: Option<JoinMode>,

    /// Output file path
    #[serde(default = "default_output")]
    pub output: String,

    /// Field delimiter for inputs and output
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Suffix pair for overlapping non-key column names, left then right
    #[serde(default = "default_suffixes", deserialize_with = "de_suffixes")]
    pub suffixes: Vec<String>,
}

fn default_key_column() -> String {
    DEFAULT_KEY_COLUMN.to_string()
}

fn default_output() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

fn default_delimiter() -> String {
    ",".to_string()
}

fn default_suffixes() -> Vec<String> {
    vec![DEFAULT_SUFFIXES.0.to_string(), DEFAULT_SUFFIXES.1.to_string()]
}

/// Accept either `["_l", "_r"]` or a `"_l,_r"` string in config files.
fn de_suffixes<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<String>),
        Joined(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::List(items) => Ok(items),
        Raw::Joined(s) => Ok(s.split(',').map(|part| part.trim().to_string()).collect()),
    }
}

impl Config {
    /// The join mode is deliberately never defaulted; absence is an error.
    pub fn require_mode(&self) -> Result<JoinMode, MergeError> {
        self.mode.ok_or(MergeError::MissingJoinMode)
    }

    /// Single-byte delimiter for the CSV reader/writer. `\t` is accepted
    /// spelled out so shells need no literal tab.
    pub fn delimiter_byte(&self) -> Result<u8, MergeError> {
        match self.delimiter.as_str() {
            "\\t" | "\t" => Ok(b'\t'),
            s if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
            s => Err(MergeError::InvalidDelimiter(s.to_string())),
        }
    }

    /// The left/right suffix pair, validated: exactly two distinct
    /// non-empty values.
    pub fn suffix_pair(&self) -> Result<(&str, &str), MergeError> {
        match self.suffixes.as_slice() {
            [l, r] if !l.is_empty() && !r.is_empty() && l != r => Ok((l, r)),
            _ => Err(MergeError::InvalidSuffixes(self.suffixes.join(","))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            on: default_key_column(),
            mode: None,
            output: default_output(),
            delimiter: default_delimiter(),
            suffixes: default_suffixes(),
        }
    }
}

/// Row accounting for one merge, reported to the user so dropped rows are
/// never silent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MergeStats {
    pub rows_left: usize,
    pub rows_right: usize,
    pub rows_out: usize,
    pub columns_out: usize,
    /// Left rows with no key match (dropped unless mode keeps them)
    pub unmatched_left: usize,
    /// Right rows with no key match (dropped unless mode keeps them)
    pub unmatched_right: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_mode_errors_when_absent() {
        let cfg = Config::default();
        assert!(cfg.require_mode().is_err());

        let cfg = Config {
            mode: Some(JoinMode::Inner),
            ..Config::default()
        };
        assert_eq!(cfg.require_mode().expect("mode"), JoinMode::Inner);
    }

    #[test]
    fn test_delimiter_byte_accepts_escaped_tab() {
        let cfg = Config {
            delimiter: "\\t".to_string(),
            ..Config::default()
        };
        assert_eq!(cfg.delimiter_byte().expect("tab"), b'\t');
    }

    #[test]
    fn test_delimiter_byte_rejects_multichar() {
        let cfg = Config {
            delimiter: ",,".to_string(),
            ..Config::default()
        };
        assert!(cfg.delimiter_byte().is_err());
    }

    #[test]
    fn test_suffix_pair_rejects_identical_or_empty() {
        let cfg = Config {
            suffixes: vec!["_a".to_string(), "_a".to_string()],
            ..Config::default()
        };
        assert!(cfg.suffix_pair().is_err());

        let cfg = Config {
            suffixes: vec!["".to_string(), "_b".to_string()],
            ..Config::default()
        };
        assert!(cfg.suffix_pair().is_err());

        let cfg = Config::default();
        assert_eq!(cfg.suffix_pair().expect("pair"), ("_x", "_y"));
    }
}
