//! CLI-over-config precedence merge.

use crate::domain::{Config, JoinMode};

/// The subset of merge settings a user can set on the command line. `None`
/// means "not given, fall through to the config file or the default".
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub on: Option<String>,
    pub mode: Option<JoinMode>,
    pub output: Option<String>,
    pub delimiter: Option<String>,
    pub suffixes: Option<Vec<String>>,
}

/// Apply CLI values over the file-derived config. Precedence is
/// CLI > file > defaults; the file config already carries the defaults.
pub fn merge_cli_with_config(file_config: Config, cli: CliOverrides) -> Config {
    Config {
        on: cli.on.unwrap_or(file_config.on),
        mode: cli.mode.or(file_config.mode),
        output: cli.output.unwrap_or(file_config.output),
        delimiter: cli.delimiter.unwrap_or(file_config.delimiter),
        suffixes: cli.suffixes.unwrap_or(file_config.suffixes),
    }
}
