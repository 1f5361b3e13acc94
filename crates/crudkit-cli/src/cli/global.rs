//! Flags accepted by every subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// More log output: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also honours NO_COLOR)
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Read settings from FILE instead of the user config file
    #[arg(short, long, global = true, value_name = "FILE", env = "CRUDKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// How results are rendered; `auto` defers to `output.format` in config
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

/// Rendering of command results. Also the type of `output.format` in config.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human on a terminal, plain when piped
    #[default]
    Auto,
    /// Colored, with status markers
    Human,
    /// No colors
    Plain,
    /// JSON documents on stdout
    Json,
}

impl OutputFormat {
    /// Collapse `Auto` using the configured fallback, then the terminal.
    pub fn resolve(self, configured: OutputFormat, stdout_is_tty: bool) -> OutputFormat {
        match (self, configured) {
            (Self::Auto, Self::Auto) if stdout_is_tty => Self::Human,
            (Self::Auto, Self::Auto) => Self::Plain,
            (Self::Auto, configured) => configured,
            (explicit, _) => explicit,
        }
    }
}
