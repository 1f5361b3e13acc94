//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use crudkit_core::domain::FileExtension;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "crudkit",
    bin_name = "crudkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Admin CRUD view scaffolding",
    long_about = "crudkit generates the API descriptor and collection view \
                  for a new admin resource.",
    after_help = "EXAMPLES:\n\
        \x20 crudkit generate widget\n\
        \x20 crudkit g order-item --ext ts -o app/src\n\
        \x20 crudkit list --format json\n\
        \x20 crudkit completions bash > /usr/share/bash-completion/completions/crudkit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the files for a resource.
    #[command(
        visible_alias = "g",
        about = "Generate API and view descriptors for a resource",
        after_help = "EXAMPLES:\n\
            \x20 crudkit generate widget\n\
            \x20 crudkit generate order-item --ext ts\n\
            \x20 crudkit generate widget --output app/src --dry-run\n\
            \x20 crudkit generate widget --templates-dir .crudkit/templates"
    )]
    Generate(GenerateArgs),

    /// List available templates.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 crudkit list\n\
            \x20 crudkit list --format json\n\
            \x20 crudkit list --templates-dir .crudkit/templates"
    )]
    List(ListArgs),

    /// Initialise a crudkit configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 crudkit init                         # default location\n\
            \x20 crudkit --config ./crudkit.toml init # explicit file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 crudkit completions bash > ~/.local/share/bash-completion/completions/crudkit\n\
            \x20 crudkit completions zsh  > ~/.zfunc/_crudkit\n\
            \x20 crudkit completions fish > ~/.config/fish/completions/crudkit.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the crudkit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 crudkit config get scaffold.output_dir\n\
            \x20 crudkit config set scaffold.extension ts\n\
            \x20 crudkit config list"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `crudkit generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Resource name, used verbatim in paths and descriptors.
    #[arg(
        value_name = "RESOURCE",
        help = "Resource name (letters, digits, '_' and '-'), e.g. order-item"
    )]
    pub resource: String,

    /// Directory the `api/` and `views/` trees are written under.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: scaffold.output_dir from config)"
    )]
    pub output: Option<PathBuf>,

    /// Extension of the generated files.
    #[arg(
        short = 'e',
        long = "ext",
        value_name = "EXT",
        help = "File extension: js or ts (default: scaffold.extension from config)"
    )]
    pub ext: Option<FileExtension>,

    /// Overwrite existing files (destructive).
    #[arg(long = "force", help = "Overwrite existing files")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Directory of template manifests overriding the built-ins.
    #[arg(
        long = "templates-dir",
        value_name = "DIR",
        help = "Load *.toml template manifests from DIR"
    )]
    pub templates_dir: Option<PathBuf>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `crudkit list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,

    /// Directory of template manifests overriding the built-ins.
    #[arg(
        long = "templates-dir",
        value_name = "DIR",
        help = "Load *.toml template manifests from DIR"
    )]
    pub templates_dir: Option<PathBuf>,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `crudkit init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `crudkit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `crudkit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `scaffold.output_dir`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
