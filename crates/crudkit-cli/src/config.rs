//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `CRUDKIT__<SECTION>__<KEY>`
//! 3. Config file (`--config FILE`, else the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::ValueEnum;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crudkit_core::domain::FileExtension;

use crate::cli::OutputFormat;

/// Environment variable prefix; `CRUDKIT__SCAFFOLD__EXTENSION=ts`.
const ENV_PREFIX: &str = "CRUDKIT";
const ENV_SEPARATOR: &str = "__";

/// Every key `config get`/`config set` understand.
pub const KEYS: &[&str] = &[
    "scaffold.output_dir",
    "scaffold.extension",
    "output.no_color",
    "output.format",
    "templates.local_path",
];

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where and how resources are generated.
    pub scaffold: ScaffoldConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    pub output_dir: PathBuf,
    pub extension: FileExtension,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Used when `--output-format` is left at `auto`.
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Directory of `*.toml` template manifests layered over the built-ins.
    pub local_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scaffold: ScaffoldConfig {
                output_dir: PathBuf::from("src"),
                extension: FileExtension::Js,
            },
            output: OutputConfig {
                no_color: false,
                format: OutputFormat::Auto,
            },
            templates: TemplateConfig::default(),
        }
    }
}

/// A `config get`/`config set` request that cannot be honoured.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigKeyError {
    #[error("Unknown config key: '{key}'")]
    UnknownKey { key: String },

    #[error("Invalid value '{value}' for '{key}': {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// With `require_file`, a file named by `--config` must exist. The
    /// default location is always optional.
    pub fn load(config_file: Option<&PathBuf>, require_file: bool) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);

        Self::file_layer(&path, require_file && config_file.is_some())?
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Defaults overlaid with one file only, ignoring the environment.
    ///
    /// Used by `config set`, so values that came from the environment are
    /// never persisted.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        Self::file_layer(path, false)?
            .build()
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?
            .try_deserialize()
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Built-in defaults with one TOML file on top. Keys the file leaves
    /// out keep their default.
    fn file_layer(path: &Path, required: bool) -> anyhow::Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from(path).format(FileFormat::Toml).required(required)))
    }

    /// Serialise as TOML and write to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let toml = toml::to_string_pretty(self).context("Failed to serialise config")?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, toml).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Value of a dotted key as it would be typed on the command line.
    pub fn get(&self, key: &str) -> Result<String, ConfigKeyError> {
        Ok(match key {
            "scaffold.output_dir" => self.scaffold.output_dir.display().to_string(),
            "scaffold.extension" => self.scaffold.extension.to_string(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self
                .output
                .format
                .to_possible_value()
                .map(|v| v.get_name().to_owned())
                .unwrap_or_default(),
            "templates.local_path" => self
                .templates
                .local_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            _ => return Err(unknown(key)),
        })
    }

    /// Set a dotted key from its command-line spelling.
    ///
    /// An empty value clears `templates.local_path`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigKeyError> {
        let invalid = |reason: String| ConfigKeyError::InvalidValue {
            key: key.into(),
            value: value.into(),
            reason,
        };

        match key {
            "scaffold.output_dir" => {
                if value.trim().is_empty() {
                    return Err(invalid("must not be empty".into()));
                }
                self.scaffold.output_dir = PathBuf::from(value);
            }
            "scaffold.extension" => self.scaffold.extension = value.parse().map_err(invalid)?,
            "output.no_color" => {
                self.output.no_color = value
                    .parse()
                    .map_err(|_| invalid("expected true or false".into()))?;
            }
            "output.format" => {
                self.output.format = OutputFormat::from_str(value, true)
                    .map_err(|_| invalid("expected auto, human, plain or json".into()))?;
            }
            "templates.local_path" => {
                self.templates.local_path = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            _ => return Err(unknown(key)),
        }
        Ok(())
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.crudkit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "crudkit", "crudkit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".crudkit.toml"))
    }

    /// `--config FILE` if given, else [`Self::config_path`].
    pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
        config_file.cloned().unwrap_or_else(Self::config_path)
    }
}

fn unknown(key: &str) -> ConfigKeyError {
    ConfigKeyError::UnknownKey { key: key.into() }
}
