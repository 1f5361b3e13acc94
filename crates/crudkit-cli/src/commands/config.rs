//! `crudkit config`: read and write configuration values.

use std::path::PathBuf;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `get` and `list` show the effective configuration (file and
/// environment); `set` edits the file only.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_file: Option<&PathBuf>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            println!("{}", config.get(&key)?);
        }

        ConfigCommands::Set { key, value } => {
            let path = AppConfig::active_path(config_file);
            let mut stored = AppConfig::from_file(&path).map_err(CliError::config)?;
            stored.set(&key, &value)?;
            stored.save(&path).map_err(CliError::config)?;
            output.success(&format!("Set {key} = {value} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            println!("{}", serialised.trim_end());
        }

        ConfigCommands::Path => {
            println!("{}", AppConfig::active_path(config_file).display());
        }
    }

    Ok(())
}
