pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, ExperimentConfig, LoggingConfig, NicknameOptions};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nickcollide")
        .join("config.toml")
}

/// Load the config file, falling back to defaults when it does not exist.
/// A word-list path given on the command line overrides the configured one.
pub fn load_config(word_list_override: Option<PathBuf>) -> Result<AppConfig> {
    let path = config_path();
    if !path.exists() {
        return finish_config(AppConfig::default(), None, word_list_override);
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config file")?;
    finish_config(config, Some(&path), word_list_override)
}

/// Apply the command-line override and validate. `source` is the file the
/// config was read from, if any.
fn finish_config(
    mut config: AppConfig,
    source: Option<&Path>,
    word_list_override: Option<PathBuf>,
) -> Result<AppConfig> {
    if let Some(word_list) = word_list_override {
        config.word_list = word_list;
    }
    let validated = config.nickname.validate();
    match source {
        Some(path) => validated
            .with_context(|| format!("Invalid [nickname] section in {}", path.display()))?,
        None => validated.context("Invalid nickname options")?,
    }
    Ok(config)
}
