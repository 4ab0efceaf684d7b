//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default matching the reference experiment, so the
//! simulator runs out of the box without a config file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::corpus::MAX_WORD_LEN;
use crate::error::ConfigError;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_word_list")]
    pub word_list: PathBuf,
    #[serde(default)]
    pub nickname: NicknameOptions,
    #[serde(default)]
    pub experiment: ExperimentConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            word_list: default_word_list(),
            nickname: NicknameOptions::default(),
            experiment: ExperimentConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

fn default_word_list() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("external")
        .join("wordlist")
        .join("wordlist.txt")
}

/// Bounds for a generated nickname and the pieces it is built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NicknameOptions {
    /// Shortest total nickname length.
    #[serde(default = "default_nickname_len")]
    pub min_len: usize,
    /// Longest total nickname length.
    #[serde(default = "default_nickname_len")]
    pub max_len: usize,
    /// Shortest word-derived piece. A remaining budget below this is filled
    /// with random characters instead.
    #[serde(default = "default_min_word_len")]
    pub min_word_len: usize,
    #[serde(default = "default_max_word_len")]
    pub max_word_len: usize,
    /// A word of length `n` gets `round(n / mangling_factor)` characters replaced.
    #[serde(default = "default_mangling_factor")]
    pub mangling_factor: f64,
}

impl Default for NicknameOptions {
    fn default() -> Self {
        Self {
            min_len: default_nickname_len(),
            max_len: default_nickname_len(),
            min_word_len: default_min_word_len(),
            max_word_len: default_max_word_len(),
            mangling_factor: default_mangling_factor(),
        }
    }
}

impl NicknameOptions {
    /// Reject combinations that would make the generator loop forever or
    /// sample outside the corpus.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_len > self.max_len {
            return Err(ConfigError::Invalid(format!(
                "min_len ({}) exceeds max_len ({})",
                self.min_len, self.max_len
            )));
        }
        if self.min_word_len == 0 {
            return Err(ConfigError::Invalid("min_word_len must be at least 1".into()));
        }
        if self.min_word_len > self.max_word_len {
            return Err(ConfigError::Invalid(format!(
                "min_word_len ({}) exceeds max_word_len ({})",
                self.min_word_len, self.max_word_len
            )));
        }
        if self.max_word_len > MAX_WORD_LEN {
            return Err(ConfigError::Invalid(format!(
                "max_word_len ({}) exceeds the longest corpus bucket ({})",
                self.max_word_len, MAX_WORD_LEN
            )));
        }
        if !self.mangling_factor.is_finite() || self.mangling_factor <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "mangling_factor must be a positive number, got {}",
                self.mangling_factor
            )));
        }
        Ok(())
    }
}

fn default_nickname_len() -> usize {
    8
}

fn default_min_word_len() -> usize {
    3
}

fn default_max_word_len() -> usize {
    8
}

fn default_mangling_factor() -> f64 {
    2.7
}

/// Sizes of the two experiment phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Distinct nicknames inserted before any trial runs.
    #[serde(default = "default_initial_nicknames")]
    pub initial_nicknames: usize,
    /// Membership probes performed against the populated set.
    #[serde(default = "default_tries")]
    pub tries: usize,
    /// Emit a debug progress event every this many draws. Zero disables it.
    #[serde(default = "default_progress_interval")]
    pub progress_interval: usize,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            initial_nicknames: default_initial_nicknames(),
            tries: default_tries(),
            progress_interval: default_progress_interval(),
        }
    }
}

fn default_initial_nicknames() -> usize {
    10_000_000
}

fn default_tries() -> usize {
    50_000_000
}

fn default_progress_interval() -> usize {
    1_000_000
}

/// Diagnostic output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. `"info"`,
    /// `"nickcollide=debug"`).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}
