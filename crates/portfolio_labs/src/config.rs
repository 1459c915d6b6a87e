//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use labs_tictactoe::{FirstPlayer, GameMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Config file read when `--config` is not given. Optional.
pub const DEFAULT_CONFIG_FILE: &str = "portfolio_labs.toml";

/// Environment variable overriding [`LabsConfig::store_path`].
pub const STORE_PATH_ENV: &str = "LABS_STORE_PATH";

/// Settings for a portfolio_labs run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct LabsConfig {
    /// JSON file backing the key-value store.
    #[serde(default = "default_store_path")]
    store_path: PathBuf,

    /// Delay before the computer's reply, in milliseconds.
    #[serde(default = "default_ai_delay_ms")]
    ai_delay_ms: u64,

    /// Mode of the first tic-tac-toe game.
    #[serde(default)]
    default_mode: GameMode,

    /// Who plays X against the computer.
    #[serde(default)]
    first_player: FirstPlayer,

    /// Log destination while the terminal UI is running.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("portfolio_labs_store.json")
}

fn default_ai_delay_ms() -> u64 {
    500
}

fn default_log_file() -> PathBuf {
    PathBuf::from("portfolio_labs.log")
}

impl Default for LabsConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            ai_delay_ms: default_ai_delay_ms(),
            default_mode: GameMode::default(),
            first_player: FirstPlayer::default(),
            log_file: default_log_file(),
        }
    }
}

impl LabsConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text. Missing keys take defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Resolves the file layer.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present and defaults are used otherwise.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                info!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies environment overrides read through `lookup`.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup(STORE_PATH_ENV).filter(|p| !p.is_empty()) {
            debug!(%path, "Store path overridden from environment");
            self.store_path = PathBuf::from(path);
        }
        self
    }

    /// Applies command-line overrides. `None` keeps the current value.
    pub fn with_overrides(
        mut self,
        store_path: Option<PathBuf>,
        ai_delay_ms: Option<u64>,
        mode: Option<GameMode>,
        first_player: Option<FirstPlayer>,
    ) -> Self {
        if let Some(store_path) = store_path {
            self.store_path = store_path;
        }
        if let Some(ai_delay_ms) = ai_delay_ms {
            self.ai_delay_ms = ai_delay_ms;
        }
        if let Some(mode) = mode {
            self.default_mode = mode;
        }
        if let Some(first_player) = first_player {
            self.first_player = first_player;
        }
        self
    }

    /// The computer's reply delay.
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(LabsConfig::from_toml("").unwrap(), LabsConfig::default());
    }

    #[test]
    fn test_env_override() {
        let config = LabsConfig::default().with_env(|key| {
            (key == STORE_PATH_ENV).then(|| "/tmp/labs.json".to_string())
        });
        assert_eq!(config.store_path(), Path::new("/tmp/labs.json"));
    }

    #[test]
    fn test_empty_env_value_is_ignored() {
        let config = LabsConfig::default().with_env(|_| Some(String::new()));
        assert_eq!(config.store_path(), &default_store_path());
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let config = LabsConfig::default().with_overrides(
            None,
            Some(0),
            Some(GameMode::TwoPlayer),
            None,
        );
        assert_eq!(*config.ai_delay_ms(), 0);
        assert_eq!(*config.default_mode(), GameMode::TwoPlayer);
        assert_eq!(*config.first_player(), FirstPlayer::Human);
        assert_eq!(config.store_path(), &default_store_path());
    }
}
