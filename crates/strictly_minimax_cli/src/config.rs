//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use strictly_minimax::Engine;
use tracing::{debug, info, instrument};

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Plies the engine looks ahead (at least 1).
    #[serde(default = "default_depth")]
    depth: u8,

    /// Pause before the computer replies, in milliseconds.
    #[serde(default = "default_delay_ms")]
    computer_delay_ms: u64,

    /// Where the terminal UI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_depth() -> u8 {
    Engine::DEFAULT_DEPTH
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_minimax.log")
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(depth = config.depth, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides and re-validates.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        depth: Option<u8>,
        delay_ms: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if let Some(depth) = depth {
            self.depth = depth;
        }
        if let Some(delay_ms) = delay_ms {
            self.computer_delay_ms = delay_ms;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::new("depth must be at least 1".to_string()));
        }
        Ok(())
    }

    /// The computer's reply delay.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    /// An engine configured with this depth.
    pub fn engine(&self) -> Engine {
        Engine::new(self.depth)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            depth: default_depth(),
            computer_delay_ms: default_delay_ms(),
            log_file: default_log_file(),
        }
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
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.depth(), 7);
        assert_eq!(config.delay(), Duration::from_secs(1));
        assert_eq!(config.log_file(), &PathBuf::from("strictly_minimax.log"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config("depth = 9\n");
        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.depth(), 9);
        assert_eq!(*config.computer_delay_ms(), 1000);
    }

    #[test]
    fn test_full_file() {
        let file = write_config(
            "depth = 5\ncomputer_delay_ms = 250\nlog_file = \"/tmp/minimax.log\"\n",
        );
        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.engine().depth(), 5);
        assert_eq!(config.delay(), Duration::from_millis(250));
        assert_eq!(config.log_file(), &PathBuf::from("/tmp/minimax.log"));
    }

    #[test]
    fn test_zero_depth_rejected() {
        let file = write_config("depth = 0\n");
        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("depth"));
        assert!(GameConfig::default().with_overrides(Some(0), None).is_err());
    }

    #[test]
    fn test_malformed_file_rejected() {
        let file = write_config("depth = \"deep\"\n");
        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_overrides_win() {
        let config = GameConfig::default()
            .with_overrides(Some(9), Some(0))
            .unwrap();
        assert_eq!(*config.depth(), 9);
        assert_eq!(config.delay(), Duration::ZERO);
    }
}
