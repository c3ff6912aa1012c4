//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a new game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board radius.
    #[serde(default = "default_radius")]
    radius: u16,

    /// Record snapshots so moves can be undone.
    #[serde(default = "default_history")]
    history: bool,
}

fn default_radius() -> u16 {
    3
}

fn default_history() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            history: default_history(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(radius = config.radius, history = config.history, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if one is given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, radius: Option<u16>, no_history: bool) -> Self {
        if let Some(radius) = radius {
            self.radius = radius;
        }
        if no_history {
            self.history = false;
        }
        self
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
    use std::io::Write;

    #[test]
    fn test_defaults_match_classic_board() {
        let config = GameConfig::default();
        assert_eq!(*config.radius(), 3);
        assert!(*config.history());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "radius = 5").expect("write config");

        let config = GameConfig::from_file(file.path()).expect("valid config");
        assert_eq!(*config.radius(), 5);
        assert!(*config.history());
    }

    #[test]
    fn test_overrides_win() {
        let config = GameConfig::default().with_overrides(Some(2), true);
        assert_eq!(*config.radius(), 2);
        assert!(!*config.history());
    }

    #[test]
    fn test_bad_file_reports_parse_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "radius = \"large\"").expect("write config");

        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_reports_read_error() {
        let err = GameConfig::load(Some(Path::new("/nonexistent/hexothello.toml"))).unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }
}
