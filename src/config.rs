use std::path::{Path, PathBuf};

use tracing::Level;

use crate::error::ConfigError;
use crate::game::{Player, WIDTH};
use crate::logging;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Display names used in status messages.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one_name: String,
    pub two_name: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one_name: "Red".to_string(),
            two_name: "Blue".to_string(),
        }
    }
}

impl PlayersConfig {
    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.one_name,
            Player::Two => &self.two_name,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Column the selector starts on after each new game
    pub start_column: usize,
    /// How long to wait for a key press before redrawing
    pub poll_interval_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            start_column: WIDTH / 2,
            poll_interval_ms: 100,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub directory: PathBuf,
    pub file_name: String,
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            directory: PathBuf::from("logs"),
            file_name: "connect-four.log".to_string(),
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn level(&self) -> Result<Level, ConfigError> {
        logging::parse_level(&self.level)
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.one_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.one_name must not be empty".into(),
            ));
        }
        if self.players.two_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.two_name must not be empty".into(),
            ));
        }
        if self.players.one_name == self.players.two_name {
            return Err(ConfigError::Validation(
                "players.one_name and players.two_name must differ".into(),
            ));
        }
        if self.ui.start_column >= WIDTH {
            return Err(ConfigError::Validation(format!(
                "ui.start_column must be < {WIDTH}"
            )));
        }
        if self.ui.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.poll_interval_ms must be > 0".into(),
            ));
        }
        if self.logging.file_name.is_empty() {
            return Err(ConfigError::Validation(
                "logging.file_name must not be empty".into(),
            ));
        }
        self.logging.level()?;

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.players.name(Player::One), "Red");
        assert_eq!(config.players.name(Player::Two), "Blue");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[players]
one_name = "Ruby"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.players.one_name, "Ruby");
        // Other fields should be defaults
        assert_eq!(config.players.two_name, "Blue");
        assert_eq!(config.ui.start_column, WIDTH / 2);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.ui.poll_interval_ms, default.ui.poll_interval_ms);
        assert_eq!(config.logging.directory, default.logging.directory);
    }

    #[test]
    fn test_validation_rejects_empty_name() {
        let mut config = AppConfig::default();
        config.players.two_name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_duplicate_names() {
        let mut config = AppConfig::default();
        config.players.two_name = config.players.one_name.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_start_column_out_of_range() {
        let mut config = AppConfig::default();
        config.ui.start_column = WIDTH;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_poll_interval() {
        let mut config = AppConfig::default();
        config.ui.poll_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unknown_level() {
        let mut config = AppConfig::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.players.one_name, "Red");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[ui]
start_column = 0

[logging]
level = "debug"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.ui.start_column, 0);
        assert_eq!(config.logging.level().unwrap(), Level::DEBUG);
        // Others are defaults
        assert_eq!(config.players.two_name, "Blue");
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[ui]\nstart_column = 99\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));

        std::fs::write(&path, "[ui\n").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
