use super::Result;
use crate::core::services::types::MockOptions;
use crate::error::{ConfigError, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const APP_DIR_NAME: &str = "city-browser";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Keys accepted by [`Config::set`]
pub const CONFIG_KEYS: &[&str] = &[
    "data_path",
    "randomly_fail",
    "delay_ms",
    "max_reloads",
    "colors",
];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Cities document to load instead of the bundled one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,
    pub randomly_fail: bool,
    pub delay_ms: u64,
    /// How many error alerts a non-interactive list view dismisses before giving up
    pub max_reloads: u32,
    pub colors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            randomly_fail: true,
            delay_ms: 2000,
            max_reloads: 3,
            colors: true,
        }
    }
}

impl Config {
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: e.to_string(),
            })?;

        Ok(config)
    }

    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content =
            toml::to_string(self).map_err(|e| StorageError::ConfigSerializeError {
                message: e.to_string(),
            })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    /// Config file inside `dir`, or the platform default location
    pub fn file_path_in(dir: Option<&str>) -> Result<PathBuf> {
        match dir {
            Some(dir) => Ok(PathBuf::from(dir).join(CONFIG_FILE_NAME)),
            None => Self::config_file_path(),
        }
    }

    fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(StorageError::ConfigDirNotFound)?;

        let app_config_dir = config_dir.join(APP_DIR_NAME);
        let config_file = app_config_dir.join(CONFIG_FILE_NAME);

        Ok(config_file)
    }

    /// Set a single value from its string form
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), ConfigError> {
        match key {
            "data_path" => {
                self.data_path = match value.trim() {
                    "" | "none" => None,
                    path => Some(PathBuf::from(path)),
                };
            }
            "randomly_fail" => self.randomly_fail = parse_bool(key, value)?,
            "colors" => self.colors = parse_bool(key, value)?,
            "delay_ms" => {
                self.delay_ms = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    field: key.to_string(),
                    value: value.to_string(),
                    reason: "expected a non-negative number of milliseconds".to_string(),
                })?;
            }
            "max_reloads" => {
                self.max_reloads =
                    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                        field: key.to_string(),
                        value: value.to_string(),
                        reason: "expected a non-negative integer".to_string(),
                    })?;
            }
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_string(),
                    hint: format!("valid keys: {}", CONFIG_KEYS.join(", ")),
                });
            }
        }
        Ok(())
    }

    pub fn mock_options(&self) -> MockOptions {
        MockOptions::default()
            .with_randomly_fail(self.randomly_fail)
            .with_delay(Duration::from_millis(self.delay_ms))
    }
}

fn parse_bool(field: &str, value: &str) -> std::result::Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.data_path, None);
        assert!(config.randomly_fail);
        assert_eq!(config.delay_ms, 2000);
        assert_eq!(config.max_reloads, 3);
        assert!(config.colors);
    }

    #[test]
    fn test_config_load_save() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            data_path: Some(PathBuf::from("/tmp/cities.json")),
            randomly_fail: false,
            delay_ms: 150,
            max_reloads: 1,
            colors: false,
        };

        config
            .save(Some(config_path.clone()))
            .expect("Failed to save config");

        let loaded_config = Config::load(Some(config_path)).expect("Failed to load config");
        assert_eq!(loaded_config, config);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load(Some(temp_dir.path().join("missing.toml")))
            .expect("Failed to load default config");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "delay_ms = 0\n").unwrap();

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.delay_ms, 0);
        assert!(config.randomly_fail);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "delay_ms = \"soon\"\n").unwrap();

        let result = Config::load(Some(config_path));
        assert!(matches!(result, Err(StorageError::ConfigParseError { .. })));
    }

    #[test]
    fn test_set_values() {
        let mut config = Config::default();
        config.set("randomly_fail", "off").unwrap();
        config.set("delay_ms", "250").unwrap();
        config.set("max_reloads", "0").unwrap();
        config.set("data_path", "/data/cities.json").unwrap();

        assert!(!config.randomly_fail);
        assert_eq!(config.delay_ms, 250);
        assert_eq!(config.max_reloads, 0);
        assert_eq!(config.data_path, Some(PathBuf::from("/data/cities.json")));

        config.set("data_path", "none").unwrap();
        assert_eq!(config.data_path, None);
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("delay_ms", "-5"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("colors", "maybe"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("endpoint", "x"),
            Err(ConfigError::UnknownKey { .. })
        ));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_mock_options() {
        let mut config = Config::default();
        config.randomly_fail = false;
        config.delay_ms = 10;

        let options = config.mock_options();
        assert!(!options.randomly_fail);
        assert_eq!(options.delay, Duration::from_millis(10));
    }

    #[test]
    fn test_file_path_in_dir() {
        let path = Config::file_path_in(Some("/tmp/cb")).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/cb/config.toml"));
    }
}
