//! Persisted application settings (`config.toml` in the app directory).

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize, de::Error as SerdeDeError};
use thiserror::Error;

use crate::app_dirs;

use super::config_defaults::{
    clamp_max_name_length, clamp_persist_delay_ms, default_docs_base_url, default_log_filter,
    default_max_log_files, default_max_name_length, default_persist_delay_ms, default_true,
};

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings loaded from `config.toml`; every section may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub title_bar: TitleBarSettings,
    #[serde(default)]
    pub registry: RegistrySettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub demo: DemoSettings,
}

impl AppSettings {
    pub(crate) fn normalized(mut self) -> Self {
        self.title_bar.max_name_length = clamp_max_name_length(self.title_bar.max_name_length);
        self.registry.persist_delay_ms = clamp_persist_delay_ms(self.registry.persist_delay_ms);
        let docs = self.title_bar.docs_base_url.trim().trim_end_matches('/');
        self.title_bar.docs_base_url = if docs.is_empty() {
            default_docs_base_url()
        } else {
            docs.to_string()
        };
        self
    }
}

/// Property pane title bar preferences.
///
/// Config keys: `max_name_length`, `docs_base_url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleBarSettings {
    /// Names are truncated to this many characters while typing.
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
    /// Base URL of the widget reference docs opened by the help button.
    #[serde(default = "default_docs_base_url")]
    pub docs_base_url: String,
}

impl Default for TitleBarSettings {
    fn default() -> Self {
        Self {
            max_name_length: default_max_name_length(),
            docs_base_url: default_docs_base_url(),
        }
    }
}

/// Registry behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrySettings {
    /// Simulated time a mutation spends being persisted.
    #[serde(default = "default_persist_delay_ms")]
    pub persist_delay_ms: u64,
}

impl RegistrySettings {
    pub fn persist_delay(&self) -> Duration {
        Duration::from_millis(self.persist_delay_ms)
    }
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            persist_delay_ms: default_persist_delay_ms(),
        }
    }
}

/// Tracing filter and log file retention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            max_files: default_max_log_files(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoSettings {
    /// Populate the canvas with a few widgets on launch.
    #[serde(default = "default_true")]
    pub seed_widgets: bool,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            seed_widgets: default_true(),
        }
    }
}

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No suitable config directory available")]
    NoConfigDir,
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
}

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load settings from the app directory, returning defaults if the file is missing.
pub fn load_or_default() -> Result<AppSettings, ConfigError> {
    load_from(&config_path()?)
}

/// Load settings from a specific file, returning defaults if it is missing.
pub fn load_from(path: &Path) -> Result<AppSettings, ConfigError> {
    if !path.exists() {
        return Ok(AppSettings::default());
    }
    let bytes = std::fs::read(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source: SerdeDeError::custom(source),
    })?;
    toml::from_str::<AppSettings>(&text)
        .map(AppSettings::normalized)
        .map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
}

/// Persist settings to the app directory.
pub fn save(settings: &AppSettings) -> Result<(), ConfigError> {
    save_to_path(settings, &config_path()?)
}

/// Save settings to a specific path, creating parent directories as needed.
pub fn save_to_path(settings: &AppSettings, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let data = toml::to_string_pretty(settings).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, data).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => {
            ConfigError::CreateDir { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::config_defaults::MAX_NAME_LENGTH_LIMIT;
    use super::*;
    use crate::app_dirs::ConfigBaseGuard;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.title_bar.max_name_length, 30);
        assert_eq!(settings.registry.persist_delay_ms, 250);
    }

    #[test]
    fn partial_file_fills_remaining_sections() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[title_bar]\nmax_name_length = 12\n").unwrap();

        let settings = load_from(&path).unwrap();

        assert_eq!(settings.title_bar.max_name_length, 12);
        assert_eq!(settings.title_bar.docs_base_url, default_docs_base_url());
        assert_eq!(settings.logging, LoggingSettings::default());
        assert!(settings.demo.seed_widgets);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "[title_bar]\nmax_name_length = 0\ndocs_base_url = \"https://example.test/docs/\"\n\n[registry]\npersist_delay_ms = 999999\n",
        )
        .unwrap();

        let settings = load_from(&path).unwrap();

        assert_eq!(settings.title_bar.max_name_length, 1);
        assert_eq!(settings.title_bar.docs_base_url, "https://example.test/docs");
        assert_eq!(settings.registry.persist_delay_ms, 10_000);

        std::fs::write(&path, "[title_bar]\nmax_name_length = 500\n").unwrap();
        let settings = load_from(&path).unwrap();
        assert_eq!(settings.title_bar.max_name_length, MAX_NAME_LENGTH_LIMIT);
    }

    #[test]
    fn malformed_file_reports_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[title_bar\nmax_name_length = ").unwrap();

        let err = load_from(&path).unwrap_err();

        assert!(matches!(err, ConfigError::ParseToml { .. }));
    }

    #[test]
    fn save_then_load_through_app_dir() {
        let dir = tempdir().unwrap();
        let _guard = ConfigBaseGuard::set(dir.path().to_path_buf());
        let mut settings = AppSettings::default();
        settings.registry.persist_delay_ms = 40;
        settings.demo.seed_widgets = false;

        save(&settings).unwrap();

        assert!(config_path().unwrap().is_file());
        assert_eq!(load_or_default().unwrap(), settings);
    }
}
