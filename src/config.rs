//! Configuration file support for dragscroll.
//!
//! Preferences are stored as JSON: on disk under the user's config directory
//! for native builds, in localStorage for WASM.

use dragscroll_core::constants::{DEADZONE_RADIUS, SPEED_DIVISOR};
use dragscroll_core::DragScrollConfig;
use serde::{Deserialize, Serialize};

/// Log level setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }

    /// Convert to a `log::Level` (used by console_log on WASM).
    pub fn to_level(&self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Application configuration that can be exported and imported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Application name (for identification)
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

fn default_app_name() -> String {
    "dragscroll".to_string()
}

/// User preferences section of the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Attach drag-scroll to new editors
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Deadzone radius around the anchor, in pixels
    #[serde(default = "default_deadzone_radius")]
    pub deadzone_radius: f32,

    /// Displacement divisor for the per-frame step
    #[serde(default = "default_speed_divisor")]
    pub speed_divisor: f32,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_enabled() -> bool {
    true
}

fn default_deadzone_radius() -> f32 {
    DEADZONE_RADIUS
}

fn default_speed_divisor() -> f32 {
    SPEED_DIVISOR
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            deadzone_radius: default_deadzone_radius(),
            speed_divisor: default_speed_divisor(),
            log_level: LogLevel::default(),
        }
    }
}

impl Preferences {
    /// Controller tuning derived from these preferences.
    pub fn drag_scroll_config(&self) -> DragScrollConfig {
        DragScrollConfig::new()
            .deadzone_radius(self.deadzone_radius)
            .speed_divisor(self.speed_divisor)
            .validated()
    }
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            app_name: default_app_name(),
            preferences: Preferences::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "dragscroll-config.json"
    }

    /// Get the default config file path for auto-load/save.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("dragscroll").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("dragscroll")
                    .join(Self::default_filename())
            })
        }
    }

    /// Load configuration from a specific file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Try to load configuration from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded configuration from {:?}", path);
                Some(config)
            }
            Err(e) => {
                log::warn!("Failed to load config file {:?}: {}", path, e);
                None
            }
        }
    }

    /// Save configuration to a specific file, creating parent directories.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Save configuration to the default path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_default_path(&self) -> Result<(), ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        self.save(&path)
    }

    /// LocalStorage key for WASM config persistence.
    #[cfg(target_arch = "wasm32")]
    const LOCALSTORAGE_KEY: &'static str = "dragscroll-config";

    /// Try to load configuration from localStorage (WASM only).
    #[cfg(target_arch = "wasm32")]
    pub fn load_from_local_storage() -> Option<Self> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;

        match storage.get_item(Self::LOCALSTORAGE_KEY) {
            Ok(Some(json)) => match Self::from_json(&json) {
                Ok(config) => Some(config),
                Err(e) => {
                    log::warn!("Failed to parse config from localStorage: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                log::warn!("Failed to read from localStorage: {:?}", e);
                None
            }
        }
    }

    /// Save configuration to localStorage (WASM only).
    #[cfg(target_arch = "wasm32")]
    pub fn save_to_local_storage(&self) -> Result<(), ConfigError> {
        let window = web_sys::window()
            .ok_or_else(|| ConfigError::StorageError("No window object available".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(|e| ConfigError::StorageError(format!("localStorage access error: {:?}", e)))?
            .ok_or_else(|| ConfigError::StorageError("localStorage not available".to_string()))?;

        let json = self.to_json()?;
        storage
            .set_item(Self::LOCALSTORAGE_KEY, &json)
            .map_err(|e| {
                ConfigError::StorageError(format!("Failed to save to localStorage: {:?}", e))
            })?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Storage error (localStorage in WASM)
    #[error("Storage error: {0}")]
    StorageError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_roundtrip() {
        let config = AppConfig::new();
        let json = config.to_json().unwrap();
        let parsed = AppConfig::from_json(&json).unwrap();
        assert_eq!(parsed.version, CONFIG_VERSION);
        assert_eq!(parsed.preferences, Preferences::default());
    }

    #[test]
    fn test_version_too_new() {
        let json = r#"{"version": 99, "preferences": {}}"#;
        let err = AppConfig::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::VersionTooNew {
                file_version: 99,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_preferences_use_defaults() {
        let config = AppConfig::from_json(r#"{"version": 1}"#).unwrap();
        assert!(config.preferences.enabled);
        assert_eq!(config.preferences.deadzone_radius, DEADZONE_RADIUS);
        assert_eq!(config.app_name, "dragscroll");
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            AppConfig::from_json("{not json"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_log_level_lowercase() {
        let config =
            AppConfig::from_json(r#"{"version": 1, "preferences": {"log_level": "trace"}}"#)
                .unwrap();
        assert_eq!(config.preferences.log_level, LogLevel::Trace);
        assert_eq!(
            config.preferences.log_level.to_level_filter(),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_bad_tuning_falls_back() {
        let prefs = Preferences {
            speed_divisor: -3.0,
            ..Preferences::default()
        };
        assert_eq!(prefs.drag_scroll_config(), DragScrollConfig::default());
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir()
            .join(format!("dragscroll-test-{}", std::process::id()))
            .join(AppConfig::default_filename());
        let mut config = AppConfig::new();
        config.preferences.speed_divisor = 4.0;
        config.save(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded.preferences.speed_divisor, 4.0);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
