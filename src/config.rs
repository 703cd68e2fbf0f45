//! Site settings.
//!
//! Runtime tuning for the gallery and logging, loaded from a JSON file on
//! native builds or from localStorage in the browser. Missing fields take
//! their defaults, so an old settings file keeps working.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Log level setting for the application.
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

    /// Convert to log crate's Level.
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

/// Current settings format version.
/// Increment this when making breaking changes to the format.
pub const SETTINGS_VERSION: u32 = 1;

/// Runtime settings for the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Version of the settings format
    #[serde(default = "default_version")]
    pub version: u32,

    /// Storage key for the image override map
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Gallery autoplay interval in milliseconds
    #[serde(default = "default_autoplay_interval_ms")]
    pub autoplay_interval_ms: u64,

    /// Horizontal travel (px) needed for a swipe
    #[serde(default = "default_swipe_threshold_px")]
    pub swipe_threshold_px: f64,

    /// Horizontal travel (px) before a touch counts as a drag
    #[serde(default = "default_drag_noise_px")]
    pub drag_noise_px: f64,

    /// Viewport width (px) below which the gallery uses the mobile layout
    #[serde(default = "default_mobile_breakpoint_px")]
    pub mobile_breakpoint_px: f64,

    /// Gallery item shown first
    #[serde(default = "default_initial_gallery_index")]
    pub initial_gallery_index: usize,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_version() -> u32 {
    SETTINGS_VERSION
}

fn default_storage_key() -> String {
    constants::storage::OVERRIDES_KEY.to_string()
}

fn default_autoplay_interval_ms() -> u64 {
    constants::carousel::AUTOPLAY_INTERVAL_MS
}

fn default_swipe_threshold_px() -> f64 {
    constants::carousel::SWIPE_THRESHOLD_PX
}

fn default_drag_noise_px() -> f64 {
    constants::carousel::DRAG_NOISE_PX
}

fn default_mobile_breakpoint_px() -> f64 {
    constants::carousel::MOBILE_BREAKPOINT_PX
}

fn default_initial_gallery_index() -> usize {
    constants::carousel::INITIAL_INDEX
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            storage_key: default_storage_key(),
            autoplay_interval_ms: default_autoplay_interval_ms(),
            swipe_threshold_px: default_swipe_threshold_px(),
            drag_noise_px: default_drag_noise_px(),
            mobile_breakpoint_px: default_mobile_breakpoint_px(),
            initial_gallery_index: default_initial_gallery_index(),
            log_level: LogLevel::default(),
        }
    }
}

impl SiteSettings {
    /// Autoplay interval as a duration.
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    /// Serialize the settings to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize settings from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;

        if settings.version > SETTINGS_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: settings.version,
                supported_version: SETTINGS_VERSION,
            });
        }
        if settings.autoplay_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "autoplay_interval_ms must be positive".to_string(),
            ));
        }

        Ok(settings)
    }

    /// Get the default filename for the settings file.
    pub fn default_filename() -> &'static str {
        "settings.json"
    }

    /// Get the default settings file path.
    /// Returns None on WASM (no filesystem access).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        let app_dir = constants::storage::APP_DIR;
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join(app_dir).join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join(app_dir)
                    .join(Self::default_filename())
            })
        }
    }

    /// Load settings from `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Try to load settings from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("No settings file found at {:?}", path);
            return None;
        }

        match Self::load_from_path(&path) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("Failed to load settings file {:?}: {}", path, e);
                None
            }
        }
    }

    /// Save settings to `path`, creating parent directories.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Try to load settings from localStorage (WASM only).
    /// Returns None if not found or can't be parsed.
    #[cfg(target_arch = "wasm32")]
    pub fn load_from_local_storage() -> Option<Self> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;

        match storage.get_item(constants::storage::SETTINGS_KEY) {
            Ok(Some(json)) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from localStorage");
                    Some(settings)
                }
                Err(e) => {
                    log::warn!("Failed to parse settings from localStorage: {}", e);
                    None
                }
            },
            Ok(None) => {
                log::debug!("No settings found in localStorage");
                None
            }
            Err(e) => {
                log::warn!("Failed to read from localStorage: {:?}", e);
                None
            }
        }
    }
}

/// Errors that can occur when loading settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse settings: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Settings version is newer than supported
    #[error("Settings file version {file_version} is newer than supported version {supported_version}")]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// A value is out of range
    #[error("Invalid settings: {0}")]
    Invalid(String),

    /// I/O error when reading/writing settings
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
