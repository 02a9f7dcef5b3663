// TOML config adapter - Screen configuration from file, environment and defaults

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::app::screen::ScreenSettings;
use crate::domain::model::*;
use crate::error::{ScreenError, ScreenResult};

pub const ENV_PLATFORM: &str = "TRIM_SCREEN_PLATFORM";
pub const ENV_OUTPUT_DIR: &str = "TRIM_SCREEN_OUTPUT_DIR";
pub const ENV_PHOTO_DIR: &str = "TRIM_SCREEN_PHOTO_DIR";

/// Everything the binary needs to wire a screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub platform: Platform,
    /// Where the editor writes trimmed files
    pub output_dir: PathBuf,
    /// Stand-in for the device photo library
    pub photo_library_dir: Option<PathBuf>,
    pub ffmpeg_path: String,
    pub ffprobe_path: String,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            platform: Platform::current(),
            output_dir: std::env::temp_dir().join("trim-screen"),
            photo_library_dir: None,
            ffmpeg_path: "ffmpeg".to_string(),
            ffprobe_path: "ffprobe".to_string(),
        }
    }
}

impl ScreenConfig {
    /// Editor options and dialog texts are fixed; only the platform varies
    pub fn settings(&self) -> ScreenSettings {
        ScreenSettings {
            platform: self.platform,
            ..ScreenSettings::default()
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    screen: ScreenConfig,
}

/// TOML configuration adapter
#[derive(Debug, Clone, Default)]
pub struct TomlConfigAdapter {
    config: ScreenConfig,
    config_file_path: Option<PathBuf>,
}

impl TomlConfigAdapter {
    /// Defaults only
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a `[screen]` table from a TOML file
    pub fn load(path: &Path) -> ScreenResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut adapter = Self::from_toml_str(&content, &path.to_string_lossy())?;
        adapter.config_file_path = Some(path.to_path_buf());
        info!(path = %path.display(), "Loaded configuration file");
        Ok(adapter)
    }

    pub fn from_toml_str(content: &str, origin: &str) -> ScreenResult<Self> {
        let parsed: ConfigFile =
            toml::from_str(content).map_err(|e| ScreenError::InvalidConfig {
                path: origin.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self {
            config: parsed.screen,
            config_file_path: None,
        })
    }

    /// Override file values with process environment variables
    pub fn apply_env(&mut self) -> ScreenResult<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    pub fn apply_env_from<F>(&mut self, lookup: F) -> ScreenResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut overrides = 0;
        if let Some(platform) = lookup(ENV_PLATFORM) {
            self.config.platform = Platform::parse(&platform)?;
            overrides += 1;
        }
        if let Some(dir) = lookup(ENV_OUTPUT_DIR) {
            self.config.output_dir = PathBuf::from(dir);
            overrides += 1;
        }
        if let Some(dir) = lookup(ENV_PHOTO_DIR) {
            self.config.photo_library_dir = Some(PathBuf::from(dir));
            overrides += 1;
        }
        if overrides > 0 {
            debug!(overrides, "Applied environment overrides");
        }
        Ok(())
    }

    pub fn set_platform(&mut self, platform: Platform) {
        self.config.platform = platform;
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    pub fn into_config(self) -> ScreenConfig {
        self.config
    }

    pub fn config_file_path(&self) -> Option<&Path> {
        self.config_file_path.as_deref()
    }

    /// Effective configuration as TOML
    pub fn to_toml_string(&self) -> ScreenResult<String> {
        let file = ConfigFile {
            screen: self.config.clone(),
        };
        toml::to_string_pretty(&file).map_err(|e| ScreenError::InvalidConfig {
            path: "<effective>".to_string(),
            message: e.to_string(),
        })
    }
}
