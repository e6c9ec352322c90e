use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::search::{DEFAULT_REGION_OVERRIDES, SearchEngine};
use crate::utils::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub media_controls: MediaControlsConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaControlsConfig {
    #[serde(default = "default_seek_backward")]
    pub seek_backward_secs: f64,

    #[serde(default = "default_seek_forward")]
    pub seek_forward_secs: f64,

    #[serde(default = "default_seek_bar_max")]
    pub seek_bar_max: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Engines offered to the user; the first one is the fallback default
    #[serde(default)]
    pub engines: Vec<SearchEngine>,

    /// Country code (upper case) to engine identifier
    #[serde(default = "default_region_overrides")]
    pub region_overrides: HashMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_engine: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    #[serde(default = "default_suggestions_timeout")]
    pub suggestions_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load from `path`, writing the defaults there first if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            debug!("Loading config from {:?}", path);
            let contents = fs::read_to_string(path).context("Failed to read config file")?;
            let config = Self::from_toml_str(&contents).context("Failed to parse config file")?;
            info!("Config loaded successfully");
            Ok(config)
        } else {
            info!("No config file found, using defaults");
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(AppError::from)
            .context("Failed to serialize config")?;

        fs::write(path, contents).context("Failed to write config file")?;

        debug!("Config saved to {:?}", path);
        Ok(())
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let controls = &self.media_controls;
        let valid_step = |step: f64| step.is_finite() && step >= 0.0;
        if !valid_step(controls.seek_backward_secs) || !valid_step(controls.seek_forward_secs) {
            return Err(AppError::Configuration(
                "seek steps must be non-negative".to_string(),
            ));
        }
        if controls.seek_bar_max <= 0 {
            return Err(AppError::Configuration(format!(
                "seek_bar_max must be positive, got {}",
                controls.seek_bar_max
            )));
        }
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Failed to get config directory")?;
        Ok(config_dir.join("vrbrowser").join("config.toml"))
    }
}

impl Default for MediaControlsConfig {
    fn default() -> Self {
        Self {
            seek_backward_secs: default_seek_backward(),
            seek_forward_secs: default_seek_forward(),
            seek_bar_max: default_seek_bar_max(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            engines: Vec::new(),
            region_overrides: default_region_overrides(),
            preferred_engine: None,
            country_code: None,
            suggestions_timeout_secs: default_suggestions_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

// Default value functions
fn default_seek_backward() -> f64 { 10.0 }
fn default_seek_forward() -> f64 { 30.0 }
fn default_seek_bar_max() -> i32 { 100 }
fn default_suggestions_timeout() -> u64 { 10 }
fn default_log_filter() -> String { "vrbrowser_media=debug".to_string() }

fn default_region_overrides() -> HashMap<String, String> {
    DEFAULT_REGION_OVERRIDES
        .iter()
        .map(|(region, engine)| (region.to_string(), engine.to_string()))
        .collect()
}
