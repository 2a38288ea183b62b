pub mod env;
pub use env::apply_env_overrides;

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

// Re-export camera and series definitions
pub use crate::telemetry::{CameraConfig, ConfigurationError, SeriesBand};

use crate::counter::MIN_STEP_INTERVAL;
use crate::scheduler::MAX_PERIOD;
use crate::telemetry::{default_cameras, default_series_bands, validate_bands, validate_cameras};

/// Complete Vigil configuration
#[derive(Debug, Clone, Deserialize)]
pub struct VigilConfig {
    #[serde(default)]
    pub refresh: RefreshConfig,
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default = "default_cameras")]
    pub cameras: Vec<CameraConfig>,
    #[serde(default = "default_series_bands")]
    pub series: Vec<SeriesBand>,
}

/// Live refresh configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshConfig {
    /// Period between telemetry regenerations (milliseconds)
    #[serde(default = "default_refresh_interval")]
    pub interval_ms: u64,
}

fn default_refresh_interval() -> u64 {
    5000
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_refresh_interval(),
        }
    }
}

impl RefreshConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Total-detections counter animation
#[derive(Debug, Clone, Deserialize)]
pub struct CounterConfig {
    #[serde(default = "default_counter_enabled")]
    pub enabled: bool,
    /// Wall-clock length of one animation run (milliseconds)
    #[serde(default = "default_counter_duration")]
    pub duration_ms: u64,
    #[serde(default = "default_counter_steps")]
    pub steps: u32,
}

fn default_counter_enabled() -> bool {
    true
}

fn default_counter_duration() -> u64 {
    2000
}

fn default_counter_steps() -> u32 {
    60
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            enabled: default_counter_enabled(),
            duration_ms: default_counter_duration(),
            steps: default_counter_steps(),
        }
    }
}

impl CounterConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Random source settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratorConfig {
    /// Fixed seed for reproducible output; entropy-seeded when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for VigilConfig {
    fn default() -> Self {
        Self {
            refresh: RefreshConfig::default(),
            counter: CounterConfig::default(),
            generator: GeneratorConfig::default(),
            cameras: default_cameras(),
            series: default_series_bands(),
        }
    }
}

impl VigilConfig {
    /// Reject settings the scheduler and generators cannot run with
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.refresh.interval_ms == 0 {
            return Err(ConfigurationError::InvalidSetting(
                "refresh.interval_ms must be greater than 0".to_string(),
            ));
        }
        if self.refresh.interval() > MAX_PERIOD {
            return Err(ConfigurationError::InvalidSetting(format!(
                "refresh.interval_ms must not exceed {}",
                MAX_PERIOD.as_millis()
            )));
        }
        if self.counter.steps == 0 {
            return Err(ConfigurationError::InvalidSetting(
                "counter.steps must be greater than 0".to_string(),
            ));
        }
        if self.counter.duration_ms == 0 {
            return Err(ConfigurationError::InvalidSetting(
                "counter.duration_ms must be greater than 0".to_string(),
            ));
        }
        if self.counter.duration() > MAX_PERIOD {
            return Err(ConfigurationError::InvalidSetting(format!(
                "counter.duration_ms must not exceed {}",
                MAX_PERIOD.as_millis()
            )));
        }
        if self.counter.duration() / self.counter.steps < MIN_STEP_INTERVAL {
            return Err(ConfigurationError::InvalidSetting(
                "counter.duration_ms / counter.steps must be at least 1ms".to_string(),
            ));
        }
        if self.series.is_empty() {
            return Err(ConfigurationError::InvalidSetting(
                "at least one [[series]] band is required".to_string(),
            ));
        }

        validate_cameras(&self.cameras)?;
        validate_bands(&self.series, &self.cameras)
    }
}

/// Load configuration from TOML file
pub fn load_config(path: &Path) -> Result<VigilConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: VigilConfig = toml::from_str(&contents).context("Failed to parse config TOML")?;
    Ok(config)
}

/// Load from `path` when it exists, otherwise start from defaults
pub fn load_or_default(path: &Path) -> Result<VigilConfig> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(VigilConfig::default())
    }
}
