//! Configuration file support for the color wheel.
//!
//! Settings are stored as JSON so a host can persist and restore them
//! alongside its own preferences.

use serde::{Deserialize, Serialize};

use crate::error::{PickerError, Result};

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

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
}

/// How a view turns a point into a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SampleStrategy {
    /// Recompute hue and saturation from angle and distance
    #[default]
    Geometric,
    /// Read the pixel back from the current wheel bitmap
    Bitmap,
}

/// Color wheel configuration that can be exported and imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Device pixels per logical point
    #[serde(default = "default_pixel_scale")]
    pub pixel_scale: f32,

    /// Width of the border band that never reports a color
    #[serde(default)]
    pub border_width: f32,

    /// Point sampling strategy
    #[serde(default)]
    pub sample_strategy: SampleStrategy,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_pixel_scale() -> f32 {
    1.0
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            pixel_scale: default_pixel_scale(),
            border_width: 0.0,
            sample_strategy: SampleStrategy::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl PickerConfig {
    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(PickerError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Builder: set the pixel scale.
    pub fn with_pixel_scale(mut self, pixel_scale: f32) -> Self {
        self.pixel_scale = pixel_scale;
        self
    }

    /// Builder: set the border width.
    pub fn with_border_width(mut self, border_width: f32) -> Self {
        self.border_width = border_width;
        self
    }

    /// Builder: set the sampling strategy.
    pub fn with_sample_strategy(mut self, strategy: SampleStrategy) -> Self {
        self.sample_strategy = strategy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PickerConfig::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.pixel_scale, 1.0);
        assert_eq!(config.border_width, 0.0);
        assert_eq!(config.sample_strategy, SampleStrategy::Geometric);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = PickerConfig::default()
            .with_pixel_scale(3.0)
            .with_border_width(12.0)
            .with_sample_strategy(SampleStrategy::Bitmap);

        let json = config.to_json().unwrap();
        assert!(json.contains("\"sample_strategy\": \"bitmap\""));

        let parsed = PickerConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed = PickerConfig::from_json(r#"{ "version": 1 }"#).unwrap();
        assert_eq!(parsed, PickerConfig::default());
    }

    #[test]
    fn test_newer_version_rejected() {
        let err = PickerConfig::from_json(r#"{ "version": 99 }"#).unwrap_err();
        assert!(matches!(
            err,
            PickerError::VersionTooNew {
                file_version: 99,
                supported_version: CONFIG_VERSION
            }
        ));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = PickerConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, PickerError::Json(_)));
    }

    #[test]
    fn test_log_level_parsing() {
        let parsed = PickerConfig::from_json(r#"{ "version": 1, "log_level": "trace" }"#).unwrap();
        assert_eq!(parsed.log_level, LogLevel::Trace);
        assert_eq!(parsed.log_level.to_level_filter(), log::LevelFilter::Trace);
    }
}
