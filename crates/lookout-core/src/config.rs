//! Configuration for the Lookout crates.
//!
//! Every field has a default, so a partial TOML document (or none at all)
//! yields a usable [`Config`].

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::geometry::Margin;
use crate::logging::DEFAULT_FILTER;

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub chart: ChartConfig,
    pub logging: LoggingConfig,
}

/// Chart layout and interaction settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Margins of the detail chart.
    pub margin: Margin,
    /// Margins of the brush overview.
    pub brush_margin: Margin,
    /// Outer height of the brush overview in pixels.
    pub brush_height: f32,
    /// Vertical space between the detail chart and the brush.
    pub brush_gap: f32,
    /// Width of the brush resize handles in pixels.
    pub handle_size: f32,
    /// Pointer travel (pixels) below which a brush gesture counts as a click.
    pub click_tolerance: f32,
    /// Target number of ticks per axis.
    pub tick_count: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            margin: Margin::new(20.0, 20.0, 30.0, 50.0),
            brush_margin: Margin::new(10.0, 20.0, 15.0, 50.0),
            brush_height: 80.0,
            brush_gap: 10.0,
            handle_size: 8.0,
            click_tolerance: 2.0,
            tick_count: 5,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading config");
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<()> {
        let chart = &self.chart;
        let non_negative = [
            ("chart.brush_height", chart.brush_height),
            ("chart.brush_gap", chart.brush_gap),
            ("chart.handle_size", chart.handle_size),
            ("chart.click_tolerance", chart.click_tolerance),
        ];
        for (field, value) in non_negative {
            if value < 0.0 || value.is_nan() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must not be negative, got {value}"),
                });
            }
        }
        if chart.tick_count == 0 {
            return Err(ConfigError::Invalid {
                field: "chart.tick_count",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
