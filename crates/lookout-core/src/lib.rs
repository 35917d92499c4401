//! Lookout Core
//!
//! Shared building blocks for the Lookout crates: logging setup, configuration,
//! pixel-space geometry, vector math and profiling hooks.

pub mod config;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;

pub use config::{ChartConfig, Config, ConfigError, LoggingConfig};
pub use geometry::{Margin, Rect, Size};
