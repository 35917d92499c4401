//! Lookout - anomaly charting and wizard flows
//!
//! Lookout bundles the pieces of an anomaly-detection front end that carry
//! real logic:
//!
//! - **Charting**: scales, series, anomaly and bound overlays, and a brush
//!   that zooms the detail chart ([`chart`])
//! - **Wizards**: the datasource wizard and alert-type selection ([`wizard`])
//! - **Core**: configuration, logging and profiling ([`core`])
//!
//! # Quick Start
//!
//! ```
//! use lookout::prelude::*;
//!
//! let config = Config::from_toml_str("[chart]\nbrush_height = 60.0")?;
//! let mut chart = lookout::time_series_chart(640.0, 360.0, &config)
//!     .with_series(vec![Series::from_tuples("current", &[(0.0, 1.0), (60_000.0, 3.0)])]);
//!
//! let scene = chart.render();
//! assert!(!scene.is_empty());
//! # Ok::<(), lookout::core::ConfigError>(())
//! ```

pub use lookout_chart as chart;
pub use lookout_core as core;
pub use lookout_wizard as wizard;

pub use lookout_core::{ChartConfig, Config, ConfigError};

use lookout_chart::TimeSeriesChart;

/// Install logging from `config`.
///
/// `RUST_LOG` takes precedence over the configured filter. Calling this more
/// than once keeps the first subscriber.
pub fn init(config: &Config) {
    lookout_core::logging::init_from_config(&config.logging);
    tracing::debug!(filter = %config.logging.filter, "lookout initialized");
}

/// A time-series chart laid out with the chart section of `config`.
pub fn time_series_chart(width: f32, height: f32, config: &Config) -> TimeSeriesChart {
    TimeSeriesChart::new(width, height, config.chart.clone())
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use lookout_core::math::Vec2;
    pub use lookout_core::{ChartConfig, Config, Margin, Rect, Size};

    pub use lookout_chart::{
        AnomaliesPlot, AnomalyPoint, AxisOptions, BoundPlot, BoundPoint, BrushEvent, ChartBrush,
        Domain, Layer, Mark, Overlay, PlotBand, PointerEvent, ScaleBuilder, Scene, Series,
        SeriesId, SeriesKind, TimeSeriesChart,
    };

    pub use lookout_wizard::{
        AlertTypeSelection, Datasource, DatasourceWizard, Transition, Wizard, WizardView,
    };

    #[cfg(feature = "egui-integration")]
    pub use lookout_chart::{TimeSeriesChartWidget, paint_scene};
}
