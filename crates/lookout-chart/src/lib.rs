//! Lookout Chart - time-series charting for anomaly detection views.
//!
//! This crate provides:
//! - Domain-to-pixel scales derived from the enabled series ([`ScaleBuilder`])
//! - A chart core drawing series, axes and plot bands ([`ChartCore`])
//! - Overlays sharing the chart's coordinate system ([`AnomaliesPlot`], [`BoundPlot`])
//! - A brush overview whose selection zooms the detail chart ([`ChartBrush`])
//! - A composed, zoomable chart ([`TimeSeriesChart`])
//! - egui painting (optional "egui-integration" feature)
//!
//! Rendering produces a backend-neutral [`Scene`] of marks in pixel space.
//!
//! # Example
//!
//! ```
//! use lookout_chart::*;
//! use lookout_core::ChartConfig;
//!
//! let series = vec![
//!     Series::from_tuples("current", &[(0.0, 3.0), (60_000.0, 5.0), (120_000.0, 4.0)]),
//! ];
//! let mut chart = TimeSeriesChart::new(640.0, 360.0, ChartConfig::default())
//!     .with_series(series)
//!     .with_overlay(AnomaliesPlot::new(vec![AnomalyPoint::new(60_000.0, 5.0)]));
//!
//! let scene = chart.render();
//! assert_eq!(scene.marks_in(Layer::Overlay(AnomaliesPlot::NAME)).count(), 1);
//! ```

mod brush;
mod color;
mod context;
pub mod overlay;
mod renderer;
pub mod scale;
mod scale_builder;
mod scene;
pub mod text;
pub mod time;
mod time_series;
mod types;

pub use brush::*;
pub use color::*;
pub use context::RenderContext;
pub use overlay::{AnomaliesPlot, BoundPlot, Overlay};
pub use renderer::ChartCore;
pub use scale::{Domain, LinearScale, TimeScale};
pub use scale_builder::*;
pub use scene::*;
pub use time::TimeTick;
pub use time_series::TimeSeriesChart;
pub use types::*;

#[cfg(feature = "egui-integration")]
mod egui_widget;
#[cfg(feature = "egui-integration")]
pub use egui_widget::*;
