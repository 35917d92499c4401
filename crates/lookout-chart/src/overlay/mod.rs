//! Plots layered on top of the chart core.
//!
//! Overlays never build scales of their own: they receive the chart's
//! [`RenderContext`] and project through it.

mod anomalies;
mod bounds;

pub use anomalies::AnomaliesPlot;
pub use bounds::BoundPlot;

use crate::context::RenderContext;
use crate::scene::Scene;

/// Something drawn over the base series with the chart's transforms.
pub trait Overlay {
    /// Layer name for marks produced by this overlay.
    fn name(&self) -> &'static str;

    fn render(&self, ctx: &RenderContext, scene: &mut Scene);
}
