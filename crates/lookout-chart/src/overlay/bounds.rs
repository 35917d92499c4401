use std::borrow::Cow;

use glam::Vec2;

use crate::color::{Color, theme};
use crate::context::RenderContext;
use crate::scene::{Layer, Mark, Scene, Stroke};
use crate::types::BoundPoint;

use super::Overlay;

/// Shaded band between upper and lower bounds.
///
/// Points are expected in timestamp order. Out-of-order input is logged and
/// drawn from a sorted copy.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundPlot {
    pub points: Vec<BoundPoint>,
    pub fill: Color,
}

impl BoundPlot {
    pub const NAME: &'static str = "bounds";

    pub fn new(points: Vec<BoundPoint>) -> Self {
        Self {
            points,
            fill: theme::BOUND_FILL,
        }
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Points with finite timestamp and bounds, ordered by timestamp.
    fn drawable_points(&self) -> Cow<'_, [BoundPoint]> {
        let finite = |p: &BoundPoint| p.timestamp.is_finite() && p.upper.is_finite() && p.lower.is_finite();
        let in_order = self
            .points
            .windows(2)
            .all(|w| w[0].timestamp <= w[1].timestamp);
        if in_order && self.points.iter().all(finite) {
            return Cow::Borrowed(&self.points);
        }

        let mut kept: Vec<BoundPoint> = self.points.iter().filter(|p| finite(p)).cloned().collect();
        if kept.len() < self.points.len() {
            tracing::debug!(skipped = self.points.len() - kept.len(), "skipping non-finite bound points");
        }
        if !kept.windows(2).all(|w| w[0].timestamp <= w[1].timestamp) {
            tracing::warn!(
                count = kept.len(),
                "bound points are not ordered by timestamp; sorting a copy"
            );
            kept.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));
        }
        Cow::Owned(kept)
    }
}

impl Overlay for BoundPlot {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn render(&self, ctx: &RenderContext, scene: &mut Scene) {
        let points = self.drawable_points();
        match points.as_ref() {
            [] => {}
            [only] => {
                let x = ctx.project_x(only.timestamp);
                scene.push(
                    Layer::Overlay(Self::NAME),
                    Mark::Line {
                        points: vec![
                            Vec2::new(x, ctx.project_y(only.upper)),
                            Vec2::new(x, ctx.project_y(only.lower)),
                        ],
                        stroke: Stroke::new(1.0, self.fill.with_alpha(1.0)),
                    },
                );
            }
            many => {
                let upper = many.iter().map(|p| ctx.project(p.timestamp, p.upper)).collect();
                let lower = many.iter().map(|p| ctx.project(p.timestamp, p.lower)).collect();
                scene.push(
                    Layer::Overlay(Self::NAME),
                    Mark::Ribbon {
                        upper,
                        lower,
                        fill: self.fill,
                    },
                );
            }
        }
    }
}
