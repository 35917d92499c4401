use crate::color::{Color, theme};
use crate::context::RenderContext;
use crate::scene::{Layer, Mark, Scene, Stroke};
use crate::types::AnomalyPoint;

use super::Overlay;

/// Circle markers at detected anomalies.
#[derive(Debug, Clone, PartialEq)]
pub struct AnomaliesPlot {
    pub points: Vec<AnomalyPoint>,
    pub radius: f32,
    pub color: Color,
}

impl AnomaliesPlot {
    pub const NAME: &'static str = "anomalies";

    pub fn new(points: Vec<AnomalyPoint>) -> Self {
        Self {
            points,
            radius: 4.0,
            color: theme::ANOMALY,
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Overlay for AnomaliesPlot {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn render(&self, ctx: &RenderContext, scene: &mut Scene) {
        for point in &self.points {
            if !point.timestamp.is_finite() || !point.value.is_finite() {
                continue;
            }
            scene.push(
                Layer::Overlay(Self::NAME),
                Mark::Circle {
                    center: ctx.project(point.timestamp, point.value),
                    radius: self.radius,
                    fill: self.color,
                    stroke: Some(Stroke::new(1.0, Color::WHITE)),
                },
            );
        }
    }
}
