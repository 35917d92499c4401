//! The rendering context shared by the chart core and its overlays.

use glam::Vec2;
use lookout_core::{Margin, Rect, Size};

use crate::scale::{LinearScale, TimeScale};

/// Layout and scales for one chart.
///
/// Built once per render by [`ScaleBuilder`](crate::ScaleBuilder) and passed by
/// reference to every component drawing into the chart, so the base series
/// and all overlays use exactly the same transforms. Scales map into the
/// inner plot (origin at the plot's top-left); [`project`](Self::project)
/// adds the plot offset.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext {
    /// Outer size of the chart, margins included.
    pub outer: Size,
    pub margin: Margin,
    /// Vertical offset of the chart within the drawing surface.
    pub top: f32,
    pub x_scale: TimeScale,
    pub y_scale: LinearScale,
}

impl RenderContext {
    /// Inner plot width (never negative).
    pub fn x_max(&self) -> f32 {
        self.margin.inner_size(self.outer).width
    }

    /// Inner plot height (never negative).
    pub fn y_max(&self) -> f32 {
        self.margin.inner_size(self.outer).height
    }

    /// Absolute bounds of the inner plot.
    pub fn plot_rect(&self) -> Rect {
        Rect::new(0.0, self.top, self.outer.width, self.outer.height).inset(&self.margin)
    }

    /// Absolute bounds of the chart, margins included.
    pub fn outer_rect(&self) -> Rect {
        Rect::new(0.0, self.top, self.outer.width, self.outer.height)
    }

    pub fn origin(&self) -> Vec2 {
        self.plot_rect().position()
    }

    pub fn project_x(&self, x: f64) -> f32 {
        self.margin.left + self.x_scale.map(x)
    }

    pub fn project_y(&self, y: f64) -> f32 {
        self.top + self.margin.top + self.y_scale.map(y)
    }

    /// Data coordinates to absolute pixels.
    pub fn project(&self, x: f64, y: f64) -> Vec2 {
        Vec2::new(self.project_x(x), self.project_y(y))
    }

    /// Absolute pixel x back to a timestamp.
    pub fn invert_x(&self, pixel_x: f32) -> f64 {
        self.x_scale.invert(pixel_x - self.margin.left)
    }
}
