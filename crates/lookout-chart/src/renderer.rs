//! Chart core: draws plot bands, series and axes into a [`Scene`].

use glam::Vec2;
use lookout_core::Rect;
use lookout_core::profiling::profile_function;

use crate::color::theme;
use crate::context::RenderContext;
use crate::overlay::Overlay;
use crate::scene::{Layer, Mark, Scene, Stroke, TextAnchor};
use crate::text::format_tick_value;
use crate::types::{AxisOptions, PlotBand, Series, SeriesKind};

const TICK_LENGTH: f32 = 5.0;
const LABEL_SIZE: f32 = 11.0;
const LABEL_GAP: f32 = 3.0;

/// Renders series and axes over a shared [`RenderContext`].
///
/// The context is computed once per frame by [`ScaleBuilder`](crate::ScaleBuilder)
/// and handed to every overlay so they project with the same transforms.
pub struct ChartCore<'a> {
    ctx: &'a RenderContext,
    series: &'a [Series],
    axis: &'a AxisOptions,
}

impl<'a> ChartCore<'a> {
    pub fn new(ctx: &'a RenderContext, series: &'a [Series], axis: &'a AxisOptions) -> Self {
        Self { ctx, series, axis }
    }

    pub fn context(&self) -> &RenderContext {
        self.ctx
    }

    /// Draw plot bands, enabled series, the given overlays, then axes.
    pub fn render(&self, scene: &mut Scene, overlays: &[&dyn Overlay]) {
        profile_function!();

        for band in &self.axis.plot_bands {
            self.draw_plot_band(scene, band);
        }

        for series in self.series.iter().filter(|s| s.enabled) {
            self.draw_series(scene, series);
        }

        for overlay in overlays {
            overlay.render(self.ctx, scene);
        }

        if self.axis.show_x_axis {
            self.draw_x_axis(scene);
        }
        if self.axis.show_y_axis {
            self.draw_y_axis(scene);
        }
    }

    fn draw_plot_band(&self, scene: &mut Scene, band: &PlotBand) {
        let plot = self.ctx.plot_rect();
        let start = self.ctx.project_x(band.start).clamp(plot.x, plot.right());
        let end = self.ctx.project_x(band.end).clamp(plot.x, plot.right());
        let (left, right) = if start <= end { (start, end) } else { (end, start) };

        scene.push(
            Layer::PlotBand,
            Mark::Rect {
                rect: Rect::new(left, plot.y, right - left, plot.height),
                fill: band.color,
                stroke: None,
            },
        );

        if band.has_label() {
            scene.push(
                Layer::PlotBand,
                Mark::Text {
                    position: Vec2::new((left + right) * 0.5, plot.y + LABEL_GAP),
                    text: band.name.clone(),
                    anchor: TextAnchor::CenterTop,
                    size: LABEL_SIZE,
                    color: theme::AXIS_LABEL,
                },
            );
        }
    }

    fn draw_series(&self, scene: &mut Scene, series: &Series) {
        if series.points.is_empty() {
            return;
        }

        let points: Vec<Vec2> = series
            .points
            .iter()
            .filter(|p| p.x.is_finite() && p.y.is_finite())
            .map(|p| self.ctx.project(p.x, p.y))
            .collect();

        if series.style.kind == SeriesKind::Area {
            let baseline = self.ctx.plot_rect().bottom();
            let lower = points.iter().map(|p| Vec2::new(p.x, baseline)).collect();
            scene.push(
                Layer::Series(series.id),
                Mark::Ribbon {
                    upper: points.clone(),
                    lower,
                    fill: series.color.with_alpha(series.style.fill_opacity),
                },
            );
        }

        let mut stroke = Stroke::new(series.style.stroke_width, series.color);
        if series.style.dashed {
            stroke = stroke.dashed();
        }
        scene.push(Layer::Series(series.id), Mark::Line { points, stroke });
    }

    fn draw_x_axis(&self, scene: &mut Scene) {
        let plot = self.ctx.plot_rect();
        let stroke = Stroke::new(1.0, theme::AXIS);
        let y = plot.bottom();

        scene.push(
            Layer::Axis,
            Mark::Line {
                points: vec![Vec2::new(plot.x, y), Vec2::new(plot.right(), y)],
                stroke,
            },
        );

        for tick in self.ctx.x_scale.ticks(self.axis.tick_count) {
            let x = self.ctx.project_x(tick.timestamp);
            scene.push(
                Layer::Axis,
                Mark::Line {
                    points: vec![Vec2::new(x, y), Vec2::new(x, y + TICK_LENGTH)],
                    stroke,
                },
            );
            scene.push(
                Layer::Axis,
                Mark::Text {
                    position: Vec2::new(x, y + TICK_LENGTH + LABEL_GAP),
                    text: tick.label,
                    anchor: TextAnchor::CenterTop,
                    size: LABEL_SIZE,
                    color: theme::AXIS_LABEL,
                },
            );
        }
    }

    fn draw_y_axis(&self, scene: &mut Scene) {
        let plot = self.ctx.plot_rect();
        let stroke = Stroke::new(1.0, theme::AXIS);
        let x = plot.x;

        scene.push(
            Layer::Axis,
            Mark::Line {
                points: vec![Vec2::new(x, plot.y), Vec2::new(x, plot.bottom())],
                stroke,
            },
        );

        for value in self.ctx.y_scale.ticks(self.axis.tick_count) {
            let y = self.ctx.project_y(value);
            scene.push(
                Layer::Axis,
                Mark::Line {
                    points: vec![Vec2::new(x - TICK_LENGTH, y), Vec2::new(x, y)],
                    stroke,
                },
            );
            scene.push(
                Layer::Axis,
                Mark::Text {
                    position: Vec2::new(x - TICK_LENGTH - LABEL_GAP, y),
                    text: format_tick_value(value),
                    anchor: TextAnchor::RightCenter,
                    size: LABEL_SIZE,
                    color: theme::AXIS_LABEL,
                },
            );
        }
    }
}
