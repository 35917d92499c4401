//! egui integration: paints a [`Scene`] and drives the brush from egui input.
//!
//! # Example
//!
//! ```ignore
//! use lookout_chart::{TimeSeriesChart, TimeSeriesChartWidget};
//!
//! let mut chart = TimeSeriesChart::new(600.0, 320.0, config).with_series(series);
//!
//! ui.add(TimeSeriesChartWidget::new(&mut chart));
//! ```

use egui::{Align2, Color32, FontId, Pos2, Response, Sense, Shape, Ui, Widget};

use crate::brush::PointerEvent;
use crate::color::Color;
use crate::scene::{Mark, Scene, Stroke, TextAnchor};
use crate::time_series::TimeSeriesChart;

const DASH_LENGTH: f32 = 4.0;
const GAP_LENGTH: f32 = 3.0;

fn to_color32(color: Color) -> Color32 {
    let [r, g, b, a] = color.to_rgba8();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

fn to_stroke(stroke: &Stroke) -> egui::Stroke {
    egui::Stroke::new(stroke.width, to_color32(stroke.color))
}

fn to_align(anchor: TextAnchor) -> Align2 {
    match anchor {
        TextAnchor::CenterTop => Align2::CENTER_TOP,
        TextAnchor::RightCenter => Align2::RIGHT_CENTER,
        TextAnchor::LeftTop => Align2::LEFT_TOP,
    }
}

/// Paint every mark of `scene`, translated by `offset` (the widget's top-left).
pub fn paint_scene(painter: &egui::Painter, scene: &Scene, offset: egui::Vec2) {
    let pos = |p: glam::Vec2| Pos2::new(p.x, p.y) + offset;

    for item in scene.items() {
        match &item.mark {
            Mark::Line { points, stroke } => {
                let points: Vec<Pos2> = points.iter().copied().map(pos).collect();
                if points.len() < 2 {
                    continue;
                }
                if stroke.dashed {
                    painter.extend(Shape::dashed_line(
                        &points,
                        to_stroke(stroke),
                        DASH_LENGTH,
                        GAP_LENGTH,
                    ));
                } else {
                    painter.add(Shape::line(points, to_stroke(stroke)));
                }
            }
            Mark::Ribbon { upper, lower, fill } => {
                // Each segment is a convex quad even when the band as a whole is not.
                let fill = to_color32(*fill);
                for (u, l) in upper.windows(2).zip(lower.windows(2)) {
                    painter.add(Shape::convex_polygon(
                        vec![pos(u[0]), pos(u[1]), pos(l[1]), pos(l[0])],
                        fill,
                        egui::Stroke::NONE,
                    ));
                }
            }
            Mark::Rect { rect, fill, stroke } => {
                let rect = egui::Rect::from_min_size(
                    pos(rect.position()),
                    egui::vec2(rect.width, rect.height),
                );
                painter.rect(
                    rect,
                    0.0,
                    to_color32(*fill),
                    stroke.as_ref().map_or(egui::Stroke::NONE, to_stroke),
                    egui::StrokeKind::Inside,
                );
            }
            Mark::Circle {
                center,
                radius,
                fill,
                stroke,
            } => {
                painter.circle(
                    pos(*center),
                    *radius,
                    to_color32(*fill),
                    stroke.as_ref().map_or(egui::Stroke::NONE, to_stroke),
                );
            }
            Mark::Text {
                position,
                text,
                anchor,
                size,
                color,
            } => {
                painter.text(
                    pos(*position),
                    to_align(*anchor),
                    text,
                    FontId::proportional(*size),
                    to_color32(*color),
                );
            }
        }
    }
}

/// An egui widget showing a [`TimeSeriesChart`] with an interactive brush.
///
/// The chart is resized to the allocated rect every frame. Drags over the
/// brush zoom the detail chart; a click on the brush resets the zoom.
pub struct TimeSeriesChartWidget<'a> {
    chart: &'a mut TimeSeriesChart,
    min_size: egui::Vec2,
}

impl<'a> TimeSeriesChartWidget<'a> {
    pub fn new(chart: &'a mut TimeSeriesChart) -> Self {
        Self {
            chart,
            min_size: egui::Vec2::new(300.0, 200.0),
        }
    }

    /// Set the minimum size of the widget.
    pub fn min_size(mut self, size: egui::Vec2) -> Self {
        self.min_size = size;
        self
    }

    fn handle_input(&mut self, ui: &Ui, response: &Response, rect: egui::Rect) {
        let to_local = |p: Pos2| glam::Vec2::new(p.x - rect.min.x, p.y - rect.min.y);
        let (press_origin, latest) = ui.input(|i| (i.pointer.press_origin(), i.pointer.latest_pos()));

        if response.clicked() {
            if let Some(p) = latest {
                self.chart.handle_pointer(PointerEvent::Down(to_local(p)));
                self.chart.handle_pointer(PointerEvent::Up(to_local(p)));
            }
            return;
        }

        if response.drag_started() {
            if let Some(p) = press_origin.or(latest) {
                self.chart.handle_pointer(PointerEvent::Down(to_local(p)));
            }
        }
        if response.dragged() {
            if let Some(p) = latest {
                self.chart.handle_pointer(PointerEvent::Move(to_local(p)));
            }
        }
        if response.drag_stopped() {
            match latest {
                Some(p) => self.chart.handle_pointer(PointerEvent::Up(to_local(p))),
                None => self.chart.handle_pointer(PointerEvent::Cancel),
            };
        }
    }
}

impl<'a> Widget for TimeSeriesChartWidget<'a> {
    fn ui(mut self, ui: &mut Ui) -> Response {
        let desired_size = ui.available_size().max(self.min_size);
        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::click_and_drag());

        if !ui.is_rect_visible(rect) {
            return response;
        }

        self.chart.set_size(rect.width(), rect.height());
        self.handle_input(ui, &response, rect);

        let scene = self.chart.render();
        paint_scene(&ui.painter_at(rect), &scene, rect.min.to_vec2());

        response
    }
}
