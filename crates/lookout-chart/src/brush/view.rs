use glam::Vec2;
use lookout_core::{ChartConfig, Margin, Rect, Size};

use crate::color::theme;
use crate::context::RenderContext;
use crate::renderer::ChartCore;
use crate::scale::Domain;
use crate::scale_builder::{ScaleBuilder, YDomainMode};
use crate::scene::{Layer, Mark, Scene, Stroke};
use crate::types::{AxisOptions, Series};

use super::controller::{BrushController, BrushEvent, PointerEvent};

type DomainCallback = Box<dyn FnMut(Domain)>;

/// Compressed overview of every enabled series over the full x domain, with
/// a selection window driven by a [`BrushController`].
///
/// The overview has its own scales: x spans the full data extent regardless
/// of any zoom, y runs from zero to the (niced) maximum. It draws no y axis
/// and blanks plot band labels.
///
/// Committed gestures are reported through `on_brush_change` and
/// `on_brush_click` and are also returned from [`handle_pointer`](Self::handle_pointer).
pub struct ChartBrush {
    size: Size,
    margin: Margin,
    top: f32,
    controller: BrushController,
    on_brush_change: Option<DomainCallback>,
    on_brush_click: Option<DomainCallback>,
}

impl std::fmt::Debug for ChartBrush {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartBrush")
            .field("size", &self.size)
            .field("margin", &self.margin)
            .field("top", &self.top)
            .field("controller", &self.controller)
            .finish_non_exhaustive()
    }
}

impl ChartBrush {
    pub fn new(width: f32, config: &ChartConfig) -> Self {
        Self {
            size: Size::new(width, config.brush_height),
            margin: config.brush_margin,
            top: 0.0,
            controller: BrushController::default()
                .with_handle_size(config.handle_size)
                .with_click_tolerance(config.click_tolerance),
            on_brush_change: None,
            on_brush_click: None,
        }
    }

    pub fn on_brush_change(mut self, callback: impl FnMut(Domain) + 'static) -> Self {
        self.on_brush_change = Some(Box::new(callback));
        self
    }

    pub fn on_brush_click(mut self, callback: impl FnMut(Domain) + 'static) -> Self {
        self.on_brush_click = Some(Box::new(callback));
        self
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_width(&mut self, width: f32) {
        self.size.width = width;
    }

    /// Vertical offset of the brush within the drawing surface.
    pub fn set_top(&mut self, top: f32) {
        self.top = top;
    }

    pub fn controller(&self) -> &BrushController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut BrushController {
        &mut self.controller
    }

    /// The committed sub-selection, or the full domain.
    pub fn selection(&self) -> Domain {
        self.controller.selection()
    }

    /// Compute the brush scales and sync the controller's area and domain.
    pub fn layout(&mut self, series: &[Series]) -> RenderContext {
        let ctx = ScaleBuilder::new(self.size.width, self.size.height)
            .margin(self.margin)
            .top(self.top)
            .y_mode(YDomainMode::ZeroToMax)
            .nice_y(10)
            .build(series);
        self.controller
            .set_layout(ctx.plot_rect(), ctx.x_scale.domain());
        ctx
    }

    /// Draw the overview and the selection window.
    pub fn render(&mut self, series: &[Series], axis: &AxisOptions, scene: &mut Scene) {
        let ctx = self.layout(series);
        let brush_axis = axis.for_brush();
        ChartCore::new(&ctx, series, &brush_axis).render(scene, &[]);
        self.draw_selection(&ctx, scene);
    }

    fn draw_selection(&self, ctx: &RenderContext, scene: &mut Scene) {
        let Some((start, end)) = self.controller.display_span() else {
            return;
        };
        let plot = ctx.plot_rect();

        scene.push(
            Layer::Brush,
            Mark::Rect {
                rect: Rect::new(start, plot.y, end - start, plot.height),
                fill: theme::BRUSH_SELECTION,
                stroke: Some(Stroke::new(1.0, theme::BRUSH_STROKE)),
            },
        );

        let handle = self.controller.handle_size();
        for x in [start, end] {
            scene.push(
                Layer::Brush,
                Mark::Rect {
                    rect: Rect::from_pos_size(
                        Vec2::new(x - handle * 0.5, plot.y),
                        Size::new(handle, plot.height),
                    ),
                    fill: theme::BRUSH_STROKE.with_alpha(0.6),
                    stroke: None,
                },
            );
        }
    }

    /// Feed a pointer event; fires the callbacks when a gesture commits.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<BrushEvent> {
        let committed = self.controller.handle_event(event)?;
        self.dispatch(committed);
        Some(committed)
    }

    /// Commit the current state and fire the matching callback.
    pub fn commit(&mut self) -> BrushEvent {
        let committed = self.controller.commit();
        self.dispatch(committed);
        committed
    }

    fn dispatch(&mut self, event: BrushEvent) {
        match event {
            BrushEvent::Change(selection) => {
                if let Some(callback) = self.on_brush_change.as_mut() {
                    callback(selection);
                }
            }
            BrushEvent::Click(full) => {
                if let Some(callback) = self.on_brush_click.as_mut() {
                    callback(full);
                }
            }
        }
    }
}
