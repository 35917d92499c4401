//! Detail chart and brush composed into one zoomable time-series view.

use lookout_core::profiling::profile_function;
use lookout_core::{ChartConfig, Size};

use crate::brush::{BrushEvent, ChartBrush, PointerEvent};
use crate::context::RenderContext;
use crate::overlay::Overlay;
use crate::renderer::ChartCore;
use crate::scale::Domain;
use crate::scale_builder::ScaleBuilder;
use crate::scene::Scene;
use crate::types::{AxisOptions, PlotBand, Series, SeriesId};

type ZoomCallback = Box<dyn FnMut(Option<Domain>)>;

/// A time-series chart with overlays and an optional brush underneath.
///
/// Committed brush selections become the zoom window of the detail chart; a
/// brush click resets the zoom.
///
/// # Example
///
/// ```
/// use lookout_chart::{Series, TimeSeriesChart};
/// use lookout_core::ChartConfig;
///
/// let mut chart = TimeSeriesChart::new(600.0, 300.0, ChartConfig::default())
///     .with_series(vec![Series::from_tuples("current", &[(0.0, 1.0), (60_000.0, 4.0)])]);
///
/// let scene = chart.render();
/// assert!(!scene.is_empty());
/// ```
pub struct TimeSeriesChart {
    size: Size,
    config: ChartConfig,
    series: Vec<Series>,
    axis: AxisOptions,
    overlays: Vec<Box<dyn Overlay>>,
    brush: Option<ChartBrush>,
    zoom: Option<Domain>,
    on_zoom: Option<ZoomCallback>,
}

impl TimeSeriesChart {
    /// A chart with a brush, laid out with `config`.
    pub fn new(width: f32, height: f32, config: ChartConfig) -> Self {
        let axis = AxisOptions::default().with_tick_count(config.tick_count);
        Self {
            size: Size::new(width, height),
            brush: Some(ChartBrush::new(width, &config)),
            config,
            series: Vec::new(),
            axis,
            overlays: Vec::new(),
            zoom: None,
            on_zoom: None,
        }
    }

    pub fn with_series(mut self, series: Vec<Series>) -> Self {
        self.series = series;
        self
    }

    pub fn with_plot_bands(mut self, plot_bands: Vec<PlotBand>) -> Self {
        self.axis.plot_bands = plot_bands;
        self
    }

    pub fn with_axis(mut self, axis: AxisOptions) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_overlay(mut self, overlay: impl Overlay + 'static) -> Self {
        self.overlays.push(Box::new(overlay));
        self
    }

    /// Show or hide the brush.
    pub fn with_brush(mut self, show: bool) -> Self {
        self.brush = show.then(|| ChartBrush::new(self.size.width, &self.config));
        self
    }

    /// Called whenever the zoom window changes.
    pub fn on_zoom(mut self, callback: impl FnMut(Option<Domain>) + 'static) -> Self {
        self.on_zoom = Some(Box::new(callback));
        self
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.size = Size::new(width, height);
        if let Some(brush) = self.brush.as_mut() {
            brush.set_width(width);
        }
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn set_series(&mut self, series: Vec<Series>) {
        self.series = series;
    }

    pub fn axis(&self) -> &AxisOptions {
        &self.axis
    }

    pub fn brush(&self) -> Option<&ChartBrush> {
        self.brush.as_ref()
    }

    pub fn brush_mut(&mut self) -> Option<&mut ChartBrush> {
        self.brush.as_mut()
    }

    /// The visible x window, `None` when showing the full extent.
    pub fn zoom(&self) -> Option<Domain> {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: Option<Domain>) {
        let zoom = zoom.map(Domain::ordered);
        if zoom == self.zoom {
            return;
        }
        self.zoom = zoom;
        match (zoom, self.brush.as_mut()) {
            (Some(window), Some(brush)) => brush.controller_mut().select(window),
            (None, Some(brush)) => brush.controller_mut().clear(),
            _ => {}
        }
        tracing::debug!(?zoom, "zoom changed");
        if let Some(callback) = self.on_zoom.as_mut() {
            callback(zoom);
        }
    }

    pub fn reset_zoom(&mut self) {
        self.set_zoom(None);
    }

    /// Flip a series' `enabled` flag. Returns the new state, or `None` if no
    /// series has that id.
    pub fn toggle_series(&mut self, id: SeriesId) -> Option<bool> {
        let series = self.series.iter_mut().find(|s| s.id == id)?;
        series.enabled = !series.enabled;
        tracing::debug!(series = %series.name, enabled = series.enabled, "toggled series");
        Some(series.enabled)
    }

    /// Height of the detail chart: what is left after the brush and gap.
    pub fn detail_height(&self) -> f32 {
        match self.brush {
            Some(_) => (self.size.height - self.config.brush_height - self.config.brush_gap).max(0.0),
            None => self.size.height.max(0.0),
        }
    }

    /// Scales of the detail chart for the current series and zoom.
    pub fn detail_context(&self) -> RenderContext {
        ScaleBuilder::new(self.size.width, self.detail_height())
            .margin(self.config.margin)
            .x_domain(self.zoom)
            .nice_y(self.axis.tick_count.max(1))
            .build(&self.series)
    }

    /// Lay out and draw the detail chart, its overlays and the brush.
    pub fn render(&mut self) -> Scene {
        profile_function!();

        self.sync_brush();

        let mut scene = Scene::new();
        let ctx = self.detail_context();
        let overlays: Vec<&dyn Overlay> = self.overlays.iter().map(|o| o.as_ref()).collect();
        ChartCore::new(&ctx, &self.series, &self.axis).render(&mut scene, &overlays);

        if let Some(brush) = self.brush.as_mut() {
            brush.render(&self.series, &self.axis, &mut scene);
        }
        scene
    }

    /// Route pointer input to the brush and apply committed selections.
    ///
    /// The brush is laid out for the current size and series first, so input
    /// may arrive before the first render or right after a resize.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<BrushEvent> {
        self.sync_brush();
        let committed = self.brush.as_mut()?.handle_pointer(event)?;
        self.apply(committed);
        Some(committed)
    }

    /// Lay out the brush and reconcile the zoom window with its full domain.
    ///
    /// A window that only partly overlaps the data is clamped and one that no
    /// longer overlaps it is dropped; both report through `on_zoom`.
    fn sync_brush(&mut self) {
        let top = self.detail_height() + self.config.brush_gap;
        let Some(brush) = self.brush.as_mut() else {
            return;
        };
        brush.set_top(top);
        brush.layout(&self.series);

        let full = brush.controller().full_domain();
        let zoom = self.zoom.and_then(|window| window.intersect(&full));
        if brush.controller().committed() != zoom {
            brush.controller_mut().set_committed(zoom);
        }
        self.set_zoom(zoom);
    }

    fn apply(&mut self, event: BrushEvent) {
        match event {
            BrushEvent::Change(selection) => self.set_zoom(Some(selection)),
            BrushEvent::Click(_) => self.reset_zoom(),
        }
    }
}
