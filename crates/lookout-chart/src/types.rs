//! Core chart types.

use crate::color::{Color, palette_color, theme};

/// A unique identifier for a data series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SeriesId(pub u32);

impl SeriesId {
    /// Create a series ID from a name using FNV-1a.
    ///
    /// The same name always produces the same ID.
    pub fn from_name(name: &str) -> Self {
        const FNV_OFFSET_BASIS: u32 = 2166136261;
        const FNV_PRIME: u32 = 16777619;

        let mut hash = FNV_OFFSET_BASIS;
        for byte in name.bytes() {
            hash ^= u32::from(byte);
            hash = hash.wrapping_mul(FNV_PRIME);
        }

        Self(hash)
    }

    pub fn raw(&self) -> u32 {
        self.0
    }
}

/// A point of a time series: `x` is an epoch timestamp in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeriesKind {
    #[default]
    Line,
    /// Line with the area down to the bottom of the plot filled.
    Area,
}

/// Visual style of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    pub kind: SeriesKind,
    pub stroke_width: f32,
    /// Opacity of the area fill, ignored for line series.
    pub fill_opacity: f32,
    pub dashed: bool,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            kind: SeriesKind::Line,
            stroke_width: 1.5,
            fill_opacity: 0.3,
            dashed: false,
        }
    }
}

/// A named time series.
///
/// Only enabled series take part in extent computation and rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub id: SeriesId,
    pub name: String,
    pub points: Vec<DataPoint>,
    pub enabled: bool,
    pub color: Color,
    pub style: SeriesStyle,
}

impl Series {
    /// Create an enabled line series colored from the default palette.
    pub fn new(name: impl Into<String>, points: Vec<DataPoint>) -> Self {
        let name = name.into();
        let id = SeriesId::from_name(&name);
        Self {
            id,
            color: palette_color(id.raw() as usize),
            name,
            points,
            enabled: true,
            style: SeriesStyle::default(),
        }
    }

    /// Create a series from `(x, y)` tuples.
    pub fn from_tuples(name: impl Into<String>, data: &[(f64, f64)]) -> Self {
        Self::new(name, data.iter().map(|&d| d.into()).collect())
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_kind(mut self, kind: SeriesKind) -> Self {
        self.style.kind = kind;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// A named, shaded interval on the x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotBand {
    pub name: String,
    pub start: f64,
    pub end: f64,
    pub color: Color,
}

impl PlotBand {
    pub fn new(name: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            color: theme::PLOT_BAND,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// A copy of this band with its label removed; the interval is kept.
    pub fn unlabeled(&self) -> Self {
        Self {
            name: String::new(),
            ..self.clone()
        }
    }

    pub fn has_label(&self) -> bool {
        !self.name.is_empty()
    }
}

/// Axis and annotation options for a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisOptions {
    pub show_x_axis: bool,
    pub show_y_axis: bool,
    pub plot_bands: Vec<PlotBand>,
    /// Target number of ticks per axis.
    pub tick_count: usize,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            show_x_axis: true,
            show_y_axis: true,
            plot_bands: Vec::new(),
            tick_count: 5,
        }
    }
}

impl AxisOptions {
    pub fn with_plot_bands(mut self, plot_bands: Vec<PlotBand>) -> Self {
        self.plot_bands = plot_bands;
        self
    }

    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Options for the compressed brush view: x axis only, bands without labels.
    pub fn for_brush(&self) -> Self {
        Self {
            show_x_axis: true,
            show_y_axis: false,
            plot_bands: self.plot_bands.iter().map(PlotBand::unlabeled).collect(),
            tick_count: self.tick_count,
        }
    }
}

/// A detected anomaly to mark on the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnomalyPoint {
    pub timestamp: f64,
    pub value: f64,
}

impl AnomalyPoint {
    pub fn new(timestamp: f64, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Evaluation output at one timestamp: the confidence band and optional values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundPoint {
    pub timestamp: f64,
    pub upper: f64,
    pub lower: f64,
    pub expected: Option<f64>,
    pub current: Option<f64>,
}

impl BoundPoint {
    pub fn new(timestamp: f64, upper: f64, lower: f64) -> Self {
        Self {
            timestamp,
            upper,
            lower,
            expected: None,
            current: None,
        }
    }

    pub fn with_expected(mut self, expected: f64) -> Self {
        self.expected = Some(expected);
        self
    }

    pub fn with_current(mut self, current: f64) -> Self {
        self.current = Some(current);
        self
    }
}
