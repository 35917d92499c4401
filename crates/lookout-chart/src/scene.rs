//! Backend-neutral drawing output.
//!
//! Renderers append [`Mark`]s in absolute pixel coordinates, each tagged with
//! the [`Layer`] that produced it. A backend (see the egui integration) then
//! paints the marks in order.

use glam::Vec2;
use lookout_core::Rect;

use crate::color::Color;
use crate::types::SeriesId;

/// Stroke settings for lines and outlines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
    pub dashed: bool,
}

impl Stroke {
    pub fn new(width: f32, color: Color) -> Self {
        Self {
            width,
            color,
            dashed: false,
        }
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }
}

/// Where a text mark is anchored relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Horizontally centered, hanging below the position.
    CenterTop,
    /// Right-aligned, vertically centered.
    RightCenter,
    /// Left-aligned, hanging below the position.
    LeftTop,
}

/// A primitive visual mark.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    /// An open polyline.
    Line { points: Vec<Vec2>, stroke: Stroke },
    /// A filled band between an upper and a lower edge sharing x positions.
    Ribbon {
        upper: Vec<Vec2>,
        lower: Vec<Vec2>,
        fill: Color,
    },
    Rect {
        rect: Rect,
        fill: Color,
        stroke: Option<Stroke>,
    },
    Circle {
        center: Vec2,
        radius: f32,
        fill: Color,
        stroke: Option<Stroke>,
    },
    Text {
        position: Vec2,
        text: String,
        anchor: TextAnchor,
        size: f32,
        color: Color,
    },
}

/// What produced a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    PlotBand,
    Series(SeriesId),
    Overlay(&'static str),
    Axis,
    Brush,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneItem {
    pub layer: Layer,
    pub mark: Mark,
}

/// An ordered list of marks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    items: Vec<SceneItem>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, layer: Layer, mark: Mark) {
        self.items.push(SceneItem { layer, mark });
    }

    pub fn items(&self) -> &[SceneItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Marks produced by `layer`, in drawing order.
    pub fn marks_in(&self, layer: Layer) -> impl Iterator<Item = &Mark> {
        self.items
            .iter()
            .filter(move |item| item.layer == layer)
            .map(|item| &item.mark)
    }

    /// All text marks, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match &item.mark {
            Mark::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Append every item of `other`.
    pub fn extend(&mut self, other: Scene) {
        self.items.extend(other.items);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
