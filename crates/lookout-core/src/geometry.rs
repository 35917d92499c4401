//! Pixel-space geometry shared by the chart crates.

use glam::Vec2;
use serde::Deserialize;

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Size { width, height }
    }

    /// Both dimensions clamped at zero.
    pub fn clamped(self) -> Self {
        Size {
            width: self.width.max(0.0),
            height: self.height.max(0.0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Margins around a plot area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margin {
    /// Create margins in CSS order (top, right, bottom, left).
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same margin on every side.
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub const ZERO: Margin = Margin::uniform(0.0);

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Size left for the plot once the margins are removed from `outer`.
    ///
    /// Never negative: margins larger than the outer size yield zero.
    pub fn inner_size(&self, outer: Size) -> Size {
        Size::new(
            outer.width - self.horizontal(),
            outer.height - self.vertical(),
        )
        .clamped()
    }
}

/// Rectangular bounds in pixels, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left)
    pub x: f32,
    /// Y position (top)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Size) -> Self {
        Self::new(pos.x, pos.y, size.width, size.height)
    }

    /// Build a rect from two corners given in any order.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Shrink the rect by per-side margins, clamping the size at zero.
    pub fn inset(&self, margin: &Margin) -> Self {
        let size = margin.inner_size(self.size());
        Self::new(
            self.x + margin.left,
            self.y + margin.top,
            size.width,
            size.height,
        )
    }

    /// Check if a point is inside the rect (edges included).
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn translate(&self, offset: Vec2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_size_clamps_at_zero() {
        let margin = Margin::new(10.0, 20.0, 15.0, 50.0);
        let inner = margin.inner_size(Size::new(40.0, 20.0));
        assert_eq!(inner, Size::new(0.0, 0.0));

        let inner = margin.inner_size(Size::new(170.0, 125.0));
        assert_eq!(inner, Size::new(100.0, 100.0));
    }

    #[test]
    fn test_rect_inset_and_contains() {
        let rect = Rect::new(0.0, 0.0, 200.0, 100.0).inset(&Margin::uniform(10.0));
        assert_eq!(rect, Rect::new(10.0, 10.0, 180.0, 80.0));
        assert!(rect.contains(Vec2::new(10.0, 10.0)));
        assert!(rect.contains(Vec2::new(190.0, 90.0)));
        assert!(!rect.contains(Vec2::new(5.0, 50.0)));
    }

    #[test]
    fn test_from_corners_normalizes() {
        let rect = Rect::from_corners(Vec2::new(30.0, 40.0), Vec2::new(10.0, 5.0));
        assert_eq!(rect, Rect::new(10.0, 5.0, 20.0, 35.0));
    }
}
