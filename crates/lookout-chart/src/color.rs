//! Colors and the default series palette.

/// An RGBA color with `f32` components in the `0.0..=1.0` range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from 8-bit RGBA values (0–255 mapped to 0.0–1.0).
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create a color from a 24-bit RGB hex value (e.g. `0x1F77B4`).
    pub fn from_hex(hex: u32) -> Self {
        Self::from_rgba_u8(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            255,
        )
    }

    /// The same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Components as 8-bit values, unmultiplied.
    pub fn to_rgba8(self) -> [u8; 4] {
        let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }
}

/// Ten-color categorical palette used for series without an explicit color.
pub const SERIES_PALETTE: [u32; 10] = [
    0x1F77B4, 0xFF7F0E, 0x2CA02C, 0xD62728, 0x9467BD, 0x8C564B, 0xE377C2, 0x7F7F7F, 0xBCBD22,
    0x17BECF,
];

/// Palette color for the series at `index`, cycling when exhausted.
pub fn palette_color(index: usize) -> Color {
    Color::from_hex(SERIES_PALETTE[index % SERIES_PALETTE.len()])
}

/// Colors used by the overlay plots and the brush.
pub mod theme {
    use super::Color;

    pub const ANOMALY: Color = Color::rgb(0.84, 0.15, 0.16);
    pub const BOUND_FILL: Color = Color::rgba(0.12, 0.47, 0.71, 0.2);
    pub const PLOT_BAND: Color = Color::rgba(0.5, 0.5, 0.5, 0.15);
    pub const AXIS: Color = Color::rgb(0.4, 0.4, 0.4);
    pub const AXIS_LABEL: Color = Color::rgb(0.25, 0.25, 0.25);
    pub const BRUSH_SELECTION: Color = Color::rgba(0.0, 0.0, 0.0, 0.25);
    pub const BRUSH_STROKE: Color = Color::WHITE;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip_to_bytes() {
        assert_eq!(Color::from_hex(0x1F77B4).to_rgba8(), [0x1F, 0x77, 0xB4, 0xFF]);
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(palette_color(0), palette_color(10));
        assert_ne!(palette_color(0), palette_color(1));
    }
}
