//! Colour utility functions for the rain.

use ratatui::style::Color;

/// An opaque 8-bit RGB colour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Trail colour of every visible symbol except a white head.
    pub const RAIN_GREEN: Rgb = Rgb::new(0, 255, 65);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// Re-map a number from one range to another.
///
/// Values outside the input range extrapolate. A degenerate input range
/// yields `out_start`.
pub fn map_range(value: f32, in_start: f32, in_end: f32, out_start: f32, out_end: f32) -> f32 {
    let span = in_end - in_start;
    if span == 0.0 {
        return out_start;
    }
    let t = (value - in_start) / span;
    out_start + (out_end - out_start) * t
}

/// Composite `src` over `dst` with `alpha` in 0.0-255.0.
pub fn blend(src: Rgb, alpha: f32, dst: Rgb) -> Rgb {
    let a = (alpha / 255.0).clamp(0.0, 1.0);
    let mix = |s: u8, d: u8| (s as f32 * a + d as f32 * (1.0 - a)).round() as u8;
    Rgb::new(mix(src.r, dst.r), mix(src.g, dst.g), mix(src.b, dst.b))
}
