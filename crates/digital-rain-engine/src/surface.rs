//! The drawing surface the rain renders onto.

use digital_rain_core::Rgb;

/// One glyph to draw at a grid position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphDraw {
    pub column: u16,
    pub row: u16,
    pub glyph: char,
    pub color: Rgb,
    /// 0.0 (invisible) to 255.0 (opaque).
    pub opacity: f32,
    pub glow: f32,
}

/// Rendering primitives supplied by the host.
pub trait Surface {
    /// Paint `color` over the whole surface with partial opacity.
    fn fade(&mut self, color: Rgb, alpha: u8);

    /// Draw a single glyph.
    fn draw_glyph(&mut self, draw: &GlyphDraw);
}
