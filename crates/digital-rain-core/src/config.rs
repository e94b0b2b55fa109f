//! Fixed animation constants.

use std::ops::Range;
use std::time::Duration;

use crate::color::Rgb;

/// Every tunable of the rain effect.
///
/// Only [`RainConfig::default`] is used at runtime; the values bound the
/// spatial and temporal scale of the animation and are not meant to change.
#[derive(Debug, Clone, PartialEq)]
pub struct RainConfig {
    /// Number of streams, one per grid column.
    pub max_streams: usize,
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Canvas height in pixels.
    pub canvas_height: u32,
    /// Size of one glyph cell in pixels.
    pub cell_size: u32,
    /// Symbols per stream.
    pub stream_length: usize,
    /// Trail length range, sampled on every wave reset.
    pub trail_length: Range<usize>,
    /// Chance that a stream leads with a white symbol.
    pub white_probability: f64,
    /// Chance that a symbol in a green stream changes its character.
    pub mutable_probability: f64,
    /// Character change interval for symbols in white-flagged streams.
    pub white_char_interval_ms: Range<u64>,
    /// Character change interval for every other mutable symbol.
    pub char_interval_ms: Range<u64>,
    /// Wave step interval for white-flagged streams.
    pub white_tick_interval_ms: Range<u64>,
    /// Wave step interval for green streams.
    pub tick_interval_ms: Range<u64>,
    /// Pause between two waves.
    pub reset_delay_ms: Range<u64>,
    /// Pause before the first wave, staggering the columns at startup.
    pub initial_reset_delay_ms: Range<u64>,
    /// Per-symbol glow strength.
    pub glow_strength: Range<f32>,
    /// Colour painted over the canvas before every frame.
    pub background: Rgb,
    /// Opacity of that background fill; below 255 leaves fading trails.
    pub background_alpha: u8,
    /// Target frames per second.
    pub frame_rate: u32,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            max_streams: 20,
            canvas_width: 400,
            canvas_height: 400,
            cell_size: 20,
            stream_length: 25,
            trail_length: 17..23,
            white_probability: 0.33,
            mutable_probability: 0.5,
            white_char_interval_ms: 350..750,
            char_interval_ms: 500..2000,
            white_tick_interval_ms: 40..50,
            tick_interval_ms: 45..55,
            reset_delay_ms: 1000..5000,
            initial_reset_delay_ms: 0..4000,
            glow_strength: 5.0..15.0,
            background: Rgb::BLACK,
            background_alpha: 150,
            frame_rate: 20,
        }
    }
}

impl RainConfig {
    /// Number of glyph columns visible on the canvas.
    pub fn grid_columns(&self) -> u16 {
        (self.canvas_width / self.cell_size) as u16
    }

    /// Number of glyph rows visible on the canvas.
    pub fn grid_rows(&self) -> u16 {
        (self.canvas_height / self.cell_size) as u16
    }

    /// Time budget of a single frame.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.frame_rate.max(1)))
    }

    /// Character change interval range for a symbol.
    pub fn char_interval(&self, white: bool) -> Range<u64> {
        if white {
            self.white_char_interval_ms.clone()
        } else {
            self.char_interval_ms.clone()
        }
    }

    /// Wave step interval range for a stream.
    pub fn tick_interval(&self, white: bool) -> Range<u64> {
        if white {
            self.white_tick_interval_ms.clone()
        } else {
            self.tick_interval_ms.clone()
        }
    }
}
