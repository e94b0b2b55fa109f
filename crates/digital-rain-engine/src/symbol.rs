//! A single glyph cell.

use digital_rain_core::{RainConfig, Rgb, random_glyph};
use log::trace;
use rand::Rng;

use crate::surface::{GlyphDraw, Surface};

/// One glyph at a fixed grid position.
///
/// Colour and opacity are written by the owning [`crate::Stream`] every
/// frame; the symbol itself only changes its character.
#[derive(Debug, Clone)]
pub struct Symbol {
    column: u16,
    row: u16,
    glyph: char,
    /// Inherited from the owning stream.
    white: bool,
    /// Whether a green symbol may change its character.
    mutable: bool,
    color: Rgb,
    opacity: f32,
    next_change_ms: u64,
    glow: f32,
}

impl Symbol {
    /// Create a symbol with a random glyph and glow strength.
    pub fn new<R: Rng + ?Sized>(
        column: u16,
        row: u16,
        white: bool,
        mutable: bool,
        now_ms: u64,
        config: &RainConfig,
        rng: &mut R,
    ) -> Self {
        Self {
            column,
            row,
            glyph: random_glyph(rng),
            white,
            mutable,
            color: Rgb::RAIN_GREEN,
            opacity: 0.0,
            next_change_ms: now_ms + rng.random_range(config.char_interval(white)),
            glow: rng.random_range(config.glow_strength.clone()),
        }
    }

    /// Whether this symbol ever changes its character.
    pub fn can_change(&self) -> bool {
        self.white || self.mutable
    }

    /// Resample the character once its timer has expired.
    pub fn update_character<R: Rng + ?Sized>(
        &mut self,
        now_ms: u64,
        config: &RainConfig,
        rng: &mut R,
    ) {
        if !self.can_change() || now_ms < self.next_change_ms {
            return;
        }
        self.glyph = random_glyph(rng);
        self.next_change_ms = now_ms + rng.random_range(config.char_interval(self.white));
        trace!(
            "symbol ({}, {}) -> {} until {}",
            self.column, self.row, self.glyph, self.next_change_ms
        );
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    /// Draw the glyph with its current colour, opacity and glow.
    pub fn render(&self, surface: &mut dyn Surface) {
        surface.draw_glyph(&GlyphDraw {
            column: self.column,
            row: self.row,
            glyph: self.glyph,
            color: self.color,
            opacity: self.opacity,
            glow: self.glow,
        });
    }

    pub fn position(&self) -> (u16, u16) {
        (self.column, self.row)
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn glow(&self) -> f32 {
        self.glow
    }

    pub fn next_change_ms(&self) -> u64 {
        self.next_change_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[derive(Default)]
    struct Recorder(Vec<GlyphDraw>);

    impl Surface for Recorder {
        fn fade(&mut self, _color: Rgb, _alpha: u8) {}

        fn draw_glyph(&mut self, draw: &GlyphDraw) {
            self.0.push(*draw);
        }
    }

    #[test]
    fn test_new_symbol_ranges() {
        let config = RainConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let symbol = Symbol::new(3, 4, false, true, 1000, &config, &mut rng);
            assert_eq!(symbol.position(), (3, 4));
            assert_eq!(symbol.opacity(), 0.0);
            assert_eq!(symbol.color(), Rgb::RAIN_GREEN);
            assert!((5.0..15.0).contains(&symbol.glow()));
            assert!((1500..3000).contains(&symbol.next_change_ms()));

            let white = Symbol::new(3, 4, true, false, 1000, &config, &mut rng);
            assert!((1350..1750).contains(&white.next_change_ms()));
        }
    }

    #[test]
    fn test_immutable_symbol_never_changes() {
        let config = RainConfig::default();
        let mut rng = StdRng::seed_from_u64(2);
        let mut symbol = Symbol::new(0, 0, false, false, 0, &config, &mut rng);
        let glyph = symbol.glyph();
        let next = symbol.next_change_ms();
        for now in (0..100_000).step_by(50) {
            symbol.update_character(now, &config, &mut rng);
        }
        assert_eq!(symbol.glyph(), glyph);
        assert_eq!(symbol.next_change_ms(), next);
    }

    #[test]
    fn test_character_changes_when_due() {
        let config = RainConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut symbol = Symbol::new(0, 0, false, true, 0, &config, &mut rng);
        let due = symbol.next_change_ms();

        symbol.update_character(due - 1, &config, &mut rng);
        assert_eq!(symbol.next_change_ms(), due);

        symbol.update_character(due, &config, &mut rng);
        assert!((due + 500..due + 2000).contains(&symbol.next_change_ms()));
    }

    #[test]
    fn test_white_symbol_changes_even_if_not_mutable() {
        let config = RainConfig::default();
        let mut rng = StdRng::seed_from_u64(4);
        let mut symbol = Symbol::new(0, 0, true, false, 0, &config, &mut rng);
        assert!(symbol.can_change());
        let due = symbol.next_change_ms();
        symbol.update_character(due, &config, &mut rng);
        assert!((due + 350..due + 750).contains(&symbol.next_change_ms()));
    }

    #[test]
    fn test_render_uses_current_state() {
        let config = RainConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        let mut symbol = Symbol::new(2, 7, true, false, 0, &config, &mut rng);
        symbol.set_color(Rgb::WHITE);
        symbol.set_opacity(255.0);

        let mut surface = Recorder::default();
        symbol.render(&mut surface);

        assert_eq!(surface.0.len(), 1);
        let draw = surface.0[0];
        assert_eq!((draw.column, draw.row), (2, 7));
        assert_eq!(draw.glyph, symbol.glyph());
        assert_eq!(draw.color, Rgb::WHITE);
        assert_eq!(draw.opacity, 255.0);
        assert_eq!(draw.glow, symbol.glow());
    }
}
