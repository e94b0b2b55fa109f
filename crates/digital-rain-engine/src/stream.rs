//! A vertical lane of symbols and the brightness wave that sweeps it.

use digital_rain_core::{RainConfig, Rgb, map_range};
use log::debug;
use rand::Rng;

use crate::surface::Surface;
use crate::symbol::Symbol;

/// Where the wave is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavePhase {
    /// The peak is travelling down the stream.
    Advancing,
    /// The peak reached its terminal index and waits out the reset delay.
    Paused { since_ms: u64 },
}

/// Colour and opacity of one symbol for the current wave position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shade {
    pub color: Rgb,
    pub opacity: f32,
}

/// Timer-driven state of a stream's trailing brightness wave.
#[derive(Debug, Clone, PartialEq)]
pub struct Wave {
    /// Row of the wave head; runs past the stream's end before resetting.
    pub peak_index: usize,
    pub trail_length: usize,
    pub tick_interval_ms: u64,
    pub last_advance_ms: u64,
    pub reset_delay_ms: u64,
    pub phase: WavePhase,
}

impl Wave {
    /// Initial wave: parked past the end of the stream so the first cycle
    /// starts after a random delay.
    fn new<R: Rng + ?Sized>(white: bool, now_ms: u64, config: &RainConfig, rng: &mut R) -> Self {
        Self {
            peak_index: config.stream_length * 2,
            trail_length: rng.random_range(config.trail_length.clone()),
            tick_interval_ms: rng.random_range(config.tick_interval(white)),
            last_advance_ms: now_ms,
            reset_delay_ms: rng.random_range(config.initial_reset_delay_ms.clone()),
            phase: WavePhase::Advancing,
        }
    }

    /// Colour and opacity of the symbol at `index`.
    pub fn shade(&self, index: usize, white: bool) -> Shade {
        let distance = self.peak_index as i64 - index as i64;
        if distance < 0 || distance >= self.trail_length as i64 {
            return Shade {
                color: Rgb::RAIN_GREEN,
                opacity: 0.0,
            };
        }

        let opacity = map_range(
            distance as f32,
            0.0,
            (self.trail_length - 1) as f32,
            255.0,
            0.0,
        )
        .clamp(0.0, 255.0);
        let color = if distance == 0 && white {
            Rgb::WHITE
        } else {
            Rgb::RAIN_GREEN
        };
        Shade { color, opacity }
    }

    /// Step the wave at most once. Returns `true` when a new cycle began.
    ///
    /// A late call still moves the peak by a single row.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        now_ms: u64,
        stream_length: usize,
        white: bool,
        config: &RainConfig,
        rng: &mut R,
    ) -> bool {
        if now_ms.saturating_sub(self.last_advance_ms) < self.tick_interval_ms {
            return false;
        }

        if self.phase == WavePhase::Advancing && self.peak_index < stream_length + self.trail_length
        {
            self.peak_index += 1;
            self.last_advance_ms = now_ms;
            return false;
        }

        let since_ms = match self.phase {
            WavePhase::Paused { since_ms } => since_ms,
            WavePhase::Advancing => {
                self.phase = WavePhase::Paused { since_ms: now_ms };
                now_ms
            }
        };
        if now_ms.saturating_sub(since_ms) < self.reset_delay_ms {
            return false;
        }

        self.peak_index = 0;
        self.reset_delay_ms = rng.random_range(config.reset_delay_ms.clone());
        self.trail_length = rng.random_range(config.trail_length.clone());
        self.tick_interval_ms = rng.random_range(config.tick_interval(white));
        self.last_advance_ms = now_ms;
        self.phase = WavePhase::Advancing;
        true
    }
}

/// A column of symbols sharing one wave.
#[derive(Debug, Clone)]
pub struct Stream {
    symbols: Vec<Symbol>,
    white: bool,
    wave: Wave,
}

impl Stream {
    /// Build the stream for grid column `column`.
    pub fn new<R: Rng + ?Sized>(
        column: u16,
        now_ms: u64,
        config: &RainConfig,
        rng: &mut R,
    ) -> Self {
        let white = rng.random_bool(config.white_probability);
        let symbols = (0..config.stream_length)
            .map(|row| {
                let mutable = rng.random_bool(config.mutable_probability);
                Symbol::new(column, row as u16, white, mutable, now_ms, config, rng)
            })
            .collect();
        let wave = Wave::new(white, now_ms, config, rng);

        Self {
            symbols,
            white,
            wave,
        }
    }

    /// Update, shade and draw every symbol, then step the wave.
    pub fn run<R: Rng + ?Sized>(
        &mut self,
        now_ms: u64,
        config: &RainConfig,
        rng: &mut R,
        surface: &mut dyn Surface,
    ) {
        for (index, symbol) in self.symbols.iter_mut().enumerate() {
            symbol.update_character(now_ms, config, rng);
            let shade = self.wave.shade(index, self.white);
            symbol.set_color(shade.color);
            symbol.set_opacity(shade.opacity);
            symbol.render(surface);
        }

        let length = self.symbols.len();
        if self.wave.advance(now_ms, length, self.white, config, rng) {
            debug!(
                "stream {} restarted: trail {}, tick {}ms, next pause {}ms",
                self.column(),
                self.wave.trail_length,
                self.wave.tick_interval_ms,
                self.wave.reset_delay_ms
            );
        }
    }

    /// Grid column this stream occupies.
    pub fn column(&self) -> u16 {
        self.symbols.first().map_or(0, |s| s.position().0)
    }

    pub fn is_white(&self) -> bool {
        self.white
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn wave(&self) -> &Wave {
        &self.wave
    }

    pub fn wave_mut(&mut self) -> &mut Wave {
        &mut self.wave
    }
}
