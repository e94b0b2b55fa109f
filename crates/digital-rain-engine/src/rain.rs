//! The rain driver: every stream of the canvas, advanced once per frame.

use digital_rain_core::RainConfig;
use log::debug;
use rand::Rng;

use crate::stream::Stream;
use crate::surface::Surface;

/// All streams of the canvas, one per grid column.
#[derive(Debug, Clone)]
pub struct Rain {
    config: RainConfig,
    streams: Vec<Stream>,
}

impl Rain {
    /// Build `max_streams` streams packed left to right from column 0.
    pub fn new<R: Rng + ?Sized>(config: RainConfig, now_ms: u64, rng: &mut R) -> Self {
        let streams: Vec<Stream> = (0..config.max_streams)
            .map(|column| Stream::new(column as u16, now_ms, &config, rng))
            .collect();
        debug!(
            "created {} streams ({} white)",
            streams.len(),
            streams.iter().filter(|s| s.is_white()).count()
        );
        Self { config, streams }
    }

    /// Fade the surface, then run every stream in column order.
    pub fn tick<R: Rng + ?Sized>(&mut self, now_ms: u64, rng: &mut R, surface: &mut dyn Surface) {
        surface.fade(self.config.background, self.config.background_alpha);
        for stream in &mut self.streams {
            stream.run(now_ms, &self.config, rng, surface);
        }
    }

    pub fn config(&self) -> &RainConfig {
        &self.config
    }

    pub fn streams(&self) -> &[Stream] {
        &self.streams
    }

    pub fn streams_mut(&mut self) -> &mut [Stream] {
        &mut self.streams
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellCanvas, GlyphDraw, Wave, WavePhase};
    use digital_rain_core::{Clock, ManualClock, Rgb};
    use rand::{SeedableRng, rngs::StdRng};

    #[derive(Default)]
    struct Recorder {
        fades: Vec<(Rgb, u8)>,
        draws: Vec<GlyphDraw>,
    }

    impl Surface for Recorder {
        fn fade(&mut self, color: Rgb, alpha: u8) {
            self.fades.push((color, alpha));
        }

        fn draw_glyph(&mut self, draw: &GlyphDraw) {
            self.draws.push(*draw);
        }
    }

    #[test]
    fn test_streams_cover_canvas() {
        let mut rng = StdRng::seed_from_u64(21);
        let rain = Rain::new(RainConfig::default(), 0, &mut rng);

        assert_eq!(rain.streams().len(), 20);
        for (index, stream) in rain.streams().iter().enumerate() {
            assert_eq!(stream.column() as usize, index);
            assert_eq!(stream.symbols().len(), 25);
        }
    }

    #[test]
    fn test_tick_fades_then_draws_in_order() {
        let mut rng = StdRng::seed_from_u64(22);
        let mut rain = Rain::new(RainConfig::default(), 0, &mut rng);
        let mut surface = Recorder::default();

        rain.tick(10, &mut rng, &mut surface);

        assert_eq!(surface.fades, vec![(Rgb::BLACK, 150)]);
        assert_eq!(surface.draws.len(), 20 * 25);
        let first = surface.draws[0];
        assert_eq!((first.column, first.row), (0, 0));
        let last = surface.draws[surface.draws.len() - 1];
        assert_eq!((last.column, last.row), (19, 24));
        // every stream starts in its reset pause
        assert!(surface.draws.iter().all(|d| d.opacity == 0.0));
    }

    #[test]
    fn test_rain_eventually_shows_on_canvas() {
        let clock = ManualClock::new(0);
        let mut rng = StdRng::seed_from_u64(23);
        let config = RainConfig::default();
        let mut canvas = CellCanvas::new(config.grid_columns(), config.grid_rows());
        let mut rain = Rain::new(config, clock.now_ms(), &mut rng);

        let mut seen = false;
        for _ in 0..400 {
            clock.advance(50);
            rain.tick(clock.now_ms(), &mut rng, &mut canvas);
            seen |= (0..20).any(|c| (0..20).any(|r| canvas.cell(c, r).is_some()));
        }
        assert!(seen);
    }

    #[test]
    fn test_wave_walk_through_a_full_cycle() {
        let clock = ManualClock::new(0);
        let mut rng = StdRng::seed_from_u64(24);
        let mut rain = Rain::new(RainConfig::default(), 0, &mut rng);
        *rain.streams_mut()[0].wave_mut() = Wave {
            peak_index: 0,
            trail_length: 20,
            tick_interval_ms: 50,
            last_advance_ms: 0,
            reset_delay_ms: 1000,
            phase: WavePhase::Advancing,
        };

        let mut surface = Recorder::default();
        for step in 1..=45 {
            clock.set(step * 50);
            rain.tick(clock.now_ms(), &mut rng, &mut surface);
        }
        assert_eq!(rain.streams()[0].wave().peak_index, 45);

        clock.advance(50);
        rain.tick(clock.now_ms(), &mut rng, &mut surface);
        let since_ms = clock.now_ms();
        assert_eq!(
            rain.streams()[0].wave().phase,
            WavePhase::Paused { since_ms }
        );

        clock.advance(1000);
        rain.tick(clock.now_ms(), &mut rng, &mut surface);
        assert_eq!(rain.streams()[0].wave().peak_index, 0);
        assert_eq!(rain.streams()[0].wave().phase, WavePhase::Advancing);
    }
}
