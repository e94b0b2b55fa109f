use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use digital_rain_core::{Clock, RainConfig, SystemClock};
use digital_rain_engine::{CellCanvas, Rain};
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Flex, Layout},
};

mod logging;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init()?;
    let terminal = ratatui::init();
    let result = App::new(RainConfig::default()).run(terminal);
    ratatui::restore();
    result
}

/// The main application which owns the rain and drives it frame by frame.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    rain: Rain,
    canvas: CellCanvas,
    clock: SystemClock,
    rng: StdRng,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: RainConfig) -> Self {
        let clock = SystemClock::new();
        let mut rng = StdRng::from_os_rng();
        let canvas = CellCanvas::new(config.grid_columns(), config.grid_rows());
        let rain = Rain::new(config, clock.now_ms(), &mut rng);
        Self {
            running: false,
            rain,
            canvas,
            clock,
            rng,
        }
    }

    /// Run the application's main loop at the configured frame rate.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let frame_interval = self.rain.config().frame_interval();
        info!(
            "digital rain: {} streams, {}x{} grid, {:?} per frame",
            self.rain.streams().len(),
            self.canvas.columns(),
            self.canvas.rows(),
            frame_interval
        );

        self.running = true;
        while self.running {
            let deadline = Instant::now() + frame_interval;
            self.tick();
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events(deadline)?;
        }
        Ok(())
    }

    /// Advance the animation by one frame.
    fn tick(&mut self) {
        let now_ms = self.clock.now_ms();
        self.rain.tick(now_ms, &mut self.rng, &mut self.canvas);
    }

    /// Renders the canvas centred in the terminal.
    fn render(&mut self, frame: &mut Frame) {
        let (width, height) = self.canvas.terminal_size();
        let [row] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(frame.area());
        let [area] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(row);
        frame.render_widget(&self.canvas, area);
    }

    /// Reads the crossterm events until the next frame is due.
    fn handle_crossterm_events(&mut self, deadline: Instant) -> color_eyre::Result<()> {
        while self.running {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events; the only thing a key can do is stop the rain.
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
