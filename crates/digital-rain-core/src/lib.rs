//! Core types for the digital rain animation.
//!
//! Holds the fixed animation constants, colour helpers, the glyph alphabet
//! and the clock abstraction shared by the engine and the binary.

mod clock;
mod color;
mod config;
mod glyphs;

pub use clock::{Clock, ManualClock, SystemClock};
pub use color::{Rgb, blend, map_range};
pub use config::RainConfig;
pub use glyphs::{GLYPH_COUNT, GLYPH_START, random_glyph};
