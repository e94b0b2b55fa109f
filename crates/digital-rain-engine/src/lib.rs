//! Digital rain animation.
//!
//! Symbols never move: each [`Stream`] sweeps a brightness wave down its
//! fixed column of [`Symbol`]s, and the [`Rain`] driver advances every
//! stream once per frame onto a [`Surface`]. [`CellCanvas`] is the
//! in-memory surface that the terminal front end blits.

mod canvas;
mod rain;
mod stream;
mod surface;
mod symbol;

pub use canvas::CellCanvas;
pub use rain::Rain;
pub use stream::{Shade, Stream, Wave, WavePhase};
pub use surface::{GlyphDraw, Surface};
pub use symbol::Symbol;
