//! Glyph alphabet for the rain.

use rand::Rng;

/// First code point of the katakana block.
pub const GLYPH_START: u32 = 0x30A0;

/// Number of code points in the alphabet.
pub const GLYPH_COUNT: u32 = 96;

/// Pick a katakana character uniformly at random.
pub fn random_glyph<R: Rng + ?Sized>(rng: &mut R) -> char {
    let offset = rng.random_range(0..GLYPH_COUNT);
    // every code point in U+30A0..U+3100 is a valid scalar value
    char::from_u32(GLYPH_START + offset).unwrap_or('\u{30A0}')
}
