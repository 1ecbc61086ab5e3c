//! LCD custom characters
//!
//! HD44780 CGRAM format: 8 rows of 5 pixels, low 5 bits of each byte.

/// A 5x8 custom character
pub type Glyph = [u8; 8];

/// Custom characters stored in CGRAM
///
/// The discriminant is both the table index and the CGRAM slot, so the
/// glyph prints as the character with that code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GlyphId {
    /// More rows above
    UpArrow = 0,
    /// More rows below
    DownArrow = 1,
}

impl GlyphId {
    /// Number of glyphs
    pub const COUNT: usize = 2;

    /// Every glyph in slot order
    pub const ALL: [GlyphId; Self::COUNT] = [GlyphId::UpArrow, GlyphId::DownArrow];

    /// CGRAM slot
    pub const fn slot(self) -> u8 {
        self as u8
    }

    /// Character that prints this glyph
    pub const fn as_char(self) -> char {
        self as u8 as char
    }
}

/// Glyphs indexed by [`GlyphId::slot`]
pub static GLYPHS: [Glyph; GlyphId::COUNT] = [
    // up arrow
    [
        0b00100,
        0b01110,
        0b10101,
        0b00100,
        0b00100,
        0b00100,
        0b00100,
        0b00100,
    ],
    // down arrow
    [
        0b00100,
        0b00100,
        0b00100,
        0b00100,
        0b00100,
        0b10101,
        0b01110,
        0b00100,
    ],
];

/// Pixel data for a glyph
pub fn glyph(id: GlyphId) -> &'static Glyph {
    let data = GLYPHS.get(id.slot() as usize);
    debug_assert!(data.is_some(), "no data for glyph");
    data.unwrap_or(&GLYPHS[0])
}
