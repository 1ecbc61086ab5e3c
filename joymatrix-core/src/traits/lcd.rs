//! Character LCD trait

use crate::assets::Glyph;

/// Number of character columns on the LCD
pub const LCD_COLS: u8 = 16;

/// Number of character rows on the LCD
pub const LCD_ROWS: u8 = 2;

/// Trait for a character LCD (HD44780 class)
///
/// Writes are fire-and-forget. A driver that can fail on the bus is
/// expected to swallow or log the failure itself.
pub trait CharacterLcd {
    /// Initialize the controller (function set, display on, entry mode)
    fn init(&mut self);

    /// Clear the display and home the cursor
    fn clear(&mut self);

    /// Move the write cursor
    ///
    /// - `col`: Column (0-15)
    /// - `row`: Row (0-1)
    fn set_cursor(&mut self, col: u8, row: u8);

    /// Write text at the cursor
    ///
    /// Characters `'\u{0}'..='\u{7}'` print the custom glyphs stored at
    /// those CGRAM slots.
    fn write_text(&mut self, text: &str);

    /// Switch the backlight line
    fn set_backlight(&mut self, on: bool);

    /// Store a custom glyph in CGRAM slot `index` (0-7)
    fn define_glyph(&mut self, index: u8, glyph: &Glyph);
}
