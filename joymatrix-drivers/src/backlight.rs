//! LCD backlight line
//!
//! Character LCD modules usually bring the backlight LED out on its own
//! pin. [`BacklitLcd`] pairs a controller driver with that pin so the
//! pair looks like one [`CharacterLcd`].

use embedded_hal::digital::OutputPin;
use joymatrix_core::assets::Glyph;
use joymatrix_core::traits::CharacterLcd;

/// LCD driver plus a GPIO-switched backlight
pub struct BacklitLcd<L, P> {
    lcd: L,
    pin: P,
    /// If true, backlight ON = pin LOW
    inverted: bool,
    on: bool,
}

impl<L: CharacterLcd, P: OutputPin> BacklitLcd<L, P> {
    /// Wrap a driver; the backlight starts off
    ///
    /// # Arguments
    /// - `lcd`: Controller driver
    /// - `pin`: Backlight switch
    /// - `inverted`: If true, the backlight is ON when the pin is LOW
    pub fn new(lcd: L, pin: P, inverted: bool) -> Self {
        let mut backlit = Self {
            lcd,
            pin,
            inverted,
            on: true,
        };
        backlit.set_backlight(false);
        backlit
    }

    /// Check if the backlight is on
    pub fn is_backlight_on(&self) -> bool {
        self.on
    }

    /// Controller driver
    pub fn inner(&self) -> &L {
        &self.lcd
    }

    /// Release the driver and the pin
    pub fn release(self) -> (L, P) {
        (self.lcd, self.pin)
    }
}

impl<L: CharacterLcd, P: OutputPin> CharacterLcd for BacklitLcd<L, P> {
    fn init(&mut self) {
        self.lcd.init();
    }

    fn clear(&mut self) {
        self.lcd.clear();
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        self.lcd.set_cursor(col, row);
    }

    fn write_text(&mut self, text: &str) {
        self.lcd.write_text(text);
    }

    fn set_backlight(&mut self, on: bool) {
        // Writes are fire-and-forget; a failed pin write keeps the old state
        let result = if on != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        if result.is_ok() {
            self.on = on;
        }
    }

    fn define_glyph(&mut self, index: u8, glyph: &Glyph) {
        self.lcd.define_glyph(index, glyph);
    }
}
