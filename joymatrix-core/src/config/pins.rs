//! Board wiring
//!
//! Pin assignments of the reference board (ATmega328P, Arduino Uno
//! numbering). The drivers take these when the board is brought up; the
//! navigation logic never touches pins.

/// A microcontroller pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pin {
    /// Digital pin `Dn`
    Digital(u8),
    /// Analog-capable pin `An`
    Analog(u8),
}

impl Pin {
    /// Number of digital pins before the analog bank
    pub const ANALOG_OFFSET: u8 = 14;

    /// Pin number in the board's flat numbering (`A0` is 14)
    pub const fn number(self) -> u8 {
        match self {
            Pin::Digital(n) => n,
            Pin::Analog(n) => Self::ANALOG_OFFSET + n,
        }
    }
}

/// Character LCD wiring (4-bit parallel)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LcdPins {
    /// Register select
    pub rs: Pin,
    /// Enable strobe
    pub en: Pin,
    /// Data lines D4-D7
    pub data: [Pin; 4],
    /// Backlight switch (PWM-capable)
    pub backlight: Pin,
}

/// LED matrix driver wiring (MAX7219 serial interface)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MatrixPins {
    /// Serial data in
    pub din: Pin,
    /// Serial clock
    pub clk: Pin,
    /// Load / chip select
    pub load: Pin,
    /// Number of chained devices
    pub device_count: u8,
}

/// Joystick wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickPins {
    /// Push button (active low, internal pull-up)
    pub switch: Pin,
    /// Horizontal axis
    pub x: Pin,
    /// Vertical axis
    pub y: Pin,
}

/// Complete pin map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinMap {
    pub lcd: LcdPins,
    pub matrix: MatrixPins,
    pub joystick: JoystickPins,
    /// Passive buzzer
    pub buzzer: Pin,
}

/// Reference board wiring
pub const BOARD_PINS: PinMap = PinMap {
    lcd: LcdPins {
        rs: Pin::Digital(9),
        en: Pin::Digital(8),
        data: [Pin::Digital(7), Pin::Digital(6), Pin::Digital(3), Pin::Digital(4)],
        backlight: Pin::Digital(5),
    },
    matrix: MatrixPins {
        din: Pin::Digital(12),
        clk: Pin::Digital(11),
        load: Pin::Digital(10),
        device_count: 1,
    },
    joystick: JoystickPins {
        switch: Pin::Digital(2),
        x: Pin::Analog(0),
        y: Pin::Analog(1),
    },
    buzzer: Pin::Analog(4),
};

impl Default for PinMap {
    fn default() -> Self {
        BOARD_PINS
    }
}

impl PinMap {
    /// Every pin in the map
    pub fn pins(&self) -> [Pin; 13] {
        [
            self.lcd.rs,
            self.lcd.en,
            self.lcd.data[0],
            self.lcd.data[1],
            self.lcd.data[2],
            self.lcd.data[3],
            self.lcd.backlight,
            self.matrix.din,
            self.matrix.clk,
            self.matrix.load,
            self.joystick.switch,
            self.joystick.x,
            self.joystick.y,
        ]
    }

    /// Check that no pin is assigned twice (buzzer included)
    pub fn is_conflict_free(&self) -> bool {
        let pins = self.pins();
        for (i, a) in pins.iter().enumerate() {
            if a.number() == self.buzzer.number() {
                return false;
            }
            if pins[i + 1..].iter().any(|b| b.number() == a.number()) {
                return false;
            }
        }
        true
    }
}
