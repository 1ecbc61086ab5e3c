//! User settings
//!
//! Adjusted on the settings screen, lost at power-off.

use core::fmt::Write;

use heapless::String;
use serde::{Deserialize, Serialize};

use crate::state::{InputEvent, SettingRow};
use crate::traits::matrix::MAX_BRIGHTNESS;

/// Runtime settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    /// LED matrix intensity (0..=MAX_BRIGHTNESS)
    pub brightness: u8,
    /// Buzzer feedback enabled
    pub sound: bool,
    /// LCD backlight allowed
    pub backlight: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            brightness: 8,
            sound: true,
            backlight: true,
        }
    }
}

impl Settings {
    /// Apply a Left/Right event to a row
    ///
    /// Returns `true` if anything changed. Brightness steps and clamps;
    /// the switches toggle on either direction.
    pub fn adjust(&mut self, row: SettingRow, event: InputEvent) -> bool {
        let delta = event.value_delta();
        if delta == 0 {
            return false;
        }

        match row {
            SettingRow::Brightness => {
                let next = if delta < 0 {
                    self.brightness.saturating_sub(1)
                } else {
                    self.brightness.saturating_add(1).min(MAX_BRIGHTNESS)
                };
                let changed = next != self.brightness;
                self.brightness = next;
                changed
            }
            SettingRow::Sound => {
                self.sound = !self.sound;
                true
            }
            SettingRow::Backlight => {
                self.backlight = !self.backlight;
                true
            }
        }
    }

    /// Current value of a row as shown on the LCD
    pub fn value_text(&self, row: SettingRow) -> String<4> {
        let mut text = String::new();
        // Longest value is "Off"
        let _ = match row {
            SettingRow::Brightness => write!(text, "{}", self.brightness),
            SettingRow::Sound => text.write_str(on_off(self.sound)),
            SettingRow::Backlight => text.write_str(on_off(self.backlight)),
        };
        text
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "On"
    } else {
        "Off"
    }
}
