//! Menu layouts
//!
//! Rows of the screens that have a cursor. The LCD shows one row at a
//! time, so the cursor doubles as the scroll position.

use super::machine::ScreenId;
use crate::assets::text::{ABOUT_LINES, HOW_TO_PLAY_LINES};

/// One entry of the welcome menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    /// Text shown on the LCD
    pub label: &'static str,
    /// Screen opened by Select
    pub target: ScreenId,
}

/// Welcome menu, top to bottom
pub const WELCOME_MENU: [MenuEntry; 5] = [
    MenuEntry {
        label: "Play",
        target: ScreenId::PlayGame,
    },
    MenuEntry {
        label: "Settings",
        target: ScreenId::Settings,
    },
    MenuEntry {
        label: "Highscore",
        target: ScreenId::Highscore,
    },
    MenuEntry {
        label: "About",
        target: ScreenId::About,
    },
    MenuEntry {
        label: "How to play",
        target: ScreenId::HowToPlay,
    },
];

/// Rows of the settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingRow {
    /// LED matrix intensity
    Brightness,
    /// Buzzer feedback on/off
    Sound,
    /// LCD backlight on/off
    Backlight,
}

impl SettingRow {
    /// Rows in display order
    pub const ALL: [SettingRow; 3] = [
        SettingRow::Brightness,
        SettingRow::Sound,
        SettingRow::Backlight,
    ];

    /// Row under a cursor position
    pub fn from_cursor(cursor: u8) -> Option<Self> {
        Self::ALL.get(cursor as usize).copied()
    }

    /// Text shown on the LCD
    pub fn label(self) -> &'static str {
        match self {
            SettingRow::Brightness => "Bright",
            SettingRow::Sound => "Sound",
            SettingRow::Backlight => "Light",
        }
    }
}

/// Number of cursor rows on a screen
///
/// Screens without a list have a single row, which pins the cursor at 0.
pub fn row_count(screen: ScreenId) -> u8 {
    let rows = match screen {
        ScreenId::Welcome => WELCOME_MENU.len(),
        ScreenId::Settings => SettingRow::ALL.len(),
        ScreenId::About => ABOUT_LINES.len(),
        ScreenId::HowToPlay => HOW_TO_PLAY_LINES.len(),
        _ => 1,
    };
    rows as u8
}
