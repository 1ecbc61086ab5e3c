//! Character LCD adapter
//!
//! Layout:
//!
//! ```text
//! +----------------+
//! |Main menu      ^|   title, up arrow if rows above
//! |> Settings     v|   selected row, down arrow if rows below
//! +----------------+
//! ```
//!
//! Every write covers the full line, so no clear (and no flicker) is
//! needed between frames.

use core::fmt::Write;

use heapless::String;

use super::frame::{TextFrame, ARROW_COL, FRAME_ROWS, LINE_LEN};
use crate::assets::text::{prompt, screen_lines, title};
use crate::assets::{glyph, GlyphId};
use crate::navigation::{HighscoreRecord, Settings};
use crate::state::{NavigationState, ScreenId, SettingRow, WELCOME_MENU};
use crate::traits::CharacterLcd;

/// Selection marker in front of menu rows
const MARKER: &str = "> ";

/// Stateless LCD facade
pub struct LcdAdapter;

impl LcdAdapter {
    /// Store the arrow glyphs in CGRAM
    pub fn install_glyphs<L: CharacterLcd>(lcd: &mut L) {
        for id in GlyphId::ALL {
            lcd.define_glyph(id.slot(), glyph(id));
        }
    }

    /// Compose and write the text of a state
    pub fn render<L: CharacterLcd>(
        lcd: &mut L,
        state: &NavigationState,
        settings: &Settings,
        highscore: Option<&HighscoreRecord>,
    ) {
        let frame = Self::compose(state, settings, highscore);
        trace!("LCD {}", frame);
        Self::write(lcd, &frame);
    }

    /// Write a composed frame
    pub fn write<L: CharacterLcd>(lcd: &mut L, frame: &TextFrame) {
        for row in 0..FRAME_ROWS {
            lcd.set_cursor(0, row as u8);
            lcd.write_text(frame.line(row));
            lcd.write_text(frame.padding(row));
        }
    }

    /// Lay out the text of a state
    pub fn compose(
        state: &NavigationState,
        settings: &Settings,
        highscore: Option<&HighscoreRecord>,
    ) -> TextFrame {
        let mut frame = TextFrame::new();
        frame.set_line(0, title(state.screen));

        let cursor = state.cursor as usize;
        match state.screen {
            ScreenId::Welcome => {
                if let Some(entry) = WELCOME_MENU.get(cursor) {
                    frame.set_line(1, MARKER);
                    frame.push(1, entry.label);
                }
            }
            ScreenId::Settings => {
                if let Some(row) = SettingRow::from_cursor(state.cursor) {
                    frame.set_line(1, MARKER);
                    frame.push(1, row.label());
                    frame.push_right(1, &settings.value_text(row), ARROW_COL);
                }
            }
            ScreenId::About | ScreenId::HowToPlay => {
                if let Some(line) = screen_lines(state.screen).get(cursor) {
                    frame.set_line(1, line);
                }
            }
            ScreenId::Highscore => {
                frame.set_line(1, &highscore_text(highscore));
            }
            ScreenId::PlayGame | ScreenId::EndGame | ScreenId::WinGame => {
                frame.set_line(1, prompt(state.screen));
            }
        }

        if state.has_more_above() {
            frame.set_last(0, GlyphId::UpArrow.as_char());
        }
        if state.has_more_below() {
            frame.set_last(1, GlyphId::DownArrow.as_char());
        }
        frame
    }
}

fn highscore_text(record: Option<&HighscoreRecord>) -> String<LINE_LEN> {
    let mut text = String::new();
    match record {
        Some(r) if *r != HighscoreRecord::default() => {
            // Truncated on overflow
            let _ = write!(text, "{} pts {}W", r.score, r.games_won);
        }
        _ => {
            let _ = text.push_str("No record yet");
        }
    }
    text
}
