//! LCD text frame
//!
//! Two lines of at most [`LCD_COLS`] characters, composed before anything
//! is written to the display.

use heapless::String;

use crate::traits::lcd::{LCD_COLS, LCD_ROWS};

/// Characters per line
pub const LINE_LEN: usize = LCD_COLS as usize;

/// Rows in a frame
pub const FRAME_ROWS: usize = LCD_ROWS as usize;

/// Column reserved for the scroll arrows
pub const ARROW_COL: usize = LINE_LEN - 1;

const BLANK: &str = "                ";

/// Text content of the LCD
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFrame {
    lines: [String<LINE_LEN>; FRAME_ROWS],
}

impl Default for TextFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl TextFrame {
    /// Create an empty frame
    pub fn new() -> Self {
        Self {
            lines: core::array::from_fn(|_| String::new()),
        }
    }

    /// Replace a line, truncating at the line length
    ///
    /// Non-ASCII characters are shown as `?`.
    pub fn set_line(&mut self, row: usize, text: &str) {
        if let Some(line) = self.lines.get_mut(row) {
            line.clear();
            push_ascii(line, text);
        }
    }

    /// Append to a line, truncating at the line length
    pub fn push(&mut self, row: usize, text: &str) {
        if let Some(line) = self.lines.get_mut(row) {
            push_ascii(line, text);
        }
    }

    /// Put `text` at the right edge of a line, ending before `end_col`
    ///
    /// Spaces fill the gap. Nothing is written if the text would not keep
    /// at least one space after the existing content.
    pub fn push_right(&mut self, row: usize, text: &str, end_col: usize) {
        if let Some(line) = self.lines.get_mut(row) {
            let end_col = end_col.min(LINE_LEN);
            let start = end_col.saturating_sub(text.len());
            if start <= line.len() {
                return;
            }
            pad_to(line, start);
            push_ascii(line, text);
        }
    }

    /// Put a single character in the last column of a line
    pub fn set_last(&mut self, row: usize, ch: char) {
        if let Some(line) = self.lines.get_mut(row) {
            while line.len() > ARROW_COL {
                line.pop();
            }
            pad_to(line, ARROW_COL);
            let _ = line.push(ch);
        }
    }

    /// Content of a line
    pub fn line(&self, row: usize) -> &str {
        self.lines.get(row).map(|s| s.as_str()).unwrap_or("")
    }

    /// Spaces that pad a line to the full width
    pub fn padding(&self, row: usize) -> &'static str {
        &BLANK[..LINE_LEN - self.line(row).len()]
    }

    /// All lines, top first
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|s| s.as_str())
    }
}

fn push_ascii(line: &mut String<LINE_LEN>, text: &str) {
    for ch in text.chars() {
        let ch = if ch.is_ascii() { ch } else { '?' };
        if line.push(ch).is_err() {
            break;
        }
    }
}

fn pad_to(line: &mut String<LINE_LEN>, col: usize) {
    while line.len() < col {
        if line.push(' ').is_err() {
            break;
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TextFrame {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "TextFrame[{}, {}]", self.line(0), self.line(1));
    }
}
