//! LCD text for each screen
//!
//! Titles go on the top row. Strings are ASCII and at most 15 characters,
//! leaving the last column for the scroll arrows.

use crate::state::ScreenId;

/// Credits, one LCD line each
pub const ABOUT_LINES: [&str; 3] = ["joymatrix v0.1", "LCD+8x8 matrix", "Made with Rust"];

/// Instructions, one LCD line each
pub const HOW_TO_PLAY_LINES: [&str; 4] = [
    "Stick: move",
    "Click: select",
    "Hold: back",
    "Beat the score!",
];

/// Top-row title of a screen
pub fn title(screen: ScreenId) -> &'static str {
    match screen {
        ScreenId::Welcome => "Main menu",
        ScreenId::PlayGame => "Playing",
        ScreenId::Highscore => "Highscore",
        ScreenId::Settings => "Settings",
        ScreenId::About => "About",
        ScreenId::HowToPlay => "How to play",
        ScreenId::EndGame => "Game over",
        ScreenId::WinGame => "You win!",
    }
}

/// Scrollable text lines of a screen (empty for screens without any)
pub fn screen_lines(screen: ScreenId) -> &'static [&'static str] {
    match screen {
        ScreenId::About => &ABOUT_LINES,
        ScreenId::HowToPlay => &HOW_TO_PLAY_LINES,
        _ => &[],
    }
}

/// Bottom-row prompt of screens without a list
pub fn prompt(screen: ScreenId) -> &'static str {
    match screen {
        ScreenId::PlayGame => "Hold to quit",
        ScreenId::EndGame => "Click: retry",
        ScreenId::WinGame => "Click: scores",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_fits_the_lcd() {
        for screen in ScreenId::ALL {
            assert!(title(screen).len() <= 15);
            assert!(prompt(screen).len() <= 16);
            for line in screen_lines(screen) {
                assert!(line.len() <= 15, "{:?}: {}", screen, line);
                assert!(line.is_ascii());
            }
        }
    }

    #[test]
    fn test_text_screens() {
        assert_eq!(screen_lines(ScreenId::About).len(), 3);
        assert_eq!(screen_lines(ScreenId::HowToPlay).len(), 4);
        assert!(screen_lines(ScreenId::Welcome).is_empty());
    }
}
