//! Screen state machine
//!
//! What the device shows is a function of the current screen, its cursor
//! and an input event. The transition function is pure and total: every
//! pair not listed below leaves the state unchanged.

use super::events::InputEvent;
use super::menu::{row_count, WELCOME_MENU};

/// Navigable screens
///
/// The discriminant is the index of the screen's matrix image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ScreenId {
    /// Boot screen with the main menu
    Welcome = 0,
    /// Game running
    PlayGame = 1,
    /// Best score
    Highscore = 2,
    /// Brightness, sound, backlight
    Settings = 3,
    /// Credits
    About = 4,
    /// Instructions
    HowToPlay = 5,
    /// Game lost
    EndGame = 6,
    /// Game won
    WinGame = 7,
}

impl ScreenId {
    /// Number of screens
    pub const COUNT: usize = 8;

    /// Every screen in index order
    pub const ALL: [ScreenId; Self::COUNT] = [
        ScreenId::Welcome,
        ScreenId::PlayGame,
        ScreenId::Highscore,
        ScreenId::Settings,
        ScreenId::About,
        ScreenId::HowToPlay,
        ScreenId::EndGame,
        ScreenId::WinGame,
    ];

    /// Index into the asset tables
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Screen for an asset index
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Screen that Back returns to
    ///
    /// Welcome is the root; every other screen hangs directly off it.
    pub fn parent(self) -> Option<ScreenId> {
        match self {
            ScreenId::Welcome => None,
            _ => Some(ScreenId::Welcome),
        }
    }

    /// Check if Up/Down move a cursor on this screen
    pub fn has_cursor(self) -> bool {
        row_count(self) > 1
    }

    /// Check if the screen reacts to an event
    ///
    /// This is the edge set of the menu graph. Cursor moves count even when
    /// the cursor is already at the end of its list.
    pub fn handles(self, event: InputEvent) -> bool {
        use InputEvent::*;
        use ScreenId::*;

        match (self, event) {
            (_, None) => false,
            (s, Up | Down) => s.has_cursor(),
            (Welcome, Select | Right) => true,
            (Welcome, _) => false,
            (PlayGame, Back) => true,
            (Settings, Left | Right) => true,
            (_, Select | Back) => self != PlayGame,
            _ => false,
        }
    }

    /// Screen-level transition with the cursor at its home row
    pub fn transition(self, event: InputEvent) -> ScreenId {
        NavigationState::new(self).transition(event).screen
    }
}

/// Screen plus its ephemeral cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NavigationState {
    /// Current screen
    pub screen: ScreenId,
    /// Selected row (menus) or scroll line (text screens)
    pub cursor: u8,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(ScreenId::Welcome)
    }
}

impl NavigationState {
    /// Enter a screen with the cursor at the top
    pub const fn new(screen: ScreenId) -> Self {
        Self { screen, cursor: 0 }
    }

    /// Process an event and return the next state
    ///
    /// Settings adjustments (Left/Right on the settings screen) do not
    /// change navigation; the engine applies them separately.
    pub fn transition(self, event: InputEvent) -> Self {
        use InputEvent::*;
        use ScreenId::*;

        match (self.screen, event) {
            (_, None) => self,

            // Cursor screens
            (s, Up | Down) if s.has_cursor() => self.move_cursor(event.row_delta()),

            // Welcome menu
            (Welcome, Select) => match WELCOME_MENU.get(self.cursor as usize) {
                Some(entry) => Self::new(entry.target),
                Option::None => self,
            },
            (Welcome, Right) => Self::new(Settings),

            // Game in progress: everything but Back belongs to the game
            (PlayGame, Back) => Self::new(Welcome),

            (Highscore, Select) => Self::new(PlayGame),
            (Settings, Select) => Self::new(Welcome),
            (About, Select) => Self::new(Welcome),
            (HowToPlay, Select) => Self::new(PlayGame),
            (EndGame, Select) => Self::new(PlayGame),
            (WinGame, Select) => Self::new(Highscore),

            (s, Back) => match s.parent() {
                Some(parent) => Self::new(parent),
                Option::None => self,
            },

            // Default: stay in current state
            _ => self,
        }
    }

    fn move_cursor(self, delta: i8) -> Self {
        let last = row_count(self.screen).saturating_sub(1);
        let cursor = if delta < 0 {
            self.cursor.saturating_sub(1)
        } else {
            self.cursor.saturating_add(1).min(last)
        };
        Self { cursor, ..self }
    }

    /// Check if there are rows above the cursor
    pub fn has_more_above(&self) -> bool {
        self.cursor > 0
    }

    /// Check if there are rows below the cursor
    pub fn has_more_below(&self) -> bool {
        self.cursor.saturating_add(1) < row_count(self.screen)
    }
}
