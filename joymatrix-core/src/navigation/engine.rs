//! Navigation engine
//!
//! Owns the navigation state and turns input events into redraw requests.
//! The engine never touches a display; the main loop hands its requests to
//! the display adapters.

use super::highscore::HighscoreRecord;
use super::settings::Settings;
use crate::state::{GameOutcome, InputEvent, NavigationState, ScreenId, SettingRow};
use crate::traits::{KeyValueStore, StorageError};

/// Full redraw of both displays for a newly entered screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderRequest {
    /// State to draw
    pub state: NavigationState,
    /// Matrix image index (the screen's discriminant)
    pub bitmap_index: u8,
}

impl RenderRequest {
    /// Request for a state
    pub const fn new(state: NavigationState) -> Self {
        Self {
            state,
            bitmap_index: state.screen as u8,
        }
    }

    /// Screen to draw
    pub fn screen(&self) -> ScreenId {
        self.state.screen
    }
}

/// What needs redrawing after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Redraw {
    /// Nothing changed
    #[default]
    None,
    /// Cursor or a setting changed: refresh the LCD text only
    Menu(NavigationState),
    /// Screen changed: redraw both displays
    Screen(RenderRequest),
}

impl Redraw {
    /// Check if anything needs drawing
    pub fn is_some(&self) -> bool {
        !matches!(self, Redraw::None)
    }

    /// Full render request, if the screen changed
    pub fn render_request(&self) -> Option<RenderRequest> {
        match self {
            Redraw::Screen(request) => Some(*request),
            _ => None,
        }
    }
}

/// Navigation engine
///
/// Starts at the welcome screen. Highscores go through `store`.
pub struct NavigationEngine<S: KeyValueStore> {
    state: NavigationState,
    settings: Settings,
    highscore: HighscoreRecord,
    store: S,
}

impl<S: KeyValueStore> NavigationEngine<S> {
    /// Create an engine at the welcome screen
    pub fn new(store: S, settings: Settings) -> Self {
        Self {
            state: NavigationState::default(),
            settings,
            highscore: HighscoreRecord::default(),
            store,
        }
    }

    /// Current navigation state
    pub fn state(&self) -> NavigationState {
        self.state
    }

    /// Current screen
    pub fn screen(&self) -> ScreenId {
        self.state.screen
    }

    /// Current settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Highscore as last loaded
    pub fn highscore(&self) -> &HighscoreRecord {
        &self.highscore
    }

    /// Render request for the current state
    pub fn current_request(&self) -> RenderRequest {
        RenderRequest::new(self.state)
    }

    /// Apply an input event
    ///
    /// Returns [`Redraw::Screen`] exactly when the screen changed.
    pub fn handle(&mut self, event: InputEvent) -> Redraw {
        if !event.is_some() {
            return Redraw::None;
        }

        if self.state.screen == ScreenId::Settings && event.value_delta() != 0 {
            return self.adjust_setting(event);
        }

        let next = self.state.transition(event);
        if next.screen != self.state.screen {
            debug!("{:?} on {:?}", event, self.state.screen);
            self.enter(next)
        } else if next != self.state {
            self.state = next;
            Redraw::Menu(next)
        } else {
            Redraw::None
        }
    }

    /// Land on a screen without an input event
    ///
    /// Used by the hosted game to report its end. Returns
    /// [`Redraw::None`] if already there.
    pub fn force_transition(&mut self, screen: ScreenId) -> Redraw {
        if screen == self.state.screen {
            return Redraw::None;
        }
        debug!("Forced to {:?}", screen);
        self.enter(NavigationState::new(screen))
    }

    /// Record a finished game and show its outcome
    ///
    /// If the stored record cannot be read, the cached one is updated for
    /// display but not written back.
    pub fn finish_game(&mut self, outcome: GameOutcome, score: u32) -> Redraw {
        let readable = self.reload_highscore();
        if self.highscore.record(outcome, score) && readable {
            info!(
                "New record: score {}, {} wins",
                self.highscore.score,
                self.highscore.games_won
            );
            if let Err(e) = self.highscore.save(&mut self.store) {
                warn!("Highscore not saved: {:?}", e);
            }
        }

        let screen = match outcome {
            GameOutcome::Lost => ScreenId::EndGame,
            GameOutcome::Won => ScreenId::WinGame,
        };
        self.force_transition(screen)
    }

    fn adjust_setting(&mut self, event: InputEvent) -> Redraw {
        let Some(row) = SettingRow::from_cursor(self.state.cursor) else {
            return Redraw::None;
        };
        if self.settings.adjust(row, event) {
            debug!("{:?} adjusted", row);
            Redraw::Menu(self.state)
        } else {
            Redraw::None
        }
    }

    fn enter(&mut self, next: NavigationState) -> Redraw {
        info!("Screen {:?} -> {:?}", self.state.screen, next.screen);
        self.state = next;
        if next.screen == ScreenId::Highscore {
            self.reload_highscore();
        }
        Redraw::Screen(RenderRequest::new(next))
    }

    /// Refresh the cached record from the store
    ///
    /// Returns `false` on a read failure, leaving the cache untouched.
    /// A missing or corrupt record counts as empty.
    fn reload_highscore(&mut self) -> bool {
        match HighscoreRecord::try_load(&mut self.store) {
            Ok(record) => {
                self.highscore = record;
                true
            }
            Err(StorageError::NotFound) => {
                self.highscore = HighscoreRecord::default();
                true
            }
            Err(StorageError::Corrupted) => {
                warn!("Highscore corrupt, starting over");
                self.highscore = HighscoreRecord::default();
                true
            }
            Err(e) => {
                warn!("Highscore unreadable, keeping cached: {:?}", e);
                false
            }
        }
    }

    /// Release the store
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::StorageKey;
    use proptest::prelude::*;

    /// Highscore-only store
    #[derive(Default)]
    struct FakeStore {
        data: Option<Vec<u8>>,
        saves: usize,
        failing_reads: usize,
    }

    impl KeyValueStore for FakeStore {
        fn load(&mut self, _key: StorageKey, buffer: &mut [u8]) -> Result<usize, StorageError> {
            if self.failing_reads > 0 {
                self.failing_reads -= 1;
                return Err(StorageError::Io);
            }
            let data = self.data.as_ref().ok_or(StorageError::NotFound)?;
            buffer[..data.len()].copy_from_slice(data);
            Ok(data.len())
        }

        fn save(&mut self, _key: StorageKey, data: &[u8]) -> Result<(), StorageError> {
            self.data = Some(data.to_vec());
            self.saves += 1;
            Ok(())
        }
    }

    fn engine() -> NavigationEngine<FakeStore> {
        NavigationEngine::new(FakeStore::default(), Settings::default())
    }

    fn any_event() -> impl Strategy<Value = InputEvent> {
        (0usize..InputEvent::ALL.len()).prop_map(|i| InputEvent::ALL[i])
    }

    #[test]
    fn test_boots_at_welcome() {
        let e = engine();
        assert_eq!(e.state(), NavigationState::new(ScreenId::Welcome));
        assert_eq!(e.current_request().bitmap_index, 0);
    }

    #[test]
    fn test_select_plays() {
        let mut e = engine();
        let redraw = e.handle(InputEvent::Select);
        assert_eq!(e.screen(), ScreenId::PlayGame);
        let request = redraw.render_request().unwrap();
        assert_eq!(request.screen(), ScreenId::PlayGame);
        assert_eq!(request.bitmap_index, 1);
    }

    #[test]
    fn test_down_select_opens_settings() {
        let mut e = engine();
        assert_eq!(
            e.handle(InputEvent::Down),
            Redraw::Menu(NavigationState {
                screen: ScreenId::Welcome,
                cursor: 1
            })
        );
        let request = e.handle(InputEvent::Select).render_request().unwrap();
        assert_eq!(e.screen(), ScreenId::Settings);
        assert_eq!(request.bitmap_index, 3);
    }

    #[test]
    fn test_forced_win() {
        let mut e = engine();
        e.handle(InputEvent::Select);
        let request = e.force_transition(ScreenId::WinGame).render_request().unwrap();
        assert_eq!(e.screen(), ScreenId::WinGame);
        assert_eq!(request.bitmap_index, 7);
    }

    #[test]
    fn test_force_to_current_screen_is_quiet() {
        let mut e = engine();
        assert_eq!(e.force_transition(ScreenId::Welcome), Redraw::None);
    }

    #[test]
    fn test_cursor_clamp_is_quiet() {
        let mut e = engine();
        assert_eq!(e.handle(InputEvent::Up), Redraw::None);
        assert_eq!(e.handle(InputEvent::None), Redraw::None);
    }

    #[test]
    fn test_settings_adjust() {
        let mut e = engine();
        e.force_transition(ScreenId::Settings);

        assert!(matches!(e.handle(InputEvent::Right), Redraw::Menu(_)));
        assert_eq!(e.settings().brightness, 9);

        e.handle(InputEvent::Down);
        e.handle(InputEvent::Left);
        assert!(!e.settings().sound);
        assert_eq!(e.screen(), ScreenId::Settings);

        for _ in 0..5 {
            e.handle(InputEvent::Up);
        }
        for _ in 0..20 {
            e.handle(InputEvent::Right);
        }
        assert_eq!(e.settings().brightness, 15);
        assert_eq!(e.handle(InputEvent::Right), Redraw::None);
    }

    #[test]
    fn test_finish_game_records_highscore() {
        let mut e = engine();
        e.handle(InputEvent::Select);

        let redraw = e.finish_game(GameOutcome::Lost, 120);
        assert_eq!(redraw.render_request().unwrap().screen(), ScreenId::EndGame);
        assert_eq!(e.highscore().score, 120);

        e.handle(InputEvent::Select);
        e.finish_game(GameOutcome::Won, 80);
        assert_eq!(e.screen(), ScreenId::WinGame);

        // Win screen leads to the stored record
        e.handle(InputEvent::Select);
        assert_eq!(e.screen(), ScreenId::Highscore);
        assert_eq!(
            *e.highscore(),
            HighscoreRecord {
                score: 120,
                games_won: 1
            }
        );
        assert_eq!(e.into_store().saves, 2);
    }

    #[test]
    fn test_lower_score_is_not_saved() {
        let mut e = engine();
        e.finish_game(GameOutcome::Lost, 50);
        e.force_transition(ScreenId::PlayGame);
        e.finish_game(GameOutcome::Lost, 10);
        assert_eq!(e.highscore().score, 50);
        assert_eq!(e.into_store().saves, 1);
    }

    #[test]
    fn test_corrupt_highscore_reads_empty() {
        let store = FakeStore {
            data: Some(vec![0x80]),
            ..FakeStore::default()
        };
        let mut e = NavigationEngine::new(store, Settings::default());
        e.force_transition(ScreenId::Highscore);
        assert_eq!(*e.highscore(), HighscoreRecord::default());
    }

    #[test]
    fn test_unreadable_highscore_is_not_overwritten() {
        let stored = HighscoreRecord {
            score: 1000,
            games_won: 5,
        };
        let mut store = FakeStore::default();
        stored.save(&mut store).unwrap();
        store.saves = 0;

        let mut e = NavigationEngine::new(store, Settings::default());
        e.force_transition(ScreenId::Highscore);
        assert_eq!(*e.highscore(), stored);

        e.force_transition(ScreenId::PlayGame);
        e.store.failing_reads = 1;
        e.finish_game(GameOutcome::Lost, 10);
        assert_eq!(e.screen(), ScreenId::EndGame);
        assert_eq!(*e.highscore(), stored);

        let mut store = e.into_store();
        assert_eq!(store.saves, 0);
        assert_eq!(HighscoreRecord::try_load(&mut store), Ok(stored));
    }

    #[test]
    fn test_unreadable_highscore_without_cache_is_not_saved() {
        let mut store = FakeStore::default();
        HighscoreRecord {
            score: 1000,
            games_won: 5,
        }
        .save(&mut store)
        .unwrap();
        store.saves = 0;
        store.failing_reads = 1;

        let mut e = NavigationEngine::new(store, Settings::default());
        e.finish_game(GameOutcome::Won, 10);
        assert_eq!(e.screen(), ScreenId::WinGame);

        let mut store = e.into_store();
        assert_eq!(store.saves, 0);
        assert_eq!(HighscoreRecord::try_load(&mut store).unwrap().score, 1000);
    }

    proptest! {
        #[test]
        fn prop_render_exactly_on_screen_change(events in proptest::collection::vec(any_event(), 0..60)) {
            let mut e = engine();
            for event in events {
                let before = e.screen();
                let redraw = e.handle(event);
                let changed = e.screen() != before;
                prop_assert_eq!(redraw.render_request().is_some(), changed);
                if let Some(request) = redraw.render_request() {
                    prop_assert_eq!(request.state, e.state());
                    prop_assert_eq!(request.bitmap_index as usize, e.screen().index());
                }
            }
        }
    }
}
