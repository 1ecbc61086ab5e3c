//! Main loop
//!
//! One tick: sample the joystick, apply the event, redraw what changed,
//! beep, step the blink animation, then update the backlight. Everything
//! runs to completion inside the tick; nothing is queued between ticks.

use embedded_hal::delay::DelayNs;

use super::animation::Blink;
use super::backlight::BacklightTimer;
use super::feedback;
use crate::config::{ConfigError, DeviceConfig, FeedbackConfig, LoopConfig};
use crate::input::InputSampler;
use crate::navigation::{NavigationEngine, Redraw};
use crate::render::{LcdAdapter, MatrixAdapter};
use crate::state::{GameOutcome, InputEvent, NavigationState, ScreenId};
use crate::traits::{Buzzer, CharacterLcd, Joystick, KeyValueStore, LedMatrix};

/// Peripherals driven by the main loop
pub struct Peripherals<L, M, J, B> {
    /// 16x2 text display
    pub lcd: L,
    /// 8x8 LED matrix chain
    pub matrix: M,
    /// Navigation input
    pub joystick: J,
    /// Feedback tones
    pub buzzer: B,
}

/// Cooperative main loop
pub struct MainLoop<L, M, J, B, S>
where
    L: CharacterLcd,
    M: LedMatrix,
    J: Joystick,
    B: Buzzer,
    S: KeyValueStore,
{
    io: Peripherals<L, M, J, B>,
    sampler: InputSampler,
    engine: NavigationEngine<S>,
    config: LoopConfig,
    feedback: FeedbackConfig,
    blink: Blink,
    backlight: BacklightTimer,
    brightness: u8,
    now_ms: u32,
}

impl<L, M, J, B, S> MainLoop<L, M, J, B, S>
where
    L: CharacterLcd,
    M: LedMatrix,
    J: Joystick,
    B: Buzzer,
    S: KeyValueStore,
{
    /// Create the loop; call [`boot`](Self::boot) before the first tick
    ///
    /// Fails if `config` does not pass [`DeviceConfig::validate`].
    pub fn new(
        io: Peripherals<L, M, J, B>,
        store: S,
        config: &DeviceConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            io,
            sampler: InputSampler::new(config.sampler),
            engine: NavigationEngine::new(store, config.settings),
            config: config.main_loop,
            feedback: config.feedback,
            blink: Blink::new(config.main_loop.blink_ms),
            backlight: BacklightTimer::new(config.main_loop.backlight_timeout_ms),
            brightness: config.settings.brightness,
            now_ms: 0,
        })
    }

    /// Bring up the displays and show the welcome screen
    pub fn boot(&mut self, now_ms: u32) {
        info!("Booting at {} ms", now_ms);
        self.now_ms = now_ms;

        self.io.lcd.init();
        LcdAdapter::install_glyphs(&mut self.io.lcd);
        self.backlight.poke(now_ms);
        self.update_backlight();

        self.io.matrix.init(self.config.matrix_devices);
        self.brightness = self.engine.settings().brightness;
        MatrixAdapter::apply_brightness(
            &mut self.io.matrix,
            self.config.matrix_devices,
            self.brightness,
        );

        let request = self.engine.current_request();
        self.draw_screen(request.state);
    }

    /// Run one tick at `now_ms`
    ///
    /// Returns what was redrawn in response to input.
    pub fn tick(&mut self, now_ms: u32) -> Redraw {
        self.now_ms = now_ms;

        let event = self.sampler.sample(&mut self.io.joystick);
        if event.is_some() {
            trace!("Input {:?}", event);
            self.backlight.poke(now_ms);
        }

        let redraw = self.engine.handle(event);
        self.apply(event, redraw);

        if let Some(lit) = self.blink.step(now_ms) {
            if lit {
                MatrixAdapter::render(&mut self.io.matrix, self.engine.screen());
            } else {
                MatrixAdapter::blank(&mut self.io.matrix);
            }
        }

        self.update_backlight();
        redraw
    }

    /// Land on a screen without input and draw it
    pub fn force_transition(&mut self, screen: ScreenId) -> Redraw {
        let redraw = self.engine.force_transition(screen);
        self.after_game_signal(redraw)
    }

    /// Report a finished game and show its outcome
    pub fn finish_game(&mut self, outcome: GameOutcome, score: u32) -> Redraw {
        let redraw = self.engine.finish_game(outcome, score);
        self.after_game_signal(redraw)
    }

    /// Tick forever, sleeping `tick_ms` in between
    pub fn run<D: DelayNs>(&mut self, mut delay: D) -> ! {
        let tick_ms = u32::from(self.config.tick_ms);
        let mut now_ms = self.now_ms;
        info!("Main loop running every {} ms", tick_ms);
        loop {
            self.tick(now_ms);
            delay.delay_ms(tick_ms);
            now_ms = now_ms.wrapping_add(tick_ms);
        }
    }

    /// Navigation engine
    pub fn engine(&self) -> &NavigationEngine<S> {
        &self.engine
    }

    /// Peripherals
    pub fn peripherals(&self) -> &Peripherals<L, M, J, B> {
        &self.io
    }

    /// Mutable peripherals
    pub fn peripherals_mut(&mut self) -> &mut Peripherals<L, M, J, B> {
        &mut self.io
    }

    fn after_game_signal(&mut self, redraw: Redraw) -> Redraw {
        if redraw.is_some() {
            self.backlight.poke(self.now_ms);
        }
        self.apply(InputEvent::None, redraw);
        self.update_backlight();
        redraw
    }

    fn apply(&mut self, event: InputEvent, redraw: Redraw) {
        match redraw {
            Redraw::None => {}
            Redraw::Menu(state) => {
                self.draw_text(&state);
                self.sync_brightness();
            }
            Redraw::Screen(request) => self.draw_screen(request.state),
        }

        if self.engine.settings().sound {
            if let Some(tone) = feedback::tone_for(event, &redraw, &self.feedback) {
                feedback::play(&mut self.io.buzzer, tone);
            }
        }
    }

    fn draw_screen(&mut self, state: NavigationState) {
        self.draw_text(&state);
        MatrixAdapter::render(&mut self.io.matrix, state.screen);

        if matches!(state.screen, ScreenId::EndGame | ScreenId::WinGame) {
            self.blink.start(self.now_ms);
        } else {
            self.blink.stop();
        }
    }

    fn draw_text(&mut self, state: &NavigationState) {
        let highscore = if state.screen == ScreenId::Highscore {
            Some(self.engine.highscore())
        } else {
            None
        };
        LcdAdapter::render(&mut self.io.lcd, state, self.engine.settings(), highscore);
    }

    fn sync_brightness(&mut self) {
        let level = self.engine.settings().brightness;
        if level != self.brightness {
            debug!("Matrix brightness {}", level);
            self.brightness = level;
            MatrixAdapter::apply_brightness(&mut self.io.matrix, self.config.matrix_devices, level);
        }
    }

    fn update_backlight(&mut self) {
        let allowed = self.engine.settings().backlight;
        if let Some(on) = self.backlight.update(self.now_ms, allowed) {
            debug!("Backlight {}", on);
            self.io.lcd.set_backlight(on);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{Glyph, IMAGES};
    use crate::config::Tone;
    use crate::traits::{SensorError, StorageError, StorageKey};

    #[derive(Default)]
    struct FakeLcd {
        rows: [std::string::String; 2],
        row: usize,
        backlight: Option<bool>,
        glyphs: usize,
        writes: usize,
    }

    impl CharacterLcd for FakeLcd {
        fn init(&mut self) {}
        fn clear(&mut self) {}

        fn set_cursor(&mut self, _col: u8, row: u8) {
            self.row = row as usize;
            self.rows[self.row].clear();
        }

        fn write_text(&mut self, text: &str) {
            self.rows[self.row].push_str(text);
            self.writes += 1;
        }

        fn set_backlight(&mut self, on: bool) {
            self.backlight = Some(on);
        }

        fn define_glyph(&mut self, _index: u8, _glyph: &Glyph) {
            self.glyphs += 1;
        }
    }

    #[derive(Default)]
    struct FakeMatrix {
        rows: [u8; 8],
        brightness: Option<u8>,
        devices: u8,
        row_writes: usize,
    }

    impl LedMatrix for FakeMatrix {
        fn init(&mut self, device_count: u8) {
            self.devices = device_count;
        }

        fn set_row(&mut self, _device: u8, row: u8, bits: u8) {
            self.rows[row as usize] = bits;
            self.row_writes += 1;
        }

        fn set_brightness(&mut self, _device: u8, level: u8) {
            self.brightness = Some(level);
        }

        fn clear(&mut self, _device: u8) {
            self.rows = [0; 8];
        }
    }

    /// Joystick whose position the test sets before each tick
    #[derive(Default)]
    struct FakeJoystick {
        x: i16,
        y: i16,
        pressed: bool,
    }

    impl Joystick for FakeJoystick {
        fn read_axis_x(&mut self) -> Result<i16, SensorError> {
            Ok(self.x)
        }

        fn read_axis_y(&mut self) -> Result<i16, SensorError> {
            Ok(self.y)
        }

        fn read_button(&mut self) -> Result<bool, SensorError> {
            Ok(self.pressed)
        }
    }

    #[derive(Default)]
    struct FakeBuzzer {
        tones: Vec<Tone>,
    }

    impl Buzzer for FakeBuzzer {
        fn tone(&mut self, frequency_hz: u16, duration_ms: u16) {
            self.tones.push(Tone::new(frequency_hz, duration_ms));
        }
    }

    #[derive(Default)]
    struct FakeStore {
        data: Option<Vec<u8>>,
    }

    impl KeyValueStore for FakeStore {
        fn load(&mut self, _key: StorageKey, buffer: &mut [u8]) -> Result<usize, StorageError> {
            let data = self.data.as_ref().ok_or(StorageError::NotFound)?;
            buffer[..data.len()].copy_from_slice(data);
            Ok(data.len())
        }

        fn save(&mut self, _key: StorageKey, data: &[u8]) -> Result<(), StorageError> {
            self.data = Some(data.to_vec());
            Ok(())
        }
    }

    type TestLoop = MainLoop<FakeLcd, FakeMatrix, FakeJoystick, FakeBuzzer, FakeStore>;

    fn peripherals() -> Peripherals<FakeLcd, FakeMatrix, FakeJoystick, FakeBuzzer> {
        Peripherals {
            lcd: FakeLcd::default(),
            matrix: FakeMatrix::default(),
            joystick: FakeJoystick::default(),
            buzzer: FakeBuzzer::default(),
        }
    }

    fn booted() -> TestLoop {
        let mut main_loop =
            MainLoop::new(peripherals(), FakeStore::default(), &DeviceConfig::default()).unwrap();
        main_loop.boot(0);
        main_loop
    }

    /// Tick 20 ms at a time with the joystick held as given
    fn hold(main_loop: &mut TestLoop, now: &mut u32, x: i16, y: i16, pressed: bool) -> Redraw {
        let js = &mut main_loop.peripherals_mut().joystick;
        js.x = x;
        js.y = y;
        js.pressed = pressed;
        *now += 20;
        main_loop.tick(*now)
    }

    fn click(main_loop: &mut TestLoop, now: &mut u32) -> Redraw {
        hold(main_loop, now, 0, 0, true);
        hold(main_loop, now, 0, 0, false)
    }

    fn lcd_row(main_loop: &TestLoop, row: usize) -> &str {
        &main_loop.peripherals().lcd.rows[row]
    }

    #[test]
    fn test_boot_shows_welcome() {
        let main_loop = booted();
        let io = main_loop.peripherals();
        assert_eq!(io.lcd.glyphs, 2);
        assert_eq!(io.lcd.backlight, Some(true));
        assert_eq!(io.matrix.devices, 1);
        assert_eq!(io.matrix.brightness, Some(8));
        assert_eq!(io.matrix.rows, IMAGES[0]);
        assert!(lcd_row(&main_loop, 0).starts_with("Main menu"));
    }

    #[test]
    fn test_click_starts_game() {
        let mut main_loop = booted();
        let mut now = 0;
        let redraw = click(&mut main_loop, &mut now);

        let request = redraw.render_request().unwrap();
        assert_eq!(request.bitmap_index, 1);
        let io = main_loop.peripherals();
        assert_eq!(io.matrix.rows, IMAGES[1]);
        assert_eq!(io.buzzer.tones, [Tone::new(1000, 30)]);
        assert!(lcd_row(&main_loop, 0).starts_with("Playing"));
    }

    #[test]
    fn test_down_then_click_opens_settings() {
        let mut main_loop = booted();
        let mut now = 0;

        let redraw = hold(&mut main_loop, &mut now, 0, -900, false);
        assert!(matches!(redraw, Redraw::Menu(_)));
        // Cursor moves redraw the text only
        assert_eq!(main_loop.peripherals().matrix.row_writes, 8);
        assert!(lcd_row(&main_loop, 1).starts_with("> Settings"));

        hold(&mut main_loop, &mut now, 0, 0, false);
        let request = click(&mut main_loop, &mut now).render_request().unwrap();
        assert_eq!(request.bitmap_index, 3);
        assert_eq!(main_loop.peripherals().matrix.rows, IMAGES[3]);
    }

    #[test]
    fn test_diagonal_resolves_to_right() {
        let mut main_loop = booted();
        let mut now = 0;
        hold(&mut main_loop, &mut now, 900, 100, false);
        assert_eq!(main_loop.engine().screen(), ScreenId::Settings);
    }

    #[test]
    fn test_forced_win_from_game() {
        let mut main_loop = booted();
        let mut now = 0;
        click(&mut main_loop, &mut now);

        let request = main_loop
            .force_transition(ScreenId::WinGame)
            .render_request()
            .unwrap();
        assert_eq!(request.bitmap_index, 7);
        assert_eq!(main_loop.engine().screen(), ScreenId::WinGame);
        assert_eq!(main_loop.peripherals().matrix.rows, IMAGES[7]);
        assert_eq!(
            main_loop.peripherals().buzzer.tones.last(),
            Some(&Tone::new(1500, 400))
        );
    }

    #[test]
    fn test_end_screen_blinks_without_redraw() {
        let mut main_loop = booted();
        let mut now = 0;
        click(&mut main_loop, &mut now);
        main_loop.finish_game(GameOutcome::Lost, 10);
        let lcd_writes = main_loop.peripherals().lcd.writes;

        let mut blanked = false;
        let mut relit = false;
        for _ in 0..50 {
            let redraw = hold(&mut main_loop, &mut now, 0, 0, false);
            assert_eq!(redraw, Redraw::None);
            let rows = main_loop.peripherals().matrix.rows;
            if rows == [0; 8] {
                blanked = true;
            } else if blanked && rows == IMAGES[6] {
                relit = true;
            }
        }
        assert!(blanked && relit);
        assert_eq!(main_loop.peripherals().lcd.writes, lcd_writes);
    }

    #[test]
    fn test_leaving_end_screen_stops_blink() {
        let mut main_loop = booted();
        let mut now = 0;
        main_loop.force_transition(ScreenId::PlayGame);
        main_loop.finish_game(GameOutcome::Lost, 10);
        for _ in 0..20 {
            hold(&mut main_loop, &mut now, 0, 0, false);
        }

        click(&mut main_loop, &mut now);
        assert_eq!(main_loop.engine().screen(), ScreenId::PlayGame);
        for _ in 0..50 {
            hold(&mut main_loop, &mut now, 0, 0, false);
            assert_eq!(main_loop.peripherals().matrix.rows, IMAGES[1]);
        }
    }

    #[test]
    fn test_sound_off_silences_feedback() {
        let mut main_loop = booted();
        let mut now = 0;

        // Welcome -> Settings, Down to Sound, Left toggles it off
        hold(&mut main_loop, &mut now, 900, 0, false);
        hold(&mut main_loop, &mut now, 0, 0, false);
        hold(&mut main_loop, &mut now, 0, -900, false);
        hold(&mut main_loop, &mut now, 0, 0, false);
        hold(&mut main_loop, &mut now, -900, 0, false);
        hold(&mut main_loop, &mut now, 0, 0, false);
        assert!(!main_loop.engine().settings().sound);

        let beeps = main_loop.peripherals().buzzer.tones.len();
        click(&mut main_loop, &mut now);
        assert_eq!(main_loop.engine().screen(), ScreenId::Welcome);
        assert_eq!(main_loop.peripherals().buzzer.tones.len(), beeps);
    }

    #[test]
    fn test_brightness_setting_reaches_matrix() {
        let mut main_loop = booted();
        let mut now = 0;
        hold(&mut main_loop, &mut now, 900, 0, false);
        hold(&mut main_loop, &mut now, 0, 0, false);
        hold(&mut main_loop, &mut now, 900, 0, false);
        assert_eq!(main_loop.peripherals().matrix.brightness, Some(9));
        assert!(lcd_row(&main_loop, 1).starts_with("> Bright"));
    }

    #[test]
    fn test_backlight_timeout_and_wake() {
        let mut main_loop = booted();
        let mut now = 0;
        while now < 30_000 {
            hold(&mut main_loop, &mut now, 0, 0, false);
        }
        assert_eq!(main_loop.peripherals().lcd.backlight, Some(false));

        hold(&mut main_loop, &mut now, 0, -900, false);
        assert_eq!(main_loop.peripherals().lcd.backlight, Some(true));
    }

    #[test]
    fn test_backlight_setting_forces_off() {
        let mut main_loop = booted();
        let mut now = 0;
        hold(&mut main_loop, &mut now, 900, 0, false);
        hold(&mut main_loop, &mut now, 0, 0, false);
        for _ in 0..2 {
            hold(&mut main_loop, &mut now, 0, -900, false);
            hold(&mut main_loop, &mut now, 0, 0, false);
        }
        hold(&mut main_loop, &mut now, 900, 0, false);
        assert!(!main_loop.engine().settings().backlight);
        assert_eq!(main_loop.peripherals().lcd.backlight, Some(false));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = DeviceConfig::default();
        config.main_loop.tick_ms = 0;
        let result = TestLoop::new(peripherals(), FakeStore::default(), &config);
        assert_eq!(result.err(), Some(ConfigError::TickPeriod));
    }

    #[test]
    fn test_long_press_goes_back() {
        let mut main_loop = booted();
        let mut now = 0;
        click(&mut main_loop, &mut now);
        assert_eq!(main_loop.engine().screen(), ScreenId::PlayGame);

        for _ in 0..30 {
            hold(&mut main_loop, &mut now, 0, 0, true);
        }
        hold(&mut main_loop, &mut now, 0, 0, false);
        assert_eq!(main_loop.engine().screen(), ScreenId::Welcome);
        assert_eq!(
            main_loop.peripherals().buzzer.tones.last(),
            Some(&Tone::new(500, 30))
        );
    }
}
