//! Tuning configuration
//!
//! Timing and feedback parameters. Stored as postcard-serialized binary
//! data under [`StorageKey::DeviceConfig`](crate::traits::StorageKey).

use serde::{Deserialize, Serialize};

use crate::navigation::Settings;
use crate::traits::joystick::AXIS_MAX;
use crate::traits::matrix::MAX_BRIGHTNESS;
use crate::traits::StorageError;

/// Layout version of the stored configuration
pub const CONFIG_VERSION: u8 = 1;

/// Longest tick that still keeps input-to-render latency under 50 ms
pub const MAX_TICK_MS: u16 = 50;

/// Input sampler configuration
///
/// Durations are in ticks of the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SamplerConfig {
    /// Neutral band around center, in permille of full deflection
    pub dead_zone: i16,
    /// Consecutive ticks a gesture must be seen before it counts
    pub settle_ticks: u8,
    /// Held ticks, the first included, on which a press becomes Back
    pub long_press_ticks: u16,
    /// Held ticks, the firing one included, on which a gesture is masked as stuck
    pub stuck_ticks: u16,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            dead_zone: 300,
            settle_ticks: 1,
            long_press_ticks: 25, // 500 ms at 20 ms ticks
            stuck_ticks: 150,     // 3 s
        }
    }
}

/// A buzzer beep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tone {
    pub frequency_hz: u16,
    pub duration_ms: u16,
}

impl Tone {
    pub const fn new(frequency_hz: u16, duration_ms: u16) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }
}

/// Sound feedback configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FeedbackConfig {
    /// Button click
    pub select: Tone,
    /// Long press
    pub back: Tone,
    /// Cursor or setting change
    pub cursor: Tone,
    /// Entering the game-over screen
    pub lose: Tone,
    /// Entering the win screen
    pub win: Tone,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            select: Tone::new(1000, 30),
            back: Tone::new(500, 30),
            cursor: Tone::new(2000, 10),
            lose: Tone::new(200, 400),
            win: Tone::new(1500, 400),
        }
    }
}

/// Main loop configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LoopConfig {
    /// Tick period
    pub tick_ms: u16,
    /// Half period of the end-of-game matrix blink
    pub blink_ms: u16,
    /// Idle time before the backlight switches off (0 = never)
    pub backlight_timeout_ms: u32,
    /// Chained matrix devices
    pub matrix_devices: u8,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            tick_ms: 20,
            blink_ms: 400,
            backlight_timeout_ms: 30_000,
            matrix_devices: 1,
        }
    }
}

/// Complete device configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceConfig {
    /// Layout version (must be [`CONFIG_VERSION`])
    pub version: u8,
    pub sampler: SamplerConfig,
    pub main_loop: LoopConfig,
    pub feedback: FeedbackConfig,
    /// Settings at power-on
    pub settings: Settings,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            sampler: SamplerConfig::default(),
            main_loop: LoopConfig::default(),
            feedback: FeedbackConfig::default(),
            settings: Settings::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Storage read or write failed
    Storage(StorageError),
    /// Stored bytes are not a valid configuration
    Decode,
    /// Buffer too small to encode the configuration
    Encode,
    /// Stored layout version differs from [`CONFIG_VERSION`]
    VersionMismatch,
    /// Dead-zone must be inside (0, AXIS_MAX)
    DeadZone,
    /// Settle, long press and stuck windows must be increasing and non-zero
    DebounceWindows,
    /// Tick period must be 1..=MAX_TICK_MS
    TickPeriod,
    /// At least one matrix device is required
    MatrixDevices,
    /// Brightness above MAX_BRIGHTNESS
    Brightness,
}

impl From<StorageError> for ConfigError {
    fn from(e: StorageError) -> Self {
        ConfigError::Storage(e)
    }
}

impl DeviceConfig {
    /// Check the configuration for values the loop cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::VersionMismatch);
        }

        let s = &self.sampler;
        if s.dead_zone <= 0 || s.dead_zone >= AXIS_MAX {
            return Err(ConfigError::DeadZone);
        }
        if s.settle_ticks == 0
            || s.long_press_ticks <= u16::from(s.settle_ticks)
            || s.stuck_ticks <= s.long_press_ticks
        {
            return Err(ConfigError::DebounceWindows);
        }

        let l = &self.main_loop;
        if l.tick_ms == 0 || l.tick_ms > MAX_TICK_MS {
            return Err(ConfigError::TickPeriod);
        }
        if l.matrix_devices == 0 {
            return Err(ConfigError::MatrixDevices);
        }

        if self.settings.brightness > MAX_BRIGHTNESS {
            return Err(ConfigError::Brightness);
        }

        Ok(())
    }
}
