//! LCD backlight timeout

/// Idle timer for the LCD backlight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BacklightTimer {
    timeout_ms: u32,
    last_input_ms: u32,
    on: bool,
}

impl BacklightTimer {
    /// Create a timer; a zero timeout never switches off
    pub const fn new(timeout_ms: u32) -> Self {
        Self {
            timeout_ms,
            last_input_ms: 0,
            on: false,
        }
    }

    /// Record user activity
    pub fn poke(&mut self, now_ms: u32) {
        self.last_input_ms = now_ms;
    }

    /// Check if the backlight is on
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Work out the backlight state at `now_ms`
    ///
    /// `allowed` is the user setting. Returns the new state when it
    /// changes.
    pub fn update(&mut self, now_ms: u32, allowed: bool) -> Option<bool> {
        let idle = now_ms.wrapping_sub(self.last_input_ms);
        let timed_out = self.timeout_ms > 0 && idle >= self.timeout_ms;
        let on = allowed && !timed_out;
        if on == self.on {
            return None;
        }
        self.on = on;
        Some(on)
    }
}
