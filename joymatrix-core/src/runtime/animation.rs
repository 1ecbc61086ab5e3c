//! Matrix animation timing
//!
//! The end-of-game screens blink their image. The timer only says when
//! to toggle; the main loop does the drawing.

/// Blink timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Blink {
    interval_ms: u16,
    last_toggle_ms: u32,
    lit: bool,
    active: bool,
}

impl Blink {
    /// Create a stopped timer toggling every `interval_ms`
    pub const fn new(interval_ms: u16) -> Self {
        Self {
            interval_ms,
            last_toggle_ms: 0,
            lit: true,
            active: false,
        }
    }

    /// Start blinking with the image shown
    pub fn start(&mut self, now_ms: u32) {
        self.active = self.interval_ms > 0;
        self.lit = true;
        self.last_toggle_ms = now_ms;
    }

    /// Stop blinking
    pub fn stop(&mut self) {
        self.active = false;
        self.lit = true;
    }

    /// Check if the timer is running
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Check if the image is currently shown
    pub fn is_lit(&self) -> bool {
        self.lit
    }

    /// Advance to `now_ms`
    ///
    /// Returns the new visibility when it toggles.
    pub fn step(&mut self, now_ms: u32) -> Option<bool> {
        if !self.active {
            return None;
        }
        if now_ms.wrapping_sub(self.last_toggle_ms) < u32::from(self.interval_ms) {
            return None;
        }
        self.last_toggle_ms = now_ms;
        self.lit = !self.lit;
        Some(self.lit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_timer_never_toggles() {
        let mut blink = Blink::new(400);
        assert_eq!(blink.step(10_000), None);
        assert!(blink.is_lit());
    }

    #[test]
    fn test_toggles_every_interval() {
        let mut blink = Blink::new(400);
        blink.start(1000);
        assert_eq!(blink.step(1200), None);
        assert_eq!(blink.step(1400), Some(false));
        assert_eq!(blink.step(1780), None);
        assert_eq!(blink.step(1800), Some(true));
    }

    #[test]
    fn test_stop_leaves_image_lit() {
        let mut blink = Blink::new(400);
        blink.start(0);
        blink.step(400);
        assert!(!blink.is_lit());
        blink.stop();
        assert!(blink.is_lit());
        assert_eq!(blink.step(800), None);
    }

    #[test]
    fn test_clock_wrap() {
        let mut blink = Blink::new(400);
        blink.start(u32::MAX - 100);
        assert_eq!(blink.step(u32::MAX), None);
        assert_eq!(blink.step(300), Some(false));
    }

    #[test]
    fn test_zero_interval_disables() {
        let mut blink = Blink::new(0);
        blink.start(0);
        assert!(!blink.is_active());
    }
}
