//! Buzzer trait

/// Trait for a passive buzzer
///
/// `tone` starts a square wave and returns immediately; the driver stops
/// it after `duration_ms`. A new tone replaces one still playing.
pub trait Buzzer {
    /// Play `frequency_hz` for `duration_ms`
    fn tone(&mut self, frequency_hz: u16, duration_ms: u16);
}
