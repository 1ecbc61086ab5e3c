//! LED matrix trait

/// Highest intensity level accepted by [`LedMatrix::set_brightness`]
pub const MAX_BRIGHTNESS: u8 = 15;

/// Trait for a chain of 8x8 LED matrix devices (MAX7219 class)
///
/// The driver owns the chip-select/clock protocol. Rows are addressed
/// top to bottom, and the most significant bit of a row byte is the
/// leftmost LED.
pub trait LedMatrix {
    /// Wake up and configure `device_count` chained devices
    fn init(&mut self, device_count: u8);

    /// Write one row of one device
    fn set_row(&mut self, device: u8, row: u8, bits: u8);

    /// Set the intensity (0 to [`MAX_BRIGHTNESS`])
    fn set_brightness(&mut self, device: u8, level: u8);

    /// Turn every LED of a device off
    fn clear(&mut self, device: u8);
}
