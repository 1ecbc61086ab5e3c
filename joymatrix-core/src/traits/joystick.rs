//! Joystick trait

/// Full-scale deflection of a normalized axis
pub const AXIS_MAX: i16 = 1000;

/// Errors that can occur while reading the joystick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// ADC conversion failed or timed out
    ConversionError,
    /// GPIO read failed
    PinError,
    /// Reading outside the physically possible range
    OutOfRange,
}

/// Trait for a two-axis analog joystick with a push button
///
/// Axis values are normalized to `-AXIS_MAX..=AXIS_MAX` (permille of full
/// deflection). Positive X is right, positive Y is up.
///
/// Takes `&mut self` because ADC reads typically require mutable access.
pub trait Joystick {
    /// Read the horizontal axis
    fn read_axis_x(&mut self) -> Result<i16, SensorError>;

    /// Read the vertical axis
    fn read_axis_y(&mut self) -> Result<i16, SensorError>;

    /// Read the push button (`true` = pressed)
    fn read_button(&mut self) -> Result<bool, SensorError>;
}
