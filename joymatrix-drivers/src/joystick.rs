//! Analog joystick
//!
//! Two potentiometers on ADC channels plus a push switch to ground.
//! Raw readings are mapped to `-AXIS_MAX..=AXIS_MAX` around a calibrated
//! center, each half scaled separately so an off-center rest position
//! still reaches full deflection at both ends.

use embedded_hal::digital::InputPin;
use joymatrix_core::traits::joystick::AXIS_MAX;
use joymatrix_core::traits::{Joystick, SensorError};

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Read the raw conversion result
    #[allow(clippy::result_unit_err)]
    fn read(&mut self) -> Result<u16, ()>;
}

/// Mapping from raw ADC counts to a normalized axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisCalibration {
    /// Reading at rest
    pub center: u16,
    /// Largest possible reading
    pub adc_max: u16,
    /// Flip the sign (for axes wired high-to-low)
    pub inverted: bool,
}

impl AxisCalibration {
    /// 10-bit ADC, nominal center
    pub const TEN_BIT: Self = Self {
        center: 512,
        adc_max: 1023,
        inverted: false,
    };

    /// Same calibration with the sign flipped
    pub const fn inverted(self) -> Self {
        Self {
            inverted: !self.inverted,
            ..self
        }
    }

    /// Map a raw reading to `-AXIS_MAX..=AXIS_MAX`
    pub fn normalize(&self, raw: u16) -> Result<i16, SensorError> {
        if raw > self.adc_max {
            return Err(SensorError::OutOfRange);
        }

        let max = i32::from(AXIS_MAX);
        let (raw, center, top) = (
            i32::from(raw),
            i32::from(self.center),
            i32::from(self.adc_max),
        );
        let value = if raw >= center {
            let span = (top - center).max(1);
            (raw - center) * max / span
        } else {
            let span = center.max(1);
            (raw - center) * max / span
        };

        let value = value.clamp(-max, max) as i16;
        Ok(if self.inverted { -value } else { value })
    }
}

/// Analog joystick on two ADC channels and an active-low switch
pub struct AnalogJoystick<X, Y, SW> {
    x: X,
    y: Y,
    switch: SW,
    x_cal: AxisCalibration,
    y_cal: AxisCalibration,
}

impl<X, Y, SW> AnalogJoystick<X, Y, SW>
where
    X: AdcReader,
    Y: AdcReader,
    SW: InputPin,
{
    /// Create a joystick
    ///
    /// The switch pin needs its pull-up enabled by the caller.
    pub fn new(x: X, y: Y, switch: SW, x_cal: AxisCalibration, y_cal: AxisCalibration) -> Self {
        Self {
            x,
            y,
            switch,
            x_cal,
            y_cal,
        }
    }

    /// Take the current position as the rest position of both axes
    ///
    /// Call with the stick released.
    pub fn calibrate_center(&mut self) -> Result<(), SensorError> {
        let x = self.x.read().map_err(|_| SensorError::ConversionError)?;
        let y = self.y.read().map_err(|_| SensorError::ConversionError)?;
        if x > self.x_cal.adc_max || y > self.y_cal.adc_max {
            return Err(SensorError::OutOfRange);
        }
        self.x_cal.center = x;
        self.y_cal.center = y;
        Ok(())
    }

    /// Current calibration (x, y)
    pub fn calibration(&self) -> (AxisCalibration, AxisCalibration) {
        (self.x_cal, self.y_cal)
    }

    /// Release the channels and the switch pin
    pub fn release(self) -> (X, Y, SW) {
        (self.x, self.y, self.switch)
    }
}

impl<X, Y, SW> Joystick for AnalogJoystick<X, Y, SW>
where
    X: AdcReader,
    Y: AdcReader,
    SW: InputPin,
{
    fn read_axis_x(&mut self) -> Result<i16, SensorError> {
        let raw = self.x.read().map_err(|_| SensorError::ConversionError)?;
        self.x_cal.normalize(raw)
    }

    fn read_axis_y(&mut self) -> Result<i16, SensorError> {
        let raw = self.y.read().map_err(|_| SensorError::ConversionError)?;
        self.y_cal.normalize(raw)
    }

    fn read_button(&mut self) -> Result<bool, SensorError> {
        self.switch.is_low().map_err(|_| SensorError::PinError)
    }
}
