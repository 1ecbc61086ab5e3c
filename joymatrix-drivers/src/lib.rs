//! Board-side adapters
//!
//! Implementations of the joymatrix-core capability traits on top of
//! `embedded-hal` 1.0 peripherals:
//!
//! - Analog joystick (two ADC channels and an active-low switch)
//! - Backlight line for a character LCD
//! - RAM-backed key-value store

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backlight;
pub mod joystick;
pub mod memory;

pub use backlight::BacklitLcd;
pub use joystick::{AdcReader, AnalogJoystick, AxisCalibration};
pub use memory::MemoryStore;
