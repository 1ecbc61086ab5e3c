//! Board-agnostic core logic for the joymatrix handheld
//!
//! This crate contains everything above the peripheral drivers:
//!
//! - Hardware capability traits (LCD, LED matrix, joystick, buzzer, storage)
//! - Asset tables (matrix icons, LCD glyphs, screen text)
//! - Joystick sampling with dead-zone and debounce
//! - Screen state machine and navigation engine
//! - Display adapters for the LCD and the matrix
//! - Cooperative main loop with sound feedback and animation timing
//! - Pin map and tuning configuration

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod assets;
pub mod config;
pub mod input;
pub mod navigation;
pub mod render;
pub mod runtime;
pub mod state;
pub mod traits;
