//! Hardware capability traits
//!
//! These traits define the interface between the navigation logic and the
//! peripheral drivers. Everything behind them (HD44780 timing, MAX7219
//! shifting, ADC sampling, tone generation, the storage medium) belongs to
//! the board.

pub mod buzzer;
pub mod joystick;
pub mod lcd;
pub mod matrix;
pub mod storage;

pub use buzzer::Buzzer;
pub use joystick::{Joystick, SensorError};
pub use lcd::CharacterLcd;
pub use matrix::LedMatrix;
pub use storage::{KeyValueStore, StorageError, StorageKey};
