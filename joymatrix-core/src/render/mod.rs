//! Display adapters
//!
//! Stateless facades that turn navigation state into driver calls. The
//! LCD shows text, the LED matrix shows the screen's image.

pub mod frame;
pub mod lcd;
pub mod matrix;

pub use frame::TextFrame;
pub use lcd::LcdAdapter;
pub use matrix::MatrixAdapter;
