//! Joystick input
//!
//! Turns raw axis and button readings into at most one [`InputEvent`]
//! per tick.
//!
//! [`InputEvent`]: crate::state::InputEvent

pub mod sampler;

pub use sampler::InputSampler;
