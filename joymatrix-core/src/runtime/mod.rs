//! Runtime
//!
//! The fixed-cadence loop that ties the sampler, the engine and the
//! display adapters together, plus its timers and sound feedback.

pub mod animation;
pub mod backlight;
pub mod feedback;
pub mod main_loop;

pub use animation::Blink;
pub use backlight::BacklightTimer;
pub use main_loop::{MainLoop, Peripherals};
