//! Screen state machine
//!
//! Defines which screen follows which. The state machine is explicit,
//! finite, and deterministic.

pub mod events;
pub mod machine;
pub mod menu;

pub use events::{GameOutcome, InputEvent};
pub use machine::{NavigationState, ScreenId};
pub use menu::{MenuEntry, SettingRow, WELCOME_MENU};
