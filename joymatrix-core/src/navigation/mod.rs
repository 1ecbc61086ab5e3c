//! Navigation engine
//!
//! Applies input events to the screen state machine, keeps the user
//! settings and the highscore, and decides what needs redrawing.

pub mod engine;
pub mod highscore;
pub mod settings;

pub use engine::{NavigationEngine, Redraw, RenderRequest};
pub use highscore::HighscoreRecord;
pub use settings::Settings;
