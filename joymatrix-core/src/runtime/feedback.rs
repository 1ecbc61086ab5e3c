//! Sound feedback
//!
//! Picks a beep for what happened in a tick. Entering an end-of-game
//! screen has its own tune; otherwise a handled event beeps by kind.

use crate::config::{FeedbackConfig, Tone};
use crate::navigation::Redraw;
use crate::state::{InputEvent, ScreenId};
use crate::traits::Buzzer;

/// Tone for an event and its effect, if any
pub fn tone_for(event: InputEvent, redraw: &Redraw, config: &FeedbackConfig) -> Option<Tone> {
    match redraw {
        Redraw::None => None,
        Redraw::Screen(request) if request.screen() == ScreenId::EndGame => Some(config.lose),
        Redraw::Screen(request) if request.screen() == ScreenId::WinGame => Some(config.win),
        _ => match event {
            InputEvent::Select => Some(config.select),
            InputEvent::Back => Some(config.back),
            e if e.is_direction() => Some(config.cursor),
            _ => None,
        },
    }
}

/// Play a tone
pub fn play<B: Buzzer>(buzzer: &mut B, tone: Tone) {
    trace!("Beep {} Hz {} ms", tone.frequency_hz, tone.duration_ms);
    buzzer.tone(tone.frequency_hz, tone.duration_ms);
}
