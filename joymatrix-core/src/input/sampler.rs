//! Debounced joystick sampler
//!
//! Each tick the sampler reads both axes and the button, reduces them to a
//! single raw gesture and runs it through three stages:
//!
//! 1. Masking: a channel found stuck is ignored until it reads neutral.
//! 2. Settling: a gesture must be seen for `settle_ticks` consecutive
//!    ticks before it replaces the stable gesture.
//! 3. Latching: a gesture fires once, then nothing fires until both the
//!    stick and the button are back at rest.
//!
//! A button press resolves on release (Select) or when held for
//! `long_press_ticks` (Back). A latched gesture still held after
//! `stuck_ticks` is masked so the other channel keeps working.

use crate::config::SamplerConfig;
use crate::state::InputEvent;
use crate::traits::{Joystick, SensorError};

/// Stick direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn event(self) -> InputEvent {
        match self {
            Direction::Up => InputEvent::Up,
            Direction::Down => InputEvent::Down,
            Direction::Left => InputEvent::Left,
            Direction::Right => InputEvent::Right,
        }
    }
}

/// Input channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Channel {
    Stick,
    Button,
}

/// What the joystick is doing in one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Gesture {
    Neutral,
    Stick(Direction),
    Button,
}

impl Gesture {
    fn channel(self) -> Option<Channel> {
        match self {
            Gesture::Neutral => None,
            Gesture::Stick(_) => Some(Channel::Stick),
            Gesture::Button => Some(Channel::Button),
        }
    }
}

/// Latch state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Phase {
    /// Ready to fire
    Idle,
    /// Button down, not yet resolved; `ticks` counts the first held tick
    Pressing { ticks: u16 },
    /// Fired, waiting for rest; `ticks` counts the firing tick
    Latched { channel: Channel, ticks: u16 },
}

/// Joystick sampler
///
/// Call [`sample`](Self::sample) once per tick.
pub struct InputSampler {
    config: SamplerConfig,
    candidate: Gesture,
    candidate_ticks: u8,
    stable: Gesture,
    phase: Phase,
    stick_masked: bool,
    button_masked: bool,
}

impl InputSampler {
    /// Create a sampler at rest
    pub fn new(config: SamplerConfig) -> Self {
        Self {
            config,
            candidate: Gesture::Neutral,
            candidate_ticks: 0,
            stable: Gesture::Neutral,
            phase: Phase::Idle,
            stick_masked: false,
            button_masked: false,
        }
    }

    /// Sampler configuration
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Check if a channel is currently masked as stuck
    pub fn is_masked(&self) -> bool {
        self.stick_masked || self.button_masked
    }

    /// Read the joystick and produce this tick's event
    ///
    /// A failed read yields [`InputEvent::None`] and leaves the sampler
    /// state untouched.
    pub fn sample<J: Joystick>(&mut self, joystick: &mut J) -> InputEvent {
        match Self::read(joystick) {
            Ok((x, y, pressed)) => self.update(x, y, pressed),
            Err(e) => {
                debug!("Joystick read failed: {:?}", e);
                InputEvent::None
            }
        }
    }

    fn read<J: Joystick>(joystick: &mut J) -> Result<(i16, i16, bool), SensorError> {
        Ok((
            joystick.read_axis_x()?,
            joystick.read_axis_y()?,
            joystick.read_button()?,
        ))
    }

    /// Advance one tick with already-normalized readings
    pub fn update(&mut self, x: i16, y: i16, pressed: bool) -> InputEvent {
        let raw = self.mask(self.direction(x, y), pressed);
        self.settle(raw);
        self.latch()
    }

    /// Dominant stick direction outside the dead-zone
    fn direction(&self, x: i16, y: i16) -> Option<Direction> {
        let dz = self.config.dead_zone.unsigned_abs();
        let (ax, ay) = (x.unsigned_abs(), y.unsigned_abs());
        if ax <= dz && ay <= dz {
            return None;
        }

        // Ties go to the horizontal axis
        if ax >= ay {
            Some(if x > 0 {
                Direction::Right
            } else {
                Direction::Left
            })
        } else {
            Some(if y > 0 { Direction::Up } else { Direction::Down })
        }
    }

    /// Drop masked channels and combine the rest, button first
    fn mask(&mut self, direction: Option<Direction>, pressed: bool) -> Gesture {
        if self.stick_masked && direction.is_none() {
            debug!("Stick back at rest, unmasked");
            self.stick_masked = false;
        }
        if self.button_masked && !pressed {
            debug!("Button released, unmasked");
            self.button_masked = false;
        }

        if pressed && !self.button_masked {
            return Gesture::Button;
        }
        match direction {
            Some(d) if !self.stick_masked => Gesture::Stick(d),
            _ => Gesture::Neutral,
        }
    }

    fn settle(&mut self, raw: Gesture) {
        if raw == self.candidate {
            self.candidate_ticks = self.candidate_ticks.saturating_add(1);
        } else {
            self.candidate = raw;
            self.candidate_ticks = 1;
        }

        if self.candidate_ticks >= self.config.settle_ticks {
            self.stable = self.candidate;
        }
    }

    fn latch(&mut self) -> InputEvent {
        let gesture = self.stable;

        let (phase, event) = match self.phase {
            Phase::Idle => match gesture {
                Gesture::Neutral => (Phase::Idle, InputEvent::None),
                Gesture::Stick(d) => (
                    Phase::Latched {
                        channel: Channel::Stick,
                        ticks: 1,
                    },
                    d.event(),
                ),
                Gesture::Button => (Phase::Pressing { ticks: 1 }, InputEvent::None),
            },

            Phase::Pressing { ticks } => match gesture {
                Gesture::Button => {
                    let ticks = ticks.saturating_add(1);
                    if ticks >= self.config.long_press_ticks {
                        trace!("Long press after {} ticks", ticks);
                        (
                            Phase::Latched {
                                channel: Channel::Button,
                                ticks: 1,
                            },
                            InputEvent::Back,
                        )
                    } else {
                        (Phase::Pressing { ticks }, InputEvent::None)
                    }
                }
                // Released before the long press: a click
                Gesture::Neutral => (Phase::Idle, InputEvent::Select),
                Gesture::Stick(_) => (
                    Phase::Latched {
                        channel: Channel::Stick,
                        ticks: 1,
                    },
                    InputEvent::Select,
                ),
            },

            Phase::Latched { channel, ticks } => match gesture.channel() {
                None => (Phase::Idle, InputEvent::None),
                Some(active) if active != channel => (
                    Phase::Latched {
                        channel: active,
                        ticks: 1,
                    },
                    InputEvent::None,
                ),
                Some(_) => {
                    let ticks = ticks.saturating_add(1);
                    if ticks >= self.config.stuck_ticks {
                        self.mask_channel(channel);
                        (Phase::Idle, InputEvent::None)
                    } else {
                        (Phase::Latched { channel, ticks }, InputEvent::None)
                    }
                }
            },
        };

        self.phase = phase;
        event
    }

    fn mask_channel(&mut self, channel: Channel) {
        warn!("{:?} held too long, masking until released", channel);
        match channel {
            Channel::Stick => self.stick_masked = true,
            Channel::Button => self.button_masked = true,
        }
        // Forget the stuck gesture so the other channel settles afresh
        self.candidate = Gesture::Neutral;
        self.candidate_ticks = 0;
        self.stable = Gesture::Neutral;
    }
}

impl Default for InputSampler {
    fn default() -> Self {
        Self::new(SamplerConfig::default())
    }
}
