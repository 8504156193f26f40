//! Translation of latch transitions into outbound MIDI messages.

use crate::config::Config;
use crate::input::pot::MAX_VALUE;
use crate::latch::{LatchEvent, Transition};
use crate::toggle::ToggleState;

const CONTROL_CHANGE_STATUS: u8 = 0xB0;
const PROGRAM_CHANGE_STATUS: u8 = 0xC0;

/// Request to send a single MIDI message.
///
/// The channel is zero-indexed, 0 is what MIDI devices show as channel 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Message {
    ControlChange {
        channel: u8,
        controller: u8,
        value: u8,
    },
    ProgramChange {
        channel: u8,
        program: u8,
    },
}

impl Message {
    /// Status byte carrying the message kind and channel.
    #[must_use]
    pub fn status(&self) -> u8 {
        match self {
            Self::ControlChange { channel, .. } => CONTROL_CHANGE_STATUS | (channel & 0x0F),
            Self::ProgramChange { channel, .. } => PROGRAM_CHANGE_STATUS | (channel & 0x0F),
        }
    }

    /// Data bytes following the status, program change has only one.
    #[must_use]
    pub fn data(&self) -> (u8, Option<u8>) {
        match self {
            Self::ControlChange {
                controller, value, ..
            } => (*controller, Some(*value)),
            Self::ProgramChange { program, .. } => (*program, None),
        }
    }
}

/// Stateless mapping from pedal events to MIDI messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Emitter {
    channel: u8,
    pot_controller: u8,
}

impl Emitter {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            channel: config.channel,
            pot_controller: config.pot_controller,
        }
    }

    #[must_use]
    pub fn latch_message(&self, event: LatchEvent, state: &ToggleState) -> Message {
        match event.transition {
            Transition::On => self.control_change(controller_number(event.button, state), MAX_VALUE),
            Transition::Off => self.control_change(controller_number(event.button, state), 0),
            Transition::Program => Message::ProgramChange {
                channel: self.channel,
                program: event.button.saturating_sub(1).min(MAX_VALUE),
            },
        }
    }

    #[must_use]
    pub fn pot_message(&self, value: u8) -> Message {
        self.control_change(self.pot_controller, value)
    }

    fn control_change(&self, controller: u8, value: u8) -> Message {
        Message::ControlChange {
            channel: self.channel,
            controller: controller.min(MAX_VALUE),
            value: value.min(MAX_VALUE),
        }
    }
}

fn controller_number(button: u8, state: &ToggleState) -> u8 {
    button.saturating_add(state.preset.offset() / 2)
}
