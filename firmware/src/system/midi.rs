//! Serial MIDI output.

use embedded_midi::MidiOut;
use midi_types::{Channel, Control, MidiMessage, Program, Value7};
use pedalo_control::Message;

use crate::system::hal::pac::USART1;
use crate::system::hal::serial::Tx;

/// Standard MIDI baud rate.
pub const BAUD_RATE: u32 = 31_250;

pub struct Midi {
    out: MidiOut<Tx<USART1>>,
}

impl Midi {
    #[must_use]
    pub fn new(tx: Tx<USART1>) -> Self {
        Self {
            out: MidiOut::new(tx),
        }
    }

    /// Send the message without waiting for any acknowledgment.
    ///
    /// MIDI offers no way to recover a lost message, so failures are only
    /// logged.
    pub fn send(&mut self, message: Message) {
        defmt::debug!(
            "Sending status={=u8:#x} data={:?}",
            message.status(),
            message.data()
        );
        if self.out.write(&into_midi_message(message)).is_err() {
            defmt::warn!("Dropped MIDI message={:?}", message);
        }
    }
}

fn into_midi_message(message: Message) -> MidiMessage {
    match message {
        Message::ControlChange {
            channel,
            controller,
            value,
        } => MidiMessage::ControlChange(
            Channel::from(channel),
            Control::from(controller),
            Value7::from(value),
        ),
        Message::ProgramChange { channel, program } => {
            MidiMessage::ProgramChange(Channel::from(channel), Program::from(program))
        }
    }
}
