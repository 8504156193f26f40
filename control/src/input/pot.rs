//! Pot abstraction tracking its state over time.

/// Highest value representable in a MIDI data byte.
pub const MAX_VALUE: u8 = 127;

/// Scale a 10-bit ADC sample down to the 7-bit MIDI range.
///
/// The division truncates, readings above the 10-bit range saturate.
#[must_use]
pub fn scale_adc(raw: u16) -> u8 {
    (raw / 8).min(MAX_VALUE as u16) as u8
}

/// Abstraction of a potentiometer.
///
/// Use it to detect that the pot moved since the value was last sent.
/// There is no smoothening, any change of the scaled value counts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pot {
    last_sent: u8,
}

impl Pot {
    /// Returns the new value if it differs from the last one sent.
    pub fn update(&mut self, value: u8) -> Option<u8> {
        if value == self.last_sent {
            None
        } else {
            self.last_sent = value;
            Some(value)
        }
    }

    #[must_use]
    pub fn value(&self) -> u8 {
        self.last_sent
    }
}
