//! Structures used to pass the current state of hardware peripherals.

use super::pot;
use super::ButtonId;

/// The current state of all peripherals.
///
/// `Snapshot` is meant to be passed from the hardware binding to the
/// control package once per cycle. Buttons are already translated from
/// logic levels to pressed state, the potentiometer is already scaled to
/// the MIDI range. There is no debouncing, the caller is expected to pass
/// what it has just read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot<const N: usize> {
    pub mode: bool,
    pub preset: bool,
    pub signal: [bool; N],
    pub pot: Option<u8>,
}

impl<const N: usize> Default for Snapshot<N> {
    fn default() -> Self {
        Self {
            mode: false,
            preset: false,
            signal: [false; N],
            pot: None,
        }
    }
}

impl<const N: usize> Snapshot<N> {
    /// Build a snapshot from raw logic levels and ADC reading.
    ///
    /// Buttons are active-low with pull-ups, `true` level means released.
    /// The potentiometer is expected as a 10-bit ADC sample.
    #[must_use]
    pub fn from_levels(mode: bool, preset: bool, signal: [bool; N], pot_raw: Option<u16>) -> Self {
        Self {
            mode: !mode,
            preset: !preset,
            signal: signal.map(|level| !level),
            pot: pot_raw.map(pot::scale_adc),
        }
    }

    /// Signal buttons outside of the configured range are never pressed.
    #[must_use]
    pub fn pressed(&self, button: ButtonId) -> bool {
        match button {
            ButtonId::Mode => self.mode,
            ButtonId::Preset => self.preset,
            ButtonId::Signal(i) => (i as usize)
                .checked_sub(1)
                .and_then(|index| self.signal.get(index))
                .copied()
                .unwrap_or(false),
        }
    }
}
