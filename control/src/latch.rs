//! Per-control latches of signal buttons.
//!
//! Each signal button owns a latch remembering whether its control is
//! currently asserted, plus a guard making sure one physical press is
//! handled only once. The behavior of all latches derives from the shared
//! toggle state, none of them can pick its own mode.

use heapless::Vec;

use crate::config::MAX_SIGNAL_BUTTONS;
use crate::toggle::{Command, HoldMode, ToggleState};

/// Change of a single control requested by a latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Control change to the maximal value.
    On,
    /// Control change to zero.
    Off,
    /// Program change, no latching involved.
    Program,
}

/// Transition of a signal button, indexed from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LatchEvent {
    pub button: u8,
    pub transition: Transition,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlLatch {
    /// Mirrors whether the "on" value was the last one sent.
    pub asserted: bool,
    /// Set while the physical button stays held after its press was handled.
    pub edge_consumed: bool,
}

impl ControlLatch {
    pub fn update(&mut self, pressed: bool, state: &ToggleState) -> Option<Transition> {
        if pressed {
            if self.edge_consumed {
                return None;
            }
            self.edge_consumed = true;
            match state.command {
                Command::ControlChange => {
                    if !self.asserted {
                        self.asserted = true;
                        Some(Transition::On)
                    } else if state.hold_mode == HoldMode::Latching {
                        self.asserted = false;
                        Some(Transition::Off)
                    } else {
                        None
                    }
                }
                Command::ProgramChange => Some(Transition::Program),
            }
        } else {
            self.edge_consumed = false;
            let momentary_release = state.command == Command::ControlChange
                && state.hold_mode == HoldMode::Momentary
                && self.asserted;
            if momentary_release {
                self.asserted = false;
                Some(Transition::Off)
            } else {
                None
            }
        }
    }
}

/// Latches of all `N` signal buttons of the pedal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LatchBank<const N: usize> {
    latches: [ControlLatch; N],
}

impl<const N: usize> Default for LatchBank<N> {
    fn default() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::SUPPORTED_SIZE;

        Self {
            latches: [ControlLatch::default(); N],
        }
    }
}

impl<const N: usize> LatchBank<N> {
    const SUPPORTED_SIZE: () = assert!(
        N > 0 && N <= MAX_SIGNAL_BUTTONS,
        "unsupported number of signal buttons"
    );

    #[must_use]
    pub fn update(&mut self, pressed: &[bool; N], state: &ToggleState) -> Vec<LatchEvent, N> {
        let mut events = Vec::new();
        for (i, (latch, pressed)) in self.latches.iter_mut().zip(pressed).enumerate() {
            if let Some(transition) = latch.update(*pressed, state) {
                // NOTE: This is safe since there is at most one event per latch.
                let _ = events.push(LatchEvent {
                    button: u8::try_from(i + 1).unwrap_or(u8::MAX),
                    transition,
                });
            }
        }
        events
    }

    #[must_use]
    pub(crate) fn latches(&self) -> &[ControlLatch; N] {
        &self.latches
    }
}
