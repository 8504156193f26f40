//! Global modes of the pedal and their transitions.

use crate::log;
use crate::press::PressEvent;

/// MIDI command sent by signal buttons.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    #[default]
    ControlChange,
    ProgramChange,
}

/// Whether signal buttons latch or follow the physical switch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HoldMode {
    /// A control stays on until pressed again.
    #[default]
    Latching,
    /// A control is on only while the button is held.
    Momentary,
}

/// Offset shifting controller numbers addressed by signal buttons.
///
/// It starts on 10 and moves in steps of 10. Once the offset reaches 90 it
/// starts over from 10, so the reachable values are 10 to 80.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Preset(u8);

/// The whole state toggled by the user.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToggleState {
    pub command: Command,
    pub hold_mode: HoldMode,
    pub preset: Preset,
}

impl Command {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::ControlChange => Self::ProgramChange,
            Self::ProgramChange => Self::ControlChange,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ControlChange => "CC",
            Self::ProgramChange => "PC",
        }
    }
}

impl HoldMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Latching => Self::Momentary,
            Self::Momentary => Self::Latching,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Latching => "DT",
            Self::Momentary => "ST",
        }
    }
}

impl Preset {
    const FIRST: u8 = 10;
    const STEP: u8 = 10;
    const RESET_AT: u8 = 90;

    #[must_use]
    pub fn advanced(self) -> Self {
        let offset = self.0 + Self::STEP;
        if offset == Self::RESET_AT {
            Self(Self::FIRST)
        } else {
            Self(offset)
        }
    }

    #[must_use]
    pub fn offset(self) -> u8 {
        self.0
    }

    /// Number of the preset as shown to the user, 1 to 8.
    #[must_use]
    pub fn number(self) -> u8 {
        self.0 / 10
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self(Self::FIRST)
    }
}

impl ToggleState {
    pub fn apply_press(&mut self, event: PressEvent) {
        match event {
            PressEvent::Short => {
                self.command = self.command.toggled();
                log::info!("Switched command={:?}", self.command);
            }
            PressEvent::Long => {
                self.hold_mode = self.hold_mode.toggled();
                log::info!("Switched hold mode={:?}", self.hold_mode);
            }
        }
    }

    pub fn advance_preset(&mut self) {
        self.preset = self.preset.advanced();
        log::info!("Selected preset offset={:?}", self.preset.offset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn when_created_it_sends_latching_control_changes_from_first_preset() {
        let state = ToggleState::default();
        assert_eq!(state.command, Command::ControlChange);
        assert_eq!(state.hold_mode, HoldMode::Latching);
        assert_eq!(state.preset.offset(), 10);
    }

    #[test]
    fn when_short_press_is_applied_only_command_flips() {
        let mut state = ToggleState::default();
        state.apply_press(PressEvent::Short);
        assert_eq!(state.command, Command::ProgramChange);
        assert_eq!(state.hold_mode, HoldMode::Latching);
        state.apply_press(PressEvent::Short);
        assert_eq!(state.command, Command::ControlChange);
    }

    #[test]
    fn when_long_press_is_applied_only_hold_mode_flips() {
        let mut state = ToggleState::default();
        state.apply_press(PressEvent::Long);
        assert_eq!(state.hold_mode, HoldMode::Momentary);
        assert_eq!(state.command, Command::ControlChange);
        state.apply_press(PressEvent::Long);
        assert_eq!(state.hold_mode, HoldMode::Latching);
    }

    #[test]
    fn when_preset_is_advanced_from_80_it_starts_over_from_10() {
        let mut state = ToggleState::default();
        let mut offsets = [0; 9];
        for offset in &mut offsets {
            *offset = state.preset.offset();
            state.advance_preset();
        }
        assert_eq!(offsets, [10, 20, 30, 40, 50, 60, 70, 80, 10]);
    }

    #[test]
    fn when_preset_is_shown_it_is_numbered_from_one() {
        let mut preset = Preset::default();
        assert_eq!(preset.number(), 1);
        for _ in 0..7 {
            preset = preset.advanced();
        }
        assert_eq!(preset.number(), 8);
    }

    #[test]
    fn labels_match_the_display_legend() {
        assert_eq!(Command::ControlChange.label(), "CC");
        assert_eq!(Command::ProgramChange.label(), "PC");
        assert_eq!(HoldMode::Latching.label(), "DT");
        assert_eq!(HoldMode::Momentary.label(), "ST");
    }

    proptest! {
        #[test]
        fn preset_offset_stays_within_10_and_80(advances in 0usize..200) {
            let mut preset = Preset::default();
            for _ in 0..advances {
                preset = preset.advanced();
            }
            prop_assert!((10..=80).contains(&preset.offset()));
            prop_assert_eq!(preset.offset() % 10, 0);
        }
    }
}
