//! Arbitration of what is shown on the display.
//!
//! The status screen is shown by default. Moving the potentiometer brings
//! up a transient screen with its value, which goes away once the pot rests
//! for long enough.

use core::fmt::Write;

use heapless::String;

use crate::config::{Duration, Instant};
use crate::input::pot::MAX_VALUE;
use crate::toggle::{Command, HoldMode, Preset, ToggleState};

/// Enough to hold any of the rendered lines.
pub type Line = String<8>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    Status(StatusView),
    Pot(PotView),
}

/// Current command on the first line, preset and hold mode on the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusView {
    pub command: Command,
    pub preset: Preset,
    pub hold_mode: HoldMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PotView {
    pub value: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct Transient {
    view: PotView,
    since: Instant,
}

/// State machine deciding between the standard and the transient screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Display {
    transient: Option<Transient>,
    timeout: Duration,
}

impl StatusView {
    #[must_use]
    pub fn new(state: &ToggleState) -> Self {
        Self {
            command: state.command,
            preset: state.preset,
            hold_mode: state.hold_mode,
        }
    }

    #[must_use]
    pub fn line_1(&self) -> &'static str {
        self.command.label()
    }

    #[must_use]
    pub fn line_2(&self) -> Line {
        let mut line = Line::new();
        // NOTE: The longest possible line is "P8 DT", it always fits.
        let _ = write!(line, "P{} {}", self.preset.number(), self.hold_mode.label());
        line
    }
}

impl PotView {
    #[must_use]
    pub fn percent(&self) -> u8 {
        (u16::from(self.value.min(MAX_VALUE)) * 100 / u16::from(MAX_VALUE)) as u8
    }

    #[must_use]
    pub fn text(&self) -> Line {
        let mut line = Line::new();
        // NOTE: At most "100%".
        let _ = write!(line, "{}%", self.percent());
        line
    }
}

impl Display {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            transient: None,
            timeout,
        }
    }

    pub fn show_pot(&mut self, value: u8, now: Instant) {
        self.transient = Some(Transient {
            view: PotView { value },
            since: now,
        });
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(transient) = self.transient {
            let expired = now
                .checked_duration_since(transient.since)
                .is_some_and(|elapsed| elapsed > self.timeout);
            if expired {
                self.transient = None;
            }
        }
    }

    #[must_use]
    pub fn pot_view(&self) -> Option<PotView> {
        self.transient.map(|t| t.view)
    }

    #[must_use]
    pub fn active_screen(&self, state: &ToggleState) -> Screen {
        match self.transient {
            Some(transient) => Screen::Pot(transient.view),
            None => Screen::Status(StatusView::new(state)),
        }
    }
}
