//! The central state machine of the pedal.

use heapless::Vec;

use crate::config::{Config, Instant, MAX_SIGNAL_BUTTONS};
use crate::display::{Display, PotView, StatusView};
use crate::input::button::Button;
use crate::input::pot::Pot;
use crate::input::snapshot::Snapshot;
use crate::latch::LatchBank;
use crate::log;
use crate::midi::{Emitter, Message};
use crate::output::DesiredOutput;
use crate::press::PressClassifier;
use crate::toggle::ToggleState;

/// Most messages a single cycle can produce, one per signal button and one
/// for the pot.
pub const MAX_MESSAGES: usize = MAX_SIGNAL_BUTTONS + 1;

pub type Messages = Vec<Message, MAX_MESSAGES>;

/// The main store of peripheral abstraction and pedal state.
///
/// This struct is the central piece of the control module. It takes
/// `Snapshot` on its input once per cycle, runs it through the press
/// classifier, toggle state and latches in a fixed order, and returns
/// MIDI messages to be sent. Nothing in here can fail.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Store<const N: usize> {
    config: Config,
    emitter: Emitter,
    classifier: PressClassifier,
    preset_button: Button,
    toggle: ToggleState,
    latches: LatchBank<N>,
    pot: Pot,
    display: Display,
}

/// Response of control store after processing new input snapshot.
///
/// Messages should be passed to MIDI output in the given order. Sending
/// is fire-and-forget, messages failing to send should be dropped.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ApplyInputSnapshotResult {
    pub messages: Messages,
}

impl<const N: usize> Store<N> {
    const SUPPORTED_SIZE: () = assert!(
        N > 0 && N <= MAX_SIGNAL_BUTTONS,
        "unsupported number of signal buttons"
    );

    #[must_use]
    pub fn new(config: Config) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::SUPPORTED_SIZE;

        Self {
            config,
            emitter: Emitter::new(&config),
            classifier: PressClassifier::new(config.long_press),
            preset_button: Button::default(),
            toggle: ToggleState::default(),
            latches: LatchBank::default(),
            pot: Pot::default(),
            display: Display::new(config.pot_display_timeout),
        }
    }

    pub fn apply_input_snapshot(
        &mut self,
        snapshot: Snapshot<N>,
        now: Instant,
    ) -> ApplyInputSnapshotResult {
        let mut messages = Messages::new();

        self.reconcile_mode_button(snapshot.mode, now);
        self.reconcile_preset_button(snapshot.preset);
        self.reconcile_signal_buttons(&snapshot.signal, &mut messages);
        if let Some(value) = snapshot.pot {
            self.reconcile_pot(value, now, &mut messages);
        }

        ApplyInputSnapshotResult { messages }
    }

    pub fn tick(&mut self, now: Instant) -> DesiredOutput {
        self.display.tick(now);
        DesiredOutput {
            screen: self.display.active_screen(&self.toggle),
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn toggle_state(&self) -> &ToggleState {
        &self.toggle
    }

    #[must_use]
    pub fn current_status_view(&self) -> StatusView {
        StatusView::new(&self.toggle)
    }

    /// Pot view while it is requested to be shown, `None` otherwise.
    #[must_use]
    pub fn potentiometer_view(&self) -> Option<PotView> {
        self.display.pot_view()
    }

    fn reconcile_mode_button(&mut self, pressed: bool, now: Instant) {
        if let Some(event) = self.classifier.update(pressed, now) {
            self.toggle.apply_press(event);
        }
    }

    fn reconcile_preset_button(&mut self, pressed: bool) {
        self.preset_button.update(pressed);
        if self.preset_button.clicked {
            self.toggle.advance_preset();
        }
    }

    fn reconcile_signal_buttons(&mut self, pressed: &[bool; N], messages: &mut Messages) {
        for event in self.latches.update(pressed, &self.toggle) {
            let message = self.emitter.latch_message(event, &self.toggle);
            log::debug!("Button={:?} requested message={:?}", event.button, message);
            // NOTE: The capacity is set to accommodate all buttons and the pot.
            let _ = messages.push(message);
        }
    }

    fn reconcile_pot(&mut self, value: u8, now: Instant, messages: &mut Messages) {
        if let Some(value) = self.pot.update(value) {
            let message = self.emitter.pot_message(value);
            log::debug!("Pot requested message={:?}", message);
            // NOTE: Ditto.
            let _ = messages.push(message);
            self.display.show_pot(value, now);
        }
    }
}
