//! Classification of mode button presses by their duration.

use crate::config::{Duration, Instant};
use crate::log;

/// Result of a finished press, known only once the button is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressEvent {
    Short,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum State {
    WaitingForPress,
    WaitingForRelease(Instant),
}

/// State machine measuring how long the mode button was held.
///
/// The classification happens on release. Holding the button past the
/// threshold does not emit anything until it is let go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressClassifier {
    state: State,
    long_press: Duration,
}

impl PressClassifier {
    #[must_use]
    pub fn new(long_press: Duration) -> Self {
        Self {
            state: State::WaitingForPress,
            long_press,
        }
    }

    pub fn update(&mut self, pressed: bool, now: Instant) -> Option<PressEvent> {
        match self.state {
            State::WaitingForPress if pressed => {
                self.state = State::WaitingForRelease(now);
                None
            }
            State::WaitingForRelease(since) if !pressed => {
                self.state = State::WaitingForPress;
                // NOTE: The clock is monotonic, a release can never precede its press.
                let duration = now
                    .checked_duration_since(since)
                    .unwrap_or(Duration::from_ticks(0));
                log::debug!("Mode button released after={:?}ms", duration.ticks());
                if duration < self.long_press {
                    Some(PressEvent::Short)
                } else {
                    Some(PressEvent::Long)
                }
            }
            _ => None,
        }
    }

    #[must_use]
    pub(crate) fn is_held(&self) -> bool {
        matches!(self.state, State::WaitingForRelease(_))
    }
}
