//! Components of the foot controller, turning footswitches into MIDI.
//!
//! The crate is meant to run in a firmware polling its inputs on a fixed
//! interval, but it is free of any hardware dependency so the whole state
//! machine can be exercised on the host.
//!
//! Following is the flow of a single cycle:
//!
//! ```text
//!   [Buttons] [Pot]
//!        |      |
//!        V      V
//!      (Snapshot) ---> [ Store {PressClassifier, ToggleState, LatchBank, Pot} ]
//!                            |                         |
//!                            | (Message)               | (DesiredOutput)
//!                            V                         V
//!                      [ MIDI out ]               [ Display ]
//! ```

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]

pub mod config;
pub mod display;
pub mod input;
pub mod latch;
mod log;
pub mod midi;
pub mod output;
pub mod press;
pub mod store;
pub mod toggle;

pub use config::{Config, Duration, Instant};
pub use display::{PotView, Screen, StatusView};
pub use input::{ButtonId, Sampler, Snapshot};
pub use midi::Message;
pub use output::DesiredOutput;
pub use store::{ApplyInputSnapshotResult, Store};
pub use toggle::{Command, HoldMode, Preset, ToggleState};
