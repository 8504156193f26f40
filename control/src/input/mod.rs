//! Sampling of footswitches and the potentiometer.

pub mod button;
pub mod pot;
pub mod snapshot;

pub use snapshot::Snapshot;

/// Identifier of a physical footswitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    /// Switches MIDI command on short press and hold mode on long press.
    Mode,
    /// Cycles through presets.
    Preset,
    /// Button sending MIDI messages, indexed from 1.
    Signal(u8),
}

/// Source of input snapshots, read once per cycle.
///
/// Implementations must not block and must not keep any history, edge
/// detection is up to the store.
pub trait Sampler<const N: usize> {
    fn sample(&mut self) -> Snapshot<N>;
}
