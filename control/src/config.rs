//! Static configuration of the pedal.

/// Point in time measured by the millisecond clock of the firmware.
pub type Instant = fugit::TimerInstantU32<1000>;

/// Time span measured by the millisecond clock of the firmware.
pub type Duration = fugit::TimerDurationU32<1000>;

/// Upper bound of signal buttons a single store can drive.
pub const MAX_SIGNAL_BUTTONS: usize = 16;

/// Tweaking of the default pedal behavior.
///
/// The defaults match the hardware the pedal was designed for. Unlike the
/// toggle state, none of these change while the pedal runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Zero-indexed MIDI channel, 0 stands for channel 1.
    pub channel: u8,
    /// Presses of the mode button lasting at least this long are long.
    pub long_press: Duration,
    /// How long the potentiometer screen stays up after its last change.
    pub pot_display_timeout: Duration,
    /// Controller number sent when the potentiometer moves.
    pub pot_controller: u8,
    /// Interval between two cycles of the control loop.
    pub tick_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel: 0,
            long_press: Duration::millis(1000),
            pot_display_timeout: Duration::millis(2000),
            // Channel volume
            pot_controller: 7,
            tick_interval: Duration::millis(5),
        }
    }
}
