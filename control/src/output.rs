use crate::display::Screen;

/// Desired state of output peripherals with the exception of MIDI.
///
/// This structure transfers a request to the presenter, asking it to show
/// the given screen. It is up to the presenter to skip redundant redraws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DesiredOutput {
    pub screen: Screen,
}
