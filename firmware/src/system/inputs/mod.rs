//! Abstraction of all inputs of the pedal.
//!
//! Pins are read as they are, there is no debouncing. Edge detection and
//! everything else is left to the control package.

mod button;
mod pot;

use pedalo_control::{Sampler, Snapshot};

use crate::SIGNAL_BUTTONS;

use button::Button;
pub use button::Pin as ButtonPin;
use pot::Pot;
pub use pot::Pin as PotPin;

use crate::system::hal::adc::{Adc, Enabled};
use crate::system::hal::pac::ADC1;

pub struct Inputs {
    mode: Button,
    preset: Button,
    signal: [Button; SIGNAL_BUTTONS],
    pot: Option<Pot>,
}

pub struct Config {
    pub mode: ButtonPin,
    pub preset: ButtonPin,
    pub signal: [ButtonPin; SIGNAL_BUTTONS],
    pub pot: Option<(PotPin, Adc<ADC1, Enabled>)>,
}

impl Inputs {
    pub fn new(config: Config) -> Self {
        Self {
            mode: Button::new(config.mode),
            preset: Button::new(config.preset),
            signal: config.signal.map(Button::new),
            pot: config.pot.map(|(pin, adc)| Pot::new(pin, adc)),
        }
    }
}

impl Sampler<SIGNAL_BUTTONS> for Inputs {
    fn sample(&mut self) -> Snapshot<SIGNAL_BUTTONS> {
        let mut levels = [true; SIGNAL_BUTTONS];
        for (level, button) in levels.iter_mut().zip(&self.signal) {
            *level = button.level();
        }
        Snapshot::from_levels(
            self.mode.level(),
            self.preset.level(),
            levels,
            self.pot.as_mut().map(Pot::sample),
        )
    }
}
