use nb::block;

use crate::system::hal::adc::{Adc, Enabled};
use crate::system::hal::gpio;
use crate::system::hal::pac::ADC1;

/// Potentiometer read by the 10-bit ADC.
pub struct Pot {
    pin: Pin,
    adc: Adc<ADC1, Enabled>,
}

pub type Pin = gpio::gpioa::PA7<gpio::Analog>;

impl Pot {
    pub fn new(pin: Pin, adc: Adc<ADC1, Enabled>) -> Self {
        Self { pin, adc }
    }

    /// Raw 10-bit sample. A failed conversion reads as zero.
    pub fn sample(&mut self) -> u16 {
        self.adc.start_conversion(&mut self.pin);
        let sample: u32 = block!(self.adc.read_sample()).unwrap_or_default();
        u16::try_from(sample).unwrap_or(u16::MAX)
    }
}
