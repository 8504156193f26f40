use crate::system::hal::gpio;

/// Momentary footswitch pulled up, closing to ground when pressed.
#[derive(Debug)]
pub struct Button {
    pin: Pin,
}

pub type Pin = gpio::ErasedPin<gpio::Input>;

impl Button {
    pub fn new(pin: Pin) -> Self {
        Self { pin }
    }

    /// Logic level of the pin, `true` while the button is released.
    pub fn level(&self) -> bool {
        self.pin.is_high()
    }
}
