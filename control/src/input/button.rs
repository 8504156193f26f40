//! Manage button's state.

/// Use this to hold button state over time.
///
/// Detects the press edge of a button. The edge is reported only once per
/// physical press, holding the button does not trigger it again until it
/// gets released.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button {
    pub pressed: bool,
    pub clicked: bool,
    pub released: bool,
}

impl Button {
    pub fn update(&mut self, down: bool) {
        let was_pressed = self.pressed;
        self.pressed = down;
        self.clicked = !was_pressed && self.pressed;
        self.released = was_pressed && !self.pressed;
    }
}
