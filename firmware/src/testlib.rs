use pedalo_control::{ButtonId, Sampler, Snapshot};

use crate::system::inputs::Inputs;
use crate::SIGNAL_BUTTONS;

pub fn sample_until_button_is_clicked(
    inputs: &mut Inputs,
    button: ButtonId,
) -> Snapshot<SIGNAL_BUTTONS> {
    loop {
        let was_down = inputs.sample().pressed(button);
        cortex_m::asm::delay(480_000_000 / 1000);
        let snapshot = inputs.sample();
        if !was_down && snapshot.pressed(button) {
            return snapshot;
        }
    }
}
