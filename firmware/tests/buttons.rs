#![no_std]
#![no_main]

use pedalo_firmware as _; // Panic handler.

#[defmt_test::tests]
mod tests {
    use pedalo_control::ButtonId;
    use pedalo_firmware::system::inputs::Inputs;
    use pedalo_firmware::system::System;
    use pedalo_firmware::testlib::sample_until_button_is_clicked;
    use pedalo_firmware::SIGNAL_BUTTONS;

    #[init]
    fn init() -> Inputs {
        let cp = cortex_m::Peripherals::take().unwrap();
        let dp = daisy::pac::Peripherals::take().unwrap();
        System::init(cp, dp).inputs
    }

    #[test]
    fn mode_button_detects_click(inputs: &mut Inputs) {
        defmt::info!("Click the mode button");
        sample_until_button_is_clicked(inputs, ButtonId::Mode);
        defmt::info!("OK");
    }

    #[test]
    fn preset_button_detects_click(inputs: &mut Inputs) {
        defmt::info!("Click the preset button");
        sample_until_button_is_clicked(inputs, ButtonId::Preset);
        defmt::info!("OK");
    }

    #[test]
    fn signal_buttons_detect_click_one_at_a_time(inputs: &mut Inputs) {
        for i in 0..SIGNAL_BUTTONS {
            defmt::info!("Click signal button {}", i + 1);
            let snapshot = sample_until_button_is_clicked(inputs, ButtonId::Signal(i as u8 + 1));
            let others_released = snapshot
                .signal
                .iter()
                .enumerate()
                .all(|(j, pressed)| j == i || !pressed);
            defmt::assert!(others_released, "Other buttons reported as pressed");
            cortex_m::asm::delay(480_000_000 / 2); // Protection against accidental double-clicks
            defmt::info!("OK");
        }
    }
}
