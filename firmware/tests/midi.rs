#![no_std]
#![no_main]

use pedalo_firmware as _; // Panic handler

#[defmt_test::tests]
mod tests {
    use pedalo_control::{ButtonId, Message};
    use pedalo_firmware::system::System;
    use pedalo_firmware::testlib::sample_until_button_is_clicked;

    #[init]
    fn init() -> System {
        let cp = cortex_m::Peripherals::take().unwrap();
        let dp = daisy::pac::Peripherals::take().unwrap();
        System::init(cp, dp)
    }

    #[test]
    fn control_change_reaches_receiver(system: &mut System) {
        defmt::info!("Connect a MIDI monitor, then click the mode button");
        sample_until_button_is_clicked(&mut system.inputs, ButtonId::Mode);

        system.midi.send(Message::ControlChange {
            channel: 0,
            controller: 6,
            value: 127,
        });
        system.midi.send(Message::ControlChange {
            channel: 0,
            controller: 6,
            value: 0,
        });
        defmt::info!("Click the mode button if the monitor shows CC 6 on and off on channel 1");
        sample_until_button_is_clicked(&mut system.inputs, ButtonId::Mode);
    }

    #[test]
    fn program_change_reaches_receiver(system: &mut System) {
        system.midi.send(Message::ProgramChange {
            channel: 0,
            program: 2,
        });
        defmt::info!("Click the mode button if the monitor shows PC 2 on channel 1");
        sample_until_button_is_clicked(&mut system.inputs, ButtonId::Mode);
    }
}
