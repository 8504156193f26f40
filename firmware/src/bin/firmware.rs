#![no_main]
#![no_std]

use pedalo_firmware as _; // global logger + panicking-behavior

#[rtic::app(device = stm32h7xx_hal::pac, peripherals = true, dispatchers = [EXTI0])]
mod app {
    use fugit::ExtU64;
    use systick_monotonic::Systick;

    use pedalo_control::{Config, Instant, Sampler, Store};
    use pedalo_firmware::system::display::Display;
    use pedalo_firmware::system::inputs::Inputs;
    use pedalo_firmware::system::midi::Midi;
    use pedalo_firmware::system::System;
    use pedalo_firmware::SIGNAL_BUTTONS;

    #[monotonic(binds = SysTick, default = true)]
    type Mono = Systick<1000>; // 1 kHz / 1 ms granularity

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        inputs: Inputs,
        midi: Midi,
        display: Display,
        store: Store<SIGNAL_BUTTONS>,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("INIT");

        let system = System::init(cx.core, cx.device);
        let mono = system.mono;
        let inputs = system.inputs;
        let midi = system.midi;
        let display = system.display;

        let store = Store::new(Config::default());

        // Let the power and the connected MIDI device settle.
        control::spawn_after(2.secs()).unwrap();

        (
            Shared {},
            Local {
                inputs,
                midi,
                display,
                store,
            },
            init::Monotonics(mono),
        )
    }

    #[task(local = [inputs, midi, display, store])]
    fn control(cx: control::Context) {
        let inputs = cx.local.inputs;
        let midi = cx.local.midi;
        let display = cx.local.display;
        let store = cx.local.store;

        // NOTE: The control logic works with a wrapping 32-bit clock.
        #[allow(clippy::cast_possible_truncation)]
        let now = Instant::from_ticks(monotonics::now().ticks() as u32);
        let snapshot = inputs.sample();
        let result = store.apply_input_snapshot(snapshot, now);
        for message in result.messages {
            midi.send(message);
        }

        let desired_output = store.tick(now);
        if display.show(desired_output.screen).is_err() {
            defmt::warn!("Failed to refresh the display");
        }

        let interval = u64::from(store.config().tick_interval.to_millis());
        control::spawn_after(interval.millis()).unwrap();
    }
}
