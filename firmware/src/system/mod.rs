pub mod display;
pub mod inputs;
pub mod midi;

pub use daisy::hal;

use hal::adc::{AdcSampleTime, Resolution};
use hal::delay::DelayFromCountDownTimer;
use hal::pac::CorePeripherals;
use hal::pac::Peripherals as DevicePeripherals;
use hal::prelude::*;
use systick_monotonic::Systick;

use display::Display;
use inputs::{Config as InputsConfig, Inputs};
use midi::{Midi, BAUD_RATE};

pub struct System {
    pub mono: Systick<1000>,
    pub inputs: Inputs,
    pub midi: Midi,
    pub display: Display,
}

impl System {
    /// Initialize system abstraction
    ///
    /// Without a working display the pedal cannot tell the user what it
    /// does, so failing to bring it up halts the system.
    ///
    /// # Panics
    ///
    /// The system can be initialized only once. It panics otherwise.
    #[must_use]
    pub fn init(mut cp: CorePeripherals, dp: DevicePeripherals) -> Self {
        enable_cache(&mut cp);

        let board = daisy::Board::take().unwrap();
        let ccdr = daisy::board_freeze_clocks!(board, dp);
        let pins = daisy::board_split_gpios!(board, ccdr, dp);

        let mut delay = DelayFromCountDownTimer::new(dp.TIM2.timer(
            100.Hz(),
            ccdr.peripheral.TIM2,
            &ccdr.clocks,
        ));

        let mono = Systick::new(cp.SYST, 480_000_000);

        let adc_1 = {
            let (mut adc_1, _adc_2) = hal::adc::adc12(
                dp.ADC1,
                dp.ADC2,
                &mut delay,
                ccdr.peripheral.ADC12,
                &ccdr.clocks,
            );
            adc_1.set_resolution(Resolution::TENBIT);
            adc_1.set_sample_time(AdcSampleTime::T_16);
            adc_1.enable()
        };

        #[cfg(not(feature = "two-buttons"))]
        let (signal, pot) = (
            [
                pins.GPIO.PIN_D1.into_pull_up_input().erase(),
                pins.GPIO.PIN_D10.into_pull_up_input().erase(),
                pins.GPIO.PIN_D9.into_pull_up_input().erase(),
                pins.GPIO.PIN_A2.into_pull_up_input().erase(),
                pins.GPIO.PIN_A3.into_pull_up_input().erase(),
            ],
            Some((pins.GPIO.PIN_C4.into_analog(), adc_1)),
        );
        #[cfg(feature = "two-buttons")]
        let (signal, pot) = {
            let _ = adc_1;
            (
                [
                    pins.GPIO.PIN_D1.into_pull_up_input().erase(),
                    pins.GPIO.PIN_D10.into_pull_up_input().erase(),
                ],
                None,
            )
        };

        let inputs = Inputs::new(InputsConfig {
            mode: pins.GPIO.PIN_B9.into_pull_up_input().erase(),
            preset: pins.GPIO.PIN_B10.into_pull_up_input().erase(),
            signal,
            pot,
        });

        let midi = {
            let tx = pins.GPIO.PIN_A8.into_alternate::<4>();
            let rx = pins.GPIO.PIN_A9.into_alternate::<4>();
            let serial = dp
                .USART1
                .serial(
                    (tx, rx),
                    BAUD_RATE.bps(),
                    ccdr.peripheral.USART1,
                    &ccdr.clocks,
                )
                .unwrap();
            let (tx, _rx) = serial.split();
            Midi::new(tx)
        };

        let display = {
            let scl = pins.GPIO.PIN_B7.into_alternate_open_drain::<4>();
            let sda = pins.GPIO.PIN_B8.into_alternate_open_drain::<4>();
            let i2c = dp
                .I2C1
                .i2c((scl, sda), 400.kHz(), ccdr.peripheral.I2C1, &ccdr.clocks);
            match Display::init(i2c) {
                Ok(display) => display,
                Err(_) => {
                    defmt::error!("SSD1306 allocation failed");
                    crate::halt();
                }
            }
        };

        Self {
            mono,
            inputs,
            midi,
            display,
        }
    }
}

/// AN5212: Improve application performance when fetching instruction and
/// data, from both internal andexternal memories.
fn enable_cache(cp: &mut CorePeripherals) {
    cp.SCB.enable_icache();
    // NOTE: This requires cache management around all use of DMA.
    cp.SCB.enable_dcache(&mut cp.CPUID);
}
