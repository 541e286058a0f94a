// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Board bring-up for the Raspberry Pi Pico wiring.
//!
//! | Signal        | Pins          |
//! |---------------|---------------|
//! | LEDs 0..3     | GP2..GP5      |
//! | Buttons 0..3  | GP6..GP9      |
//! | OLED SDA/SCL  | GP16 / GP17   |

use rp2040_hal::{
    self as hal,
    clocks::init_clocks_and_plls,
    fugit::RateExtU32,
    gpio::{
        bank0::{Gpio16, Gpio17},
        DynPinId, FunctionI2C, FunctionSioInput, FunctionSioOutput, Pin, PullNone, PullUp,
    },
    pac,
    rosc::RingOscillator,
    Sio, Timer, Watchdog, I2C,
};
use xasuuso_core::CHANNEL_COUNT;

const XTAL_FREQ_HZ: u32 = 12_000_000;
const OLED_I2C_FREQ_KHZ: u32 = 400;

pub type LedPin = Pin<DynPinId, FunctionSioOutput, PullNone>;
pub type ButtonPin = Pin<DynPinId, FunctionSioInput, PullUp>;
pub type OledBus = I2C<
    pac::I2C0,
    (
        Pin<Gpio16, FunctionI2C, PullUp>,
        Pin<Gpio17, FunctionI2C, PullUp>,
    ),
>;

pub struct Board {
    pub timer: Timer,
    pub leds: [LedPin; CHANNEL_COUNT],
    pub buttons: [ButtonPin; CHANNEL_COUNT],
    pub oled_bus: OledBus,
    /// Entropy gathered from the ring oscillator, for seeding the game RNG.
    pub seed: u64,
}

pub fn init() -> Board {
    let Some(mut pac) = pac::Peripherals::take() else {
        panic!("Peripherals already taken");
    };
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    let Ok(clocks) = init_clocks_and_plls(
        XTAL_FREQ_HZ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    ) else {
        panic!("Clock initialization failed");
    };

    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let seed = ring_oscillator_seed(pac.ROSC);

    let sio = Sio::new(pac.SIO);
    let pins = hal::gpio::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let leds = [
        pins.gpio2.reconfigure::<FunctionSioOutput, PullNone>().into_dyn_pin(),
        pins.gpio3.reconfigure::<FunctionSioOutput, PullNone>().into_dyn_pin(),
        pins.gpio4.reconfigure::<FunctionSioOutput, PullNone>().into_dyn_pin(),
        pins.gpio5.reconfigure::<FunctionSioOutput, PullNone>().into_dyn_pin(),
    ];
    let buttons = [
        pins.gpio6.reconfigure::<FunctionSioInput, PullUp>().into_dyn_pin(),
        pins.gpio7.reconfigure::<FunctionSioInput, PullUp>().into_dyn_pin(),
        pins.gpio8.reconfigure::<FunctionSioInput, PullUp>().into_dyn_pin(),
        pins.gpio9.reconfigure::<FunctionSioInput, PullUp>().into_dyn_pin(),
    ];

    let sda = pins.gpio16.reconfigure::<FunctionI2C, PullUp>();
    let scl = pins.gpio17.reconfigure::<FunctionI2C, PullUp>();
    let oled_bus = I2C::i2c0(
        pac.I2C0,
        sda,
        scl,
        OLED_I2C_FREQ_KHZ.kHz(),
        &mut pac.RESETS,
        &clocks.system_clock,
    );

    defmt::println!("Board: clocks, GPIO and I2C0 initialized");

    Board {
        timer,
        leds,
        buttons,
        oled_bus,
        seed,
    }
}

/// Collect 64 random bits from the ring oscillator jitter.
fn ring_oscillator_seed(rosc: pac::ROSC) -> u64 {
    let rosc = RingOscillator::new(rosc).initialize();
    (0..64).fold(0u64, |seed, _| (seed << 1) | rosc.get_random_bit() as u64)
}
