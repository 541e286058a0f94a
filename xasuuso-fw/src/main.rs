// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

#![no_std]
#![no_main]

mod board;
mod display;

use defmt_rtt as _;
use embedded_hal::delay::DelayNs;
use panic_probe as _;
use rand::{rngs::SmallRng, SeedableRng};
use xasuuso_core::{GameController, Timing};

defmt::timestamp!("{=u64:us}", { 0 });

use cortex_m_rt::entry;

#[unsafe(link_section = ".boot2")]
#[used]
pub static BOOT2_FIRMWARE: [u8; 256] = rp2040_boot2::BOOT_LOADER_W25Q080;

const VERSION: &str = env!("XASUUSO_VERSION");

/// How long the serial console gets to notice a missing panel before the game starts.
const OLED_FAILURE_PAUSE_MS: u32 = 2_000;

#[entry]
fn main() -> ! {
    defmt::println!("XASUUSO v{=str}", VERSION);

    let board::Board {
        mut timer,
        leds,
        buttons,
        oled_bus,
        seed,
    } = board::init();

    let oled = match display::Oled::new(oled_bus) {
        Ok(oled) => Some(oled),
        Err(e) => {
            defmt::warn!("SSD1306 initialization failed: {}, running without display", e);
            timer.delay_ms(OLED_FAILURE_PAUSE_MS);
            None
        }
    };

    defmt::println!("RNG seed: 0x{:016x}", seed);
    let timing = Timing::STANDARD;
    let mut game = GameController::new(
        leds,
        buttons,
        oled,
        SmallRng::seed_from_u64(seed),
        timing,
        timer.get_counter().ticks(),
    );

    loop {
        game.poll(timer.get_counter().ticks());
        timer.delay_us(timing.poll_interval_us as u32);
    }
}
