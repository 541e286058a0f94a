// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! SSD1306 128x32 OLED as the game's score display.

use embedded_graphics::{
    mono_font::{ascii::FONT_10X20, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use embedded_hal::i2c::I2c;
use ssd1306::{mode::BufferedGraphicsMode, prelude::*, I2CDisplayInterface, Ssd1306};
use xasuuso_core::ScoreDisplay;

/// Top-left corner of the single text line, vertically centred on the 32 px panel.
const TEXT_ORIGIN: Point = Point::new(0, 6);

#[derive(Debug, defmt::Format)]
pub enum OledError {
    Init,
    Draw,
    Flush,
}

type Panel<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x32, BufferedGraphicsMode<DisplaySize128x32>>;

pub struct Oled<I2C> {
    panel: Panel<I2C>,
}

impl<I2C: I2c> Oled<I2C> {
    /// Bring up the panel at the default address (0x3C).
    pub fn new(i2c: I2C) -> Result<Self, OledError> {
        let interface = I2CDisplayInterface::new(i2c);
        let mut panel = Ssd1306::new(interface, DisplaySize128x32, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        panel.init().map_err(|_| OledError::Init)?;

        defmt::println!("SSD1306 OLED initialized on I2C0, address 0x3C");
        Ok(Self { panel })
    }

    fn render(&mut self, text: &str) -> Result<(), OledError> {
        let style = MonoTextStyle::new(&FONT_10X20, BinaryColor::On);

        self.panel.clear_buffer();
        Text::with_baseline(text, TEXT_ORIGIN, style, Baseline::Top)
            .draw(&mut self.panel)
            .map_err(|_| OledError::Draw)?;
        self.panel.flush().map_err(|_| OledError::Flush)
    }
}

impl<I2C: I2c> ScoreDisplay for Oled<I2C> {
    fn show_status(&mut self, text: &str) {
        if let Err(e) = self.render(text) {
            defmt::warn!("OLED: failed to show {=str}: {}", text, e);
        }
    }
}
