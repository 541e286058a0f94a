// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Active-low LED and button banks.
//!
//! Both banks are wired to ground: an LED lights when its pin is driven low, and a button reads
//! low while pressed (the pin has a pull-up).

use crate::{ChannelId, CHANNEL_COUNT};
use embedded_hal::digital::{InputPin, OutputPin};

/// The four signal LEDs.
pub struct Leds<O> {
    pins: [O; CHANNEL_COUNT],
}

impl<O: OutputPin> Leds<O> {
    /// Take ownership of the pins and switch every LED off.
    pub fn new(pins: [O; CHANNEL_COUNT]) -> Self {
        let mut leds = Self { pins };
        leds.all_off();
        leds
    }

    pub fn on(&mut self, channel: ChannelId) {
        self.pins[channel.index()].set_low().ok();
    }

    pub fn off(&mut self, channel: ChannelId) {
        self.pins[channel.index()].set_high().ok();
    }

    /// Drive all LEDs to the same state.
    pub fn set_all(&mut self, lit: bool) {
        for pin in &mut self.pins {
            if lit {
                pin.set_low().ok();
            } else {
                pin.set_high().ok();
            }
        }
    }

    pub fn all_off(&mut self) {
        self.set_all(false);
    }
}

/// The four player buttons.
pub struct Buttons<I> {
    pins: [I; CHANNEL_COUNT],
}

impl<I: InputPin> Buttons<I> {
    pub fn new(pins: [I; CHANNEL_COUNT]) -> Self {
        Self { pins }
    }

    /// Raw (undebounced) pressed state. A read error counts as released.
    pub fn is_pressed(&mut self, channel: ChannelId) -> bool {
        self.pins[channel.index()].is_low().unwrap_or(false)
    }
}
