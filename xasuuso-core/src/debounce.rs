// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Per-channel button debouncing.

use crate::timing::elapsed;

/// Transition of the debounced level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Pressed,
    Released,
}

/// Debounce state of one button.
///
/// The stable level only follows the raw level once the raw level has stayed unchanged for the
/// whole debounce window. Any raw change restarts the window.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    raw: bool,
    stable: bool,
    changed_at_us: u64,
}

impl Debouncer {
    /// Start out trusting the level the button has right now.
    pub const fn new(pressed: bool, now_us: u64) -> Self {
        Self {
            raw: pressed,
            stable: pressed,
            changed_at_us: now_us,
        }
    }

    /// Feed one raw sample. Returns the edge when the stable level changes.
    pub fn update(&mut self, pressed: bool, now_us: u64, window_us: u64) -> Option<Edge> {
        if pressed != self.raw {
            self.raw = pressed;
            self.changed_at_us = now_us;
            return None;
        }

        if self.raw == self.stable || elapsed(self.changed_at_us, now_us) < window_us {
            return None;
        }

        self.stable = self.raw;
        Some(if self.stable {
            Edge::Pressed
        } else {
            Edge::Released
        })
    }

    /// Debounced level.
    pub const fn is_pressed(&self) -> bool {
        self.stable
    }
}
