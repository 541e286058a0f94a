// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Timed replay of the sequence on the LEDs.

use crate::{timing::elapsed, Leds, Sequence, Timing};
use embedded_hal::digital::OutputPin;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PulseState {
    Starting,
    Lit { since_us: u64 },
    Dark { since_us: u64 },
    Finished,
}

/// Replays a sequence one pulse per step: LED on for `pulse_on_us`, then off for
/// `pulse_off_us`. Only the LED of the current step is ever lit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playback {
    step: usize,
    state: PulseState,
}

impl Playback {
    pub const fn new() -> Self {
        Self {
            step: 0,
            state: PulseState::Starting,
        }
    }

    /// Advance the replay. Returns `true` once every step has been shown.
    pub fn poll<O: OutputPin>(
        &mut self,
        now_us: u64,
        sequence: &Sequence,
        leds: &mut Leds<O>,
        timing: &Timing,
    ) -> bool {
        self.state = match self.state {
            PulseState::Starting => {
                leds.all_off();
                self.light(now_us, sequence, leds)
            }
            PulseState::Lit { since_us } => {
                if elapsed(since_us, now_us) < timing.pulse_on_us {
                    return false;
                }
                if let Some(channel) = sequence.get(self.step) {
                    leds.off(channel);
                }
                PulseState::Dark { since_us: now_us }
            }
            PulseState::Dark { since_us } => {
                if elapsed(since_us, now_us) < timing.pulse_off_us {
                    return false;
                }
                self.step += 1;
                self.light(now_us, sequence, leds)
            }
            PulseState::Finished => PulseState::Finished,
        };
        self.state == PulseState::Finished
    }

    fn light<O: OutputPin>(
        &self,
        now_us: u64,
        sequence: &Sequence,
        leds: &mut Leds<O>,
    ) -> PulseState {
        match sequence.get(self.step) {
            Some(channel) => {
                leds.on(channel);
                PulseState::Lit { since_us: now_us }
            }
            None => PulseState::Finished,
        }
    }
}

impl Default for Playback {
    fn default() -> Self {
        Self::new()
    }
}
