// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Durations driving every timed phase of the game.

/// Phase durations in microseconds, matching the timer tick of the RP2040.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Raw level must hold this long before it is trusted.
    pub debounce_us: u64,
    /// LED lit time for one playback step.
    pub pulse_on_us: u64,
    /// Dark gap after each playback step.
    pub pulse_off_us: u64,
    /// Acknowledge: LED forced off after a press.
    pub ack_dim_us: u64,
    /// Acknowledge: short flash.
    pub ack_flash_us: u64,
    /// Acknowledge: LED held on before the next press is accepted.
    pub ack_hold_us: u64,
    /// Period between two toggles of the end-of-game alert.
    pub alert_period_us: u64,
    /// Number of times all LEDs toggle during the alert.
    pub alert_toggles: u8,
    /// Pause after the alert before a fresh game starts.
    pub game_over_hold_us: u64,
    /// Pause between a successful round and the next one.
    pub intermission_us: u64,
    /// Startup banner time.
    pub banner_us: u64,
    /// Cadence at which the firmware calls `GameController::poll`.
    pub poll_interval_us: u64,
}

impl Timing {
    pub const STANDARD: Timing = Timing {
        debounce_us: 50_000,
        pulse_on_us: 500_000,
        pulse_off_us: 500_000,
        ack_dim_us: 100_000,
        ack_flash_us: 100_000,
        ack_hold_us: 1_000_000,
        alert_period_us: 250_000,
        alert_toggles: 5,
        game_over_hold_us: 2_000_000,
        intermission_us: 1_000_000,
        banner_us: 1_000_000,
        poll_interval_us: 1_000,
    };

    /// Full playback time for a sequence of `length` steps.
    pub const fn playback_us(&self, length: usize) -> u64 {
        (self.pulse_on_us + self.pulse_off_us) * length as u64
    }

    /// Time from an accepted press until the collector is ready for the next one.
    pub const fn acknowledge_us(&self) -> u64 {
        self.ack_dim_us + self.ack_flash_us + self.ack_hold_us
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Microseconds since `since_us`. A timestamp from the future counts as no time elapsed.
#[inline]
pub(crate) fn elapsed(since_us: u64, now_us: u64) -> u64 {
    now_us.saturating_sub(since_us)
}
