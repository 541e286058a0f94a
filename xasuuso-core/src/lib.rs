// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Game logic for the Xasuuso memory game.
//!
//! The device plays an ever-growing sequence on four LEDs and the player repeats it on four
//! buttons. This crate holds everything except the board itself:
//! - Default: `no_std` for the RP2040 firmware
//! - `std` feature: `std::error::Error` impls for host tools
//! - `defmt` feature: derives `defmt::Format` and logs phase transitions
//!
//! Pins are `embedded-hal` 1.0 digital pins, time is a microsecond counter supplied by the
//! caller, and randomness is any [`rand_core::RngCore`].

#![cfg_attr(not(feature = "std"), no_std)]

macro_rules! log_info {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        #[cfg(feature = "defmt")]
        defmt::info!($fmt $(, $arg)*);
        #[cfg(not(feature = "defmt"))]
        {
            $(let _ = &$arg;)*
        }
    };
}

macro_rules! log_debug {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        #[cfg(feature = "defmt")]
        defmt::debug!($fmt $(, $arg)*);
        #[cfg(not(feature = "defmt"))]
        {
            $(let _ = &$arg;)*
        }
    };
}

pub mod debounce;
pub mod display;
pub mod game;
pub mod input;
pub mod io;
pub mod matcher;
pub mod playback;
pub mod sequence;
pub mod timing;

pub use debounce::{Debouncer, Edge};
pub use display::{score_line, ScoreDisplay};
pub use game::{GameController, Phase};
pub use input::InputCollector;
pub use io::{Buttons, Leds};
pub use matcher::{matches, MatchCursor, Verdict};
pub use playback::Playback;
pub use sequence::{Sequence, SequenceFull, SequenceGenerator};
pub use timing::Timing;

/// Number of button/LED pairs on the board.
pub const CHANNEL_COUNT: usize = 4;

/// Longest sequence a game can reach. Completing a round of this length wins the game.
pub const MAX_LENGTH: usize = 20;

/// One button/LED pair, identified by its position from left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelId(u8);

impl ChannelId {
    /// All channels in scan order.
    pub const ALL: [ChannelId; CHANNEL_COUNT] =
        [ChannelId(0), ChannelId(1), ChannelId(2), ChannelId(3)];

    pub const fn new(id: u8) -> Option<Self> {
        if (id as usize) < CHANNEL_COUNT {
            Some(Self(id))
        } else {
            None
        }
    }

    pub const fn id(self) -> u8 {
        self.0
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}
