// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Comparison of the player's presses against the sequence.

use crate::{ChannelId, Sequence};

/// `true` when the first `length` presses reproduce the first `length` steps.
///
/// Stops at the first differing index. Missing presses or steps count as a mismatch.
pub fn matches(expected: &[ChannelId], actual: &[ChannelId], length: usize) -> bool {
    (0..length).all(|i| match (expected.get(i), actual.get(i)) {
        (Some(want), Some(got)) => want == got,
        _ => false,
    })
}

/// Outcome of checking one press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Verdict {
    /// Correct, more presses expected.
    Continue,
    /// Correct, and the whole sequence has been reproduced.
    Complete,
    /// Wrong channel at `index`. No further presses are checked.
    Mismatch { index: usize },
}

/// Incremental matcher: one press at a time, so collection can stop at the first mistake.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchCursor {
    position: usize,
}

impl MatchCursor {
    pub const fn new() -> Self {
        Self { position: 0 }
    }

    /// Number of presses accepted so far.
    pub const fn position(&self) -> usize {
        self.position
    }

    pub fn check(&mut self, expected: &Sequence, pressed: ChannelId) -> Verdict {
        let index = self.position;
        if expected.get(index) != Some(pressed) {
            return Verdict::Mismatch { index };
        }

        self.position += 1;
        if self.position >= expected.len() {
            Verdict::Complete
        } else {
            Verdict::Continue
        }
    }
}
