// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Display sink for status text and scores.

use core::fmt::Write;
use heapless::String;

/// Longest line the game ever renders.
pub const LINE_CAPACITY: usize = 16;

/// Something that shows one line of text, replacing whatever was shown before.
pub trait ScoreDisplay {
    fn show_status(&mut self, text: &str);

    /// Show a round length as "Score: N".
    fn show_score(&mut self, score: u8) {
        self.show_status(&score_line("Score", score));
    }
}

/// A display that failed to come up: the game runs headless.
impl<D: ScoreDisplay> ScoreDisplay for Option<D> {
    fn show_status(&mut self, text: &str) {
        if let Some(display) = self {
            display.show_status(text);
        }
    }

    fn show_score(&mut self, score: u8) {
        if let Some(display) = self {
            display.show_score(score);
        }
    }
}

/// Format `"<label>: <value>"`.
pub fn score_line(label: &str, value: u8) -> String<LINE_CAPACITY> {
    let mut line = String::new();
    // Labels are short literals and a u8 has at most 3 digits, so this never overflows.
    let _ = write!(line, "{}: {}", label, value);
    line
}
