// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Round state machine.
//!
//! One game is a loop of rounds:
//! - `Grow`: append one random step and show the round number; a full sequence wins instead
//! - `Play`: replay the whole sequence on the LEDs
//! - `Collect`: read presses until the sequence is reproduced or a press is wrong
//! - `Evaluate`: continue with a longer sequence, or end the game
//!
//! A lost game flashes every LED, shows the best score and starts over from an empty sequence.
//! Completing a round of [`MAX_LENGTH`](crate::MAX_LENGTH) steps wins and starts over the same way.
//!
//! Every timed state remembers when it was entered; [`GameController::poll`] never blocks.

use crate::{
    display::{score_line, ScoreDisplay},
    input::InputCollector,
    matcher::{MatchCursor, Verdict},
    playback::Playback,
    sequence::{Sequence, SequenceGenerator},
    timing::elapsed,
    Buttons, ChannelId, Leds, Timing, CHANNEL_COUNT,
};
use embedded_hal::digital::{InputPin, OutputPin};
use rand_core::RngCore;

const BANNER: &str = "XASUUSO!";
const GOOD_JOB: &str = "Good Job!";
const GAME_OVER: &str = "GAME OVER!";
const VICTORY: &str = "YOU WIN!";

/// Observable phase of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Startup banner.
    Attract,
    RoundStart,
    Grow,
    Play,
    Collect,
    Evaluate,
    /// "Good Job!" pause between two rounds.
    Intermission,
    GameOver,
    /// The sequence reached its maximum length and was reproduced.
    Victory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Passed,
    Failed { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AlertState {
    /// All LEDs toggling together; `toggles` already performed.
    Blinking { toggles: u8, since_us: u64 },
    /// LEDs dark, best score on screen.
    Holding { since_us: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameState {
    Attract { since_us: u64 },
    RoundStart { fresh: bool },
    Grow,
    Play(Playback),
    Collect(MatchCursor),
    Evaluate(Outcome),
    Intermission { since_us: u64 },
    GameOver(AlertState),
    Victory(AlertState),
}

impl GameState {
    fn phase(&self) -> Phase {
        match self {
            Self::Attract { .. } => Phase::Attract,
            Self::RoundStart { .. } => Phase::RoundStart,
            Self::Grow => Phase::Grow,
            Self::Play(_) => Phase::Play,
            Self::Collect(_) => Phase::Collect,
            Self::Evaluate(_) => Phase::Evaluate,
            Self::Intermission { .. } => Phase::Intermission,
            Self::GameOver(_) => Phase::GameOver,
            Self::Victory(_) => Phase::Victory,
        }
    }
}

/// Owns every piece of game state and the hardware it drives.
pub struct GameController<O, I, D, R> {
    leds: Leds<O>,
    buttons: Buttons<I>,
    display: D,
    generator: SequenceGenerator<R>,
    collector: InputCollector,
    sequence: Sequence,
    timing: Timing,
    state: GameState,
    best_score: u8,
}

impl<O, I, D, R> GameController<O, I, D, R>
where
    O: OutputPin,
    I: InputPin,
    D: ScoreDisplay,
    R: RngCore,
{
    /// Switch every LED off, show the banner and start a game with an empty sequence.
    ///
    /// `rng` must be seeded from a non-deterministic source, otherwise every power cycle plays
    /// the same game.
    pub fn new(
        leds: [O; CHANNEL_COUNT],
        buttons: [I; CHANNEL_COUNT],
        mut display: D,
        rng: R,
        timing: Timing,
        now_us: u64,
    ) -> Self {
        let leds = Leds::new(leds);
        let mut buttons = Buttons::new(buttons);
        let collector = InputCollector::new(&mut buttons, now_us);
        display.show_status(BANNER);

        Self {
            leds,
            buttons,
            display,
            generator: SequenceGenerator::new(rng),
            collector,
            sequence: Sequence::new(),
            timing,
            state: GameState::Attract { since_us: now_us },
            best_score: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Length of the current round.
    pub fn round(&self) -> usize {
        self.sequence.len()
    }

    /// Longest round completed since power-up.
    pub fn best_score(&self) -> u8 {
        self.best_score
    }

    /// Sample inputs and advance the game by at most one transition.
    pub fn poll(&mut self, now_us: u64) {
        let pressed = self
            .collector
            .poll(now_us, &mut self.buttons, &mut self.leds, &self.timing);

        let state = self.state;
        let new_state = self.step(state, now_us, pressed);

        if new_state.phase() != state.phase() {
            log_info!("Game: {} -> {}", state.phase(), new_state.phase());
        }
        self.state = new_state;
    }

    fn step(&mut self, state: GameState, now_us: u64, pressed: Option<ChannelId>) -> GameState {
        match state {
            GameState::Attract { since_us } => {
                if elapsed(since_us, now_us) < self.timing.banner_us {
                    return state;
                }
                GameState::RoundStart { fresh: true }
            }
            GameState::RoundStart { fresh } => {
                if fresh {
                    self.sequence.clear();
                }
                GameState::Grow
            }
            GameState::Grow => self.grow(now_us),
            GameState::Play(mut playback) => {
                if !playback.poll(now_us, &self.sequence, &mut self.leds, &self.timing) {
                    return GameState::Play(playback);
                }
                self.collector.arm();
                GameState::Collect(MatchCursor::new())
            }
            GameState::Collect(cursor) => self.collect(cursor, pressed),
            GameState::Evaluate(outcome) => self.evaluate(outcome, now_us),
            GameState::Intermission { since_us } => {
                if elapsed(since_us, now_us) < self.timing.intermission_us {
                    return state;
                }
                GameState::RoundStart { fresh: false }
            }
            GameState::GameOver(alert) => match self.alert(alert, now_us) {
                Some(alert) => GameState::GameOver(alert),
                None => GameState::RoundStart { fresh: true },
            },
            GameState::Victory(alert) => match self.alert(alert, now_us) {
                Some(alert) => GameState::Victory(alert),
                None => GameState::RoundStart { fresh: true },
            },
        }
    }

    fn grow(&mut self, now_us: u64) -> GameState {
        match self.generator.extend(&mut self.sequence) {
            Ok(step) => {
                log_debug!("Game: round {} adds channel {}", self.sequence.len(), step);
                self.display.show_score(self.sequence.len() as u8);
                GameState::Play(Playback::new())
            }
            Err(_) => {
                log_info!("Game: maximum length {} reproduced", self.sequence.len());
                self.end_game(VICTORY, now_us, GameState::Victory)
            }
        }
    }

    fn collect(&mut self, mut cursor: MatchCursor, pressed: Option<ChannelId>) -> GameState {
        let Some(channel) = pressed else {
            return GameState::Collect(cursor);
        };

        match cursor.check(&self.sequence, channel) {
            Verdict::Continue => {
                self.collector.arm();
                GameState::Collect(cursor)
            }
            Verdict::Complete => GameState::Evaluate(Outcome::Passed),
            Verdict::Mismatch { index } => GameState::Evaluate(Outcome::Failed { index }),
        }
    }

    fn evaluate(&mut self, outcome: Outcome, now_us: u64) -> GameState {
        match outcome {
            Outcome::Passed => {
                let completed = self.sequence.len() as u8;
                self.best_score = self.best_score.max(completed);
                self.display.show_score(completed);

                if self.sequence.is_full() {
                    return GameState::Grow;
                }
                self.display.show_status(GOOD_JOB);
                GameState::Intermission { since_us: now_us }
            }
            Outcome::Failed { index } => {
                log_info!(
                    "Game: wrong press at step {} of {}",
                    index,
                    self.sequence.len()
                );
                self.end_game(GAME_OVER, now_us, GameState::GameOver)
            }
        }
    }

    fn end_game(
        &mut self,
        message: &str,
        now_us: u64,
        state: fn(AlertState) -> GameState,
    ) -> GameState {
        self.display.show_status(message);
        self.leds.set_all(true);
        state(AlertState::Blinking {
            toggles: 1,
            since_us: now_us,
        })
    }

    /// Advance the end-of-game alert. `None` once the hold is over.
    fn alert(&mut self, alert: AlertState, now_us: u64) -> Option<AlertState> {
        match alert {
            AlertState::Blinking { toggles, since_us } => {
                if elapsed(since_us, now_us) < self.timing.alert_period_us {
                    return Some(alert);
                }
                if toggles < self.timing.alert_toggles {
                    let toggles = toggles + 1;
                    self.leds.set_all(toggles % 2 == 1);
                    return Some(AlertState::Blinking {
                        toggles,
                        since_us: now_us,
                    });
                }
                self.leds.all_off();
                self.display.show_status(&score_line("Best", self.best_score));
                Some(AlertState::Holding { since_us: now_us })
            }
            AlertState::Holding { since_us } => {
                if elapsed(since_us, now_us) < self.timing.game_over_hold_us {
                    return Some(alert);
                }
                None
            }
        }
    }
}
