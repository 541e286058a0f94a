// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Host-side stand-ins for the board: recording LEDs, scripted buttons, a recording display
//! and a scripted RNG, plus a rig that runs the game 1 ms per poll.

#![allow(dead_code)]

use core::convert::Infallible;
use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use rand_core::{impls, Error, RngCore};
use xasuuso_core::{ChannelId, GameController, Phase, ScoreDisplay, Timing, CHANNEL_COUNT};

pub const TICK_US: u64 = 1_000;

/// One LED switching on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedEvent {
    pub channel: usize,
    pub lit: bool,
    pub at_us: u64,
}

/// Shared state of the simulated board.
#[derive(Debug, Default)]
pub struct Bench {
    pub now_us: u64,
    pub lit: [bool; CHANNEL_COUNT],
    pub led_log: Vec<LedEvent>,
    pub pressed: [bool; CHANNEL_COUNT],
    pub screen: Vec<String>,
}

impl Bench {
    pub fn shared() -> Rc<RefCell<Bench>> {
        Rc::new(RefCell::new(Bench::default()))
    }

    /// Channels switched on, in order.
    pub fn pulses(&self) -> Vec<usize> {
        self.led_log
            .iter()
            .filter(|e| e.lit)
            .map(|e| e.channel)
            .collect()
    }
}

pub struct FakeLed {
    bench: Rc<RefCell<Bench>>,
    channel: usize,
}

impl ErrorType for FakeLed {
    type Error = Infallible;
}

impl FakeLed {
    fn drive(&mut self, lit: bool) {
        let mut bench = self.bench.borrow_mut();
        if bench.lit[self.channel] != lit {
            bench.lit[self.channel] = lit;
            let at_us = bench.now_us;
            bench.led_log.push(LedEvent {
                channel: self.channel,
                lit,
                at_us,
            });
        }
    }
}

impl OutputPin for FakeLed {
    // Active low.
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(true);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(false);
        Ok(())
    }
}

pub struct FakeButton {
    bench: Rc<RefCell<Bench>>,
    channel: usize,
}

impl ErrorType for FakeButton {
    type Error = Infallible;
}

impl InputPin for FakeButton {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.bench.borrow().pressed[self.channel])
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.bench.borrow().pressed[self.channel])
    }
}

pub struct RecordingDisplay {
    bench: Rc<RefCell<Bench>>,
}

impl ScoreDisplay for RecordingDisplay {
    fn show_status(&mut self, text: &str) {
        self.bench.borrow_mut().screen.push(text.to_string());
    }
}

pub fn leds(bench: &Rc<RefCell<Bench>>) -> [FakeLed; CHANNEL_COUNT] {
    core::array::from_fn(|channel| FakeLed {
        bench: Rc::clone(bench),
        channel,
    })
}

pub fn buttons(bench: &Rc<RefCell<Bench>>) -> [FakeButton; CHANNEL_COUNT] {
    core::array::from_fn(|channel| FakeButton {
        bench: Rc::clone(bench),
        channel,
    })
}

pub fn display(bench: &Rc<RefCell<Bench>>) -> RecordingDisplay {
    RecordingDisplay {
        bench: Rc::clone(bench),
    }
}

/// Hands out the scripted words in order, then repeats the last one.
pub struct ScriptedRng {
    words: Vec<u32>,
    next: usize,
}

impl ScriptedRng {
    pub fn new(words: &[u32]) -> Self {
        assert!(!words.is_empty());
        Self {
            words: words.to_vec(),
            next: 0,
        }
    }

    /// Draws that map to exactly these channels.
    pub fn channels(channels: &[u8]) -> Self {
        Self::new(&channels.iter().map(|&c| c as u32).collect::<Vec<_>>())
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let word = self.words[self.next.min(self.words.len() - 1)];
        self.next += 1;
        word
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

pub fn ch(id: u8) -> ChannelId {
    ChannelId::new(id).expect("channel id in range")
}

pub type TestGame<R> = GameController<FakeLed, FakeButton, RecordingDisplay, R>;

/// A game on the simulated board, advanced one millisecond per poll.
pub struct Rig<R: RngCore = ScriptedRng> {
    pub bench: Rc<RefCell<Bench>>,
    pub game: TestGame<R>,
}

impl Rig<ScriptedRng> {
    /// Game whose rounds draw exactly `channels`, in order.
    pub fn scripted(channels: &[u8]) -> Self {
        Self::with_rng(ScriptedRng::channels(channels))
    }
}

impl<R: RngCore> Rig<R> {
    pub fn with_rng(rng: R) -> Self {
        let bench = Bench::shared();
        let game = GameController::new(
            leds(&bench),
            buttons(&bench),
            display(&bench),
            rng,
            Timing::STANDARD,
            0,
        );
        Self { bench, game }
    }

    pub fn now_us(&self) -> u64 {
        self.bench.borrow().now_us
    }

    pub fn tick(&mut self) {
        let now_us = {
            let mut bench = self.bench.borrow_mut();
            bench.now_us += TICK_US;
            bench.now_us
        };
        self.game.poll(now_us);
    }

    pub fn run_ms(&mut self, ms: u64) {
        for _ in 0..ms {
            self.tick();
        }
    }

    /// Poll until the game reaches `phase`. Panics after `limit_ms`.
    pub fn run_until(&mut self, phase: Phase, limit_ms: u64) {
        for _ in 0..limit_ms {
            if self.game.phase() == phase {
                return;
            }
            self.tick();
        }
        panic!(
            "game stuck in {:?} while waiting for {:?}",
            self.game.phase(),
            phase
        );
    }

    pub fn hold(&mut self, channel: usize, pressed: bool) {
        self.bench.borrow_mut().pressed[channel] = pressed;
    }

    /// Press and release one button, then wait out the acknowledgement.
    pub fn press(&mut self, channel: u8) {
        self.hold(channel as usize, true);
        self.run_ms(80);
        self.hold(channel as usize, false);
        self.run_ms(1_320);
    }

    /// Wait for the game to ask for input, then enter `channels`.
    pub fn enter(&mut self, channels: &[u8]) {
        self.run_until(Phase::Collect, 60_000);
        for &channel in channels {
            self.press(channel);
        }
    }

    /// Reproduce the current sequence correctly.
    pub fn play_round(&mut self) {
        self.run_until(Phase::Collect, 60_000);
        let steps: Vec<u8> = self.game.sequence().as_slice().iter().map(|c| c.id()).collect();
        self.enter(&steps);
    }

    pub fn screen(&self) -> Vec<String> {
        self.bench.borrow().screen.clone()
    }

    pub fn clear_logs(&mut self) {
        let mut bench = self.bench.borrow_mut();
        bench.led_log.clear();
        bench.screen.clear();
    }
}
