// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Button collection with debouncing and LED acknowledgement.

use crate::{
    debounce::{Debouncer, Edge},
    timing::elapsed,
    Buttons, ChannelId, Leds, Timing, CHANNEL_COUNT,
};
use embedded_hal::digital::{InputPin, OutputPin};

/// Acknowledgement shown on the pressed channel's LED: off, short flash, then held on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AckStage {
    Dim,
    Flash,
    Hold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CollectState {
    /// Presses are tracked but not reported.
    Idle,
    /// Waiting for the next press.
    Armed,
    Acknowledging {
        channel: ChannelId,
        stage: AckStage,
        since_us: u64,
    },
}

/// Waits for the player to select a channel.
///
/// Buttons must be sampled on every poll, whatever the game phase, so debounce state never
/// goes stale. While armed, a channel is selected as soon as its debounced level is pressed,
/// provided it has been released since it was last selected. When several channels qualify
/// in the same poll the lowest id wins.
pub struct InputCollector {
    debouncers: [Debouncer; CHANNEL_COUNT],
    /// Cleared on selection, set again by a debounced release.
    released: [bool; CHANNEL_COUNT],
    state: CollectState,
}

impl InputCollector {
    /// Seed every debouncer with the level its button has right now.
    pub fn new<I: InputPin>(buttons: &mut Buttons<I>, now_us: u64) -> Self {
        Self {
            debouncers: ChannelId::ALL.map(|ch| Debouncer::new(buttons.is_pressed(ch), now_us)),
            released: [true; CHANNEL_COUNT],
            state: CollectState::Idle,
        }
    }

    /// Accept the next press.
    pub fn arm(&mut self) {
        self.state = CollectState::Armed;
    }

    pub fn is_armed(&self) -> bool {
        self.state == CollectState::Armed
    }

    /// Debounced level of one channel.
    pub fn is_pressed(&self, channel: ChannelId) -> bool {
        self.debouncers[channel.index()].is_pressed()
    }

    /// Sample all buttons and drive the acknowledgement.
    ///
    /// Returns the selected channel once its acknowledgement has finished; the collector is then
    /// idle until armed again.
    pub fn poll<I: InputPin, O: OutputPin>(
        &mut self,
        now_us: u64,
        buttons: &mut Buttons<I>,
        leds: &mut Leds<O>,
        timing: &Timing,
    ) -> Option<ChannelId> {
        self.sample(now_us, buttons, timing);

        match self.state {
            CollectState::Idle => None,
            CollectState::Armed => {
                if let Some(channel) = self.ready_channel() {
                    log_debug!("Input: channel {} pressed", channel);
                    self.released[channel.index()] = false;
                    leds.off(channel);
                    self.state = CollectState::Acknowledging {
                        channel,
                        stage: AckStage::Dim,
                        since_us: now_us,
                    };
                }
                None
            }
            CollectState::Acknowledging {
                channel,
                stage,
                since_us,
            } => self.acknowledge(now_us, channel, stage, since_us, leds, timing),
        }
    }

    /// Update every debouncer and remember which channels were let go.
    fn sample<I: InputPin>(&mut self, now_us: u64, buttons: &mut Buttons<I>, timing: &Timing) {
        for channel in ChannelId::ALL {
            let raw = buttons.is_pressed(channel);
            let edge = self.debouncers[channel.index()].update(raw, now_us, timing.debounce_us);
            if edge == Some(Edge::Released) {
                self.released[channel.index()] = true;
            }
        }
    }

    /// Lowest channel held down that has not been selected during this press.
    fn ready_channel(&self) -> Option<ChannelId> {
        ChannelId::ALL
            .into_iter()
            .find(|ch| self.released[ch.index()] && self.debouncers[ch.index()].is_pressed())
    }

    fn acknowledge<O: OutputPin>(
        &mut self,
        now_us: u64,
        channel: ChannelId,
        stage: AckStage,
        since_us: u64,
        leds: &mut Leds<O>,
        timing: &Timing,
    ) -> Option<ChannelId> {
        let duration = match stage {
            AckStage::Dim => timing.ack_dim_us,
            AckStage::Flash => timing.ack_flash_us,
            AckStage::Hold => timing.ack_hold_us,
        };
        if elapsed(since_us, now_us) < duration {
            return None;
        }

        let next = match stage {
            AckStage::Dim => {
                leds.on(channel);
                AckStage::Flash
            }
            AckStage::Flash => AckStage::Hold,
            AckStage::Hold => {
                leds.off(channel);
                self.state = CollectState::Idle;
                return Some(channel);
            }
        };

        self.state = CollectState::Acknowledging {
            channel,
            stage: next,
            since_us: now_us,
        };
        None
    }
}
