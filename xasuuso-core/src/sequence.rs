// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! The sequence the player has to reproduce, and its random growth.

use crate::{ChannelId, CHANNEL_COUNT, MAX_LENGTH};
use core::fmt;
use heapless::Vec;
use rand_core::RngCore;

// A power-of-two channel count keeps `next_u32() % CHANNEL_COUNT` unbiased.
const _: () = assert!(CHANNEL_COUNT.is_power_of_two());

/// Returned when a step is appended to a sequence that already holds [`MAX_LENGTH`] steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SequenceFull;

impl fmt::Display for SequenceFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sequence already holds {} steps", MAX_LENGTH)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SequenceFull {}

/// Append-only list of channels, bounded by [`MAX_LENGTH`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    steps: Vec<ChannelId, MAX_LENGTH>,
}

impl Sequence {
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.steps.is_full()
    }

    pub fn get(&self, index: usize) -> Option<ChannelId> {
        self.steps.get(index).copied()
    }

    pub fn as_slice(&self) -> &[ChannelId] {
        &self.steps
    }

    /// Forget every step. Only done when a fresh game starts.
    pub fn clear(&mut self) {
        self.steps.clear();
    }

    /// Capacity-checked append. A full sequence is left untouched.
    pub fn push(&mut self, step: ChannelId) -> Result<(), SequenceFull> {
        self.steps.push(step).map_err(|_| SequenceFull)
    }
}

/// Draws new steps uniformly from all channels.
pub struct SequenceGenerator<R> {
    rng: R,
}

impl<R: RngCore> SequenceGenerator<R> {
    /// `rng` must already be seeded from a non-deterministic source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn next_step(&mut self) -> ChannelId {
        let index = self.rng.next_u32() as usize % CHANNEL_COUNT;
        ChannelId::ALL[index]
    }

    /// Grow `sequence` by one random step.
    ///
    /// A full sequence is rejected before any random draw, so the cap triggers the same way
    /// whatever the generator state.
    pub fn extend(&mut self, sequence: &mut Sequence) -> Result<ChannelId, SequenceFull> {
        if sequence.is_full() {
            return Err(SequenceFull);
        }
        let step = self.next_step();
        sequence.push(step)?;
        Ok(step)
    }
}
