//! Optional hook into the round pipeline
//!
//! The block transforms call a [`StateObserver`] after every step when one
//! is passed to [`Aes::encrypt_block_observed`] or
//! [`Aes::decrypt_block_observed`]. The plain `encrypt_block` and
//! `decrypt_block` paths use [`NoopObserver`], which compiles away.
//!
//! [`Aes::encrypt_block_observed`]: super::Aes::encrypt_block_observed
//! [`Aes::decrypt_block_observed`]: super::Aes::decrypt_block_observed

use alloc::vec::Vec;

use super::state::{Block, State};

/// Position within the round pipeline at which the state was observed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// State right after loading the input block
    Input,
    /// After SubBytes
    SubBytes,
    /// After ShiftRows
    ShiftRows,
    /// After MixColumns
    MixColumns,
    /// After InvSubBytes
    InvSubBytes,
    /// After InvShiftRows
    InvShiftRows,
    /// After InvMixColumns
    InvMixColumns,
    /// After AddRoundKey
    AddRoundKey,
}

/// Receives intermediate states of a block transform
pub trait StateObserver {
    /// Called with the round number (0..=rounds) and the step just applied
    fn observe(&mut self, round: usize, step: Step, state: &State);
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl StateObserver for NoopObserver {
    #[inline(always)]
    fn observe(&mut self, _round: usize, _step: Step, _state: &State) {}
}

/// Observer that keeps every state it sees, in order
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    /// `(round, step, state as a linear block)`
    pub events: Vec<(usize, Step, Block)>,
}

impl RecordingObserver {
    /// Creates an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// The state recorded at `(round, step)`, if any
    pub fn find(&self, round: usize, step: Step) -> Option<&Block> {
        self.events
            .iter()
            .find(|(r, s, _)| *r == round && *s == step)
            .map(|(_, _, block)| block)
    }
}

impl StateObserver for RecordingObserver {
    fn observe(&mut self, round: usize, step: Step, state: &State) {
        self.events.push((round, step, state.to_block()));
    }
}

/// Observer that emits a `trace` event per step through `tracing`
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

#[cfg(feature = "tracing")]
impl StateObserver for TracingObserver {
    fn observe(&mut self, round: usize, step: Step, state: &State) {
        tracing::trace!(
            round,
            step = ?step,
            state = %hex::encode(state.to_block()),
            "aes round state"
        );
    }
}

impl<O: StateObserver + ?Sized> StateObserver for &mut O {
    #[inline(always)]
    fn observe(&mut self, round: usize, step: Step, state: &State) {
        (**self).observe(round, step, state)
    }
}
