//! AES block cipher implementation
//!
//! This module implements the Advanced Encryption Standard (AES) block cipher
//! as specified in FIPS 197, for all three key sizes behind one type whose
//! [`Variant`] is chosen at construction.
//!
//! ## Layout
//!
//! - [`gf`]: multiplication in GF(2⁸), used by MixColumns
//! - [`sbox`]: forward and inverse substitution tables
//! - [`state`]: linear block <-> column-major state conversion
//! - [`key_schedule`]: key expansion into round keys
//! - [`round`]: SubBytes, ShiftRows, MixColumns, AddRoundKey and inverses
//! - [`observer`]: optional hook that sees every intermediate state
//!
//! Table lookups are used for the S-box; this implementation makes no
//! constant-time claims.

use zeroize::{Zeroize, ZeroizeOnDrop};

use rijndael_api::{validate, Result, Variant};
use rijndael_params::AES_BLOCK_SIZE;

use super::BlockCipher;

pub mod gf;
pub mod key_schedule;
pub mod observer;
pub mod round;
pub mod sbox;
pub mod state;

pub use key_schedule::RoundKeySchedule;
pub use observer::{NoopObserver, RecordingObserver, StateObserver, Step};
#[cfg(feature = "tracing")]
pub use observer::TracingObserver;
pub use state::{Block, State};

use round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};

/// AES with a fixed, already expanded key
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes {
    schedule: RoundKeySchedule,
}

impl Aes {
    /// Expand `key` for `variant`
    pub fn new(variant: Variant, key: &[u8]) -> Result<Self> {
        Ok(Self::from_schedule(RoundKeySchedule::expand(key, variant)?))
    }

    /// Wrap an already expanded schedule
    pub fn from_schedule(schedule: RoundKeySchedule) -> Self {
        Self { schedule }
    }

    /// The key size this instance was built for
    pub fn variant(&self) -> Variant {
        self.schedule.variant()
    }

    /// The expanded key
    pub fn schedule(&self) -> &RoundKeySchedule {
        &self.schedule
    }

    /// Forward cipher on a state
    ///
    /// Round 0 is a lone AddRoundKey, rounds 1..Nr-1 apply all four steps,
    /// the final round skips MixColumns.
    pub fn encrypt_state<O: StateObserver + ?Sized>(&self, state: &mut State, observer: &mut O) {
        let rounds = self.schedule.rounds();
        observer.observe(0, Step::Input, state);

        add_round_key(state, self.schedule.round_key(0));
        observer.observe(0, Step::AddRoundKey, state);

        for round in 1..rounds {
            sub_bytes(state);
            observer.observe(round, Step::SubBytes, state);
            shift_rows(state);
            observer.observe(round, Step::ShiftRows, state);
            mix_columns(state);
            observer.observe(round, Step::MixColumns, state);
            add_round_key(state, self.schedule.round_key(round));
            observer.observe(round, Step::AddRoundKey, state);
        }

        sub_bytes(state);
        observer.observe(rounds, Step::SubBytes, state);
        shift_rows(state);
        observer.observe(rounds, Step::ShiftRows, state);
        add_round_key(state, self.schedule.round_key(rounds));
        observer.observe(rounds, Step::AddRoundKey, state);
    }

    /// Inverse cipher on a state
    ///
    /// Round keys are consumed from Nr down to 0; InvMixColumns follows
    /// AddRoundKey in every middle round.
    pub fn decrypt_state<O: StateObserver + ?Sized>(&self, state: &mut State, observer: &mut O) {
        let rounds = self.schedule.rounds();
        observer.observe(rounds, Step::Input, state);

        add_round_key(state, self.schedule.round_key(rounds));
        observer.observe(rounds, Step::AddRoundKey, state);

        for round in (1..rounds).rev() {
            inv_shift_rows(state);
            observer.observe(round, Step::InvShiftRows, state);
            inv_sub_bytes(state);
            observer.observe(round, Step::InvSubBytes, state);
            add_round_key(state, self.schedule.round_key(round));
            observer.observe(round, Step::AddRoundKey, state);
            inv_mix_columns(state);
            observer.observe(round, Step::InvMixColumns, state);
        }

        inv_shift_rows(state);
        observer.observe(0, Step::InvShiftRows, state);
        inv_sub_bytes(state);
        observer.observe(0, Step::InvSubBytes, state);
        add_round_key(state, self.schedule.round_key(0));
        observer.observe(0, Step::AddRoundKey, state);
    }

    /// Encrypt one block, reporting every intermediate state to `observer`
    pub fn encrypt_block_observed<O: StateObserver + ?Sized>(&self, block: &mut Block, observer: &mut O) {
        let mut state = State::from_block(block);
        self.encrypt_state(&mut state, observer);
        *block = state.to_block();
        state.zeroize();
    }

    /// Decrypt one block, reporting every intermediate state to `observer`
    pub fn decrypt_block_observed<O: StateObserver + ?Sized>(&self, block: &mut Block, observer: &mut O) {
        let mut state = State::from_block(block);
        self.decrypt_state(&mut state, observer);
        *block = state.to_block();
        state.zeroize();
    }
}

impl BlockCipher for Aes {
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

        let mut buf: Block = [0u8; AES_BLOCK_SIZE];
        buf.copy_from_slice(block);
        self.encrypt_block_observed(&mut buf, &mut NoopObserver);
        block.copy_from_slice(&buf);
        buf.zeroize();
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

        let mut buf: Block = [0u8; AES_BLOCK_SIZE];
        buf.copy_from_slice(block);
        self.decrypt_block_observed(&mut buf, &mut NoopObserver);
        block.copy_from_slice(&buf);
        buf.zeroize();
        Ok(())
    }

    fn name(&self) -> &'static str {
        self.variant().name()
    }
}

impl core::fmt::Debug for Aes {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Aes").field("variant", &self.variant()).finish()
    }
}
