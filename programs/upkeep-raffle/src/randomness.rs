//! Narrow interface between the raffle and the external randomness oracle.
//!
//! A request is issued synchronously and answered later by the
//! `fulfill_random_words` instruction, correlated by the returned request id.

use anchor_lang::prelude::*;
use arrayref::array_ref;

use crate::error::RaffleError;

/// Confirmations the oracle waits for before answering.
pub const REQUEST_CONFIRMATIONS: u16 = 3;
/// Random words requested per round.
pub const NUM_WORDS: u32 = 1;

// u64 vector length prefix, then (slot: u64, hash: [u8; 32]) entries
const SLOT_HASHES_FIRST_HASH_OFFSET: usize = 16;

/// Everything the oracle needs to serve one request.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RandomnessRequestParams {
    pub requester: Pubkey,
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_compute_limit: u32,
    pub num_words: u32,
    pub seed: [u8; 32],
}

pub trait RandomnessGateway {
    /// Issues a request and returns its id. The answer arrives asynchronously.
    fn request_randomness(&mut self, params: &RandomnessRequestParams) -> Result<u64>;
}

/// Reduces a 256-bit big-endian random word modulo `players`.
///
/// The reduction is exact, so the result equals `word mod players` for the
/// full 256-bit value rather than a truncated prefix of it.
pub fn winner_index(word: &[u8; 32], players: u64) -> Result<u64> {
    require!(players > 0, RaffleError::NoPlayers);

    let modulus = players as u128;
    // acc < modulus <= u64::MAX, so acc * 256 + 255 stays well inside u128
    let index = word
        .iter()
        .fold(0u128, |acc, byte| ((acc << 8) | *byte as u128) % modulus);

    Ok(index as u64)
}

/// Extracts the most recent block hash from raw SlotHashes sysvar data.
pub fn latest_slot_hash(data: &[u8]) -> Result<[u8; 32]> {
    require!(
        data.len() >= SLOT_HASHES_FIRST_HASH_OFFSET + 32,
        RaffleError::InvalidSlotHashesAccount
    );
    Ok(*array_ref![data, SLOT_HASHES_FIRST_HASH_OFFSET, 32])
}
