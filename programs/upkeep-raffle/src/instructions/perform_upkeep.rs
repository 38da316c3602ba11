use std::str::FromStr;

use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    randomness::latest_slot_hash,
    state::{Config, Raffle, VrfCoordinator, CONFIG_SEED, COORDINATOR_SEED, RAFFLE_SEED},
};

/// Moves the round to Resolving and asks the oracle for a random word.
/// Anyone may call this; the upkeep condition is re-checked on execution,
/// so a stale or duplicate trigger fails with `UpkeepNotNeeded`.
///
/// Execution requirements:
/// 1. The raffle must be Open
/// 2. At least `interval` seconds have passed since the last round closed
/// 3. The round has at least one player and a non-zero balance
///
/// After execution:
/// - The raffle is Resolving and remembers the pending request id
/// - The coordinator has published a `RandomWordsRequested` event seeded
///   with the most recent slot hash
///
/// # Errors
/// - `InvalidSlotHashesAccount` if the provided SlotHashes account is invalid
/// - `UpkeepNotNeeded` with the balance, player count and state attached
/// - `Overflow` if the coordinator ran out of request ids
pub fn perform_upkeep(ctx: Context<PerformUpkeep>, _perform_data: Vec<u8>) -> Result<()> {
    // Manually validate the recent_slothashes account
    let pubkey_matches = Pubkey::from_str("SysvarS1otHashes111111111111111111111111111")
        .or(Err(RaffleError::InvalidSlotHashesAccount))?
        .eq(&ctx.accounts.recent_slothashes.key());
    require!(pubkey_matches, RaffleError::InvalidSlotHashesAccount);

    let seed = {
        let data = ctx.accounts.recent_slothashes.try_borrow_data()?;
        latest_slot_hash(&data)?
    };

    let now = Clock::get()?.unix_timestamp;
    let interval = ctx.accounts.config.interval;
    let params = ctx
        .accounts
        .config
        .randomness_request(ctx.accounts.raffle.key(), seed);

    let event = ctx.accounts.raffle.request_resolution(
        now,
        interval,
        &mut *ctx.accounts.coordinator,
        &params,
    )?;

    msg!("Requested randomness, request id {}", event.request_id);
    emit!(event);

    Ok(())
}

#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,

    #[account(mut, seeds = [RAFFLE_SEED], bump = raffle.bump)]
    pub raffle: Account<'info, Raffle>,

    /// Issues the request id
    #[account(mut, seeds = [COORDINATOR_SEED], bump = coordinator.bump)]
    pub coordinator: Account<'info, VrfCoordinator>,

    /// The SlotHashes sysvar, used as the request seed
    /// CHECK: Using UncheckedAccount because we manually validate the correct sysvar.
    /// This is needed because Anchor will always throw an error on the SlotHashes sysvar.
    pub recent_slothashes: UncheckedAccount<'info>,
}
