use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{Config, Raffle, CONFIG_SEED, RAFFLE_SEED},
};

/// Instruction to abandon a randomness request the oracle never answered
///
/// # Security Considerations
/// 1. Only the management authority may call it
/// 2. The raffle must be Resolving for at least `request_timeout` seconds
///
/// # Implementation Notes
/// - Entries and the pooled balance stay in place; no funds move
/// - The raffle reopens and upkeep is due again right away
/// - A late answer to the abandoned request fails with `UnknownRequest`
pub fn recover_stalled_round(ctx: Context<RecoverStalledRound>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let request_timeout = ctx.accounts.config.request_timeout;

    let event = ctx
        .accounts
        .raffle
        .recover_stalled_round(now, request_timeout)?;

    msg!("Abandoned randomness request {}", event.request_id);
    emit!(event);

    Ok(())
}

#[derive(Accounts)]
pub struct RecoverStalledRound<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = management_authority @ RaffleError::NotManagementAuthority,
    )]
    pub config: Account<'info, Config>,

    #[account(mut, seeds = [RAFFLE_SEED], bump = raffle.bump)]
    pub raffle: Account<'info, Raffle>,

    pub management_authority: Signer<'info>,
}
