use anchor_lang::prelude::*;

use crate::state::{Config, Raffle, UpkeepCheck, CONFIG_SEED, RAFFLE_SEED};

/// Read-only: reports whether `perform_upkeep` would currently succeed.
/// `check_data` is accepted for keeper compatibility and not interpreted.
pub fn check_upkeep(ctx: Context<CheckUpkeep>, _check_data: Vec<u8>) -> Result<UpkeepCheck> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx
        .accounts
        .raffle
        .check_upkeep(now, ctx.accounts.config.interval))
}

#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,

    #[account(seeds = [RAFFLE_SEED], bump = raffle.bump)]
    pub raffle: Account<'info, Raffle>,
}
