use anchor_lang::prelude::*;

use crate::{
    events::RaffleInitialized,
    state::{
        Config, Raffle, RaffleParams, Treasury, VrfCoordinator, CONFIG_ACCOUNT_SIZE, CONFIG_SEED,
        COORDINATOR_ACCOUNT_SIZE, COORDINATOR_SEED, RAFFLE_ACCOUNT_SIZE, RAFFLE_SEED,
        TREASURY_ACCOUNT_SIZE, TREASURY_SEED,
    },
};

/// Instruction to create the raffle. Called once per deployment.
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `params` - Entrance fee, interval and oracle parameters, fixed from here on
///
/// # Security Considerations
/// 1. All PDAs use fixed seeds, so a second call fails on `init`
/// 2. The signer is recorded as the management authority, which may only
///    recover a stalled round and never touches the pooled funds directly
/// 3. `coordinator_authority` is the only key able to deliver randomness
///
/// # Implementation Notes
/// - The round starts Open with the interval anchored at the current time
pub fn initialize(ctx: Context<Initialize>, params: RaffleParams) -> Result<()> {
    params.validate()?;

    let now = Clock::get()?.unix_timestamp;
    let management_authority = ctx.accounts.management_authority.key();
    let coordinator_authority = ctx.accounts.coordinator_authority.key();

    ctx.accounts
        .config
        .set_inner(Config::new(&params, management_authority, ctx.bumps.config));
    ctx.accounts
        .raffle
        .set_inner(Raffle::new(now, ctx.bumps.raffle));
    ctx.accounts.treasury.bump = ctx.bumps.treasury;
    ctx.accounts.coordinator.set_inner(VrfCoordinator {
        authority: coordinator_authority,
        request_counter: 0,
        bump: ctx.bumps.coordinator,
    });

    emit!(RaffleInitialized {
        raffle: ctx.accounts.raffle.key(),
        entrance_fee: params.entrance_fee,
        interval: params.interval,
        coordinator_authority,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = management_authority,
        space = CONFIG_ACCOUNT_SIZE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = management_authority,
        space = RAFFLE_ACCOUNT_SIZE,
        seeds = [RAFFLE_SEED],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        init,
        payer = management_authority,
        space = TREASURY_ACCOUNT_SIZE,
        seeds = [TREASURY_SEED],
        bump
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(
        init,
        payer = management_authority,
        space = COORDINATOR_ACCOUNT_SIZE,
        seeds = [COORDINATOR_SEED],
        bump
    )]
    pub coordinator: Account<'info, VrfCoordinator>,

    #[account(mut)]
    pub management_authority: Signer<'info>,

    /// CHECK: Only the key is stored. It must sign every randomness delivery.
    pub coordinator_authority: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
