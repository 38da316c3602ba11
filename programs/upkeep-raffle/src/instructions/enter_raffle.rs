use anchor_lang::{prelude::*, system_program};

use crate::{
    error::RaffleError,
    state::{
        Config, Entry, Raffle, Treasury, CONFIG_SEED, ENTRY_ACCOUNT_SIZE, ENTRY_SEED, RAFFLE_SEED,
        TREASURY_SEED,
    },
};

/// Instruction to enter the current round
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `amount` - Lamports to deposit, at least the entrance fee
///
/// # Security Considerations
/// 1. Rejects deposits below the entrance fee
/// 2. Rejects entries while a winner is being resolved
/// 3. Verifies the treasury received exactly `amount`
///
/// # Implementation Notes
/// - Updates state before performing the transfer
/// - Each entry gets its own PDA `["entry", round, index]`, paid by the player
/// - Repeat entries are allowed; each one is a separate chance to win
pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    let entrance_fee = ctx.accounts.config.entrance_fee;
    let event = ctx
        .accounts
        .raffle
        .enter(ctx.accounts.player.key(), amount, entrance_fee)?;

    ctx.accounts.entry.set_inner(Entry {
        round: event.round,
        index: event.index,
        owner: event.player,
        bump: ctx.bumps.entry,
    });

    let pre_transfer_balance = ctx.accounts.treasury.to_account_info().lamports();

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.treasury.to_account_info(),
            },
        ),
        amount,
    )?;

    let post_transfer_balance = ctx.accounts.treasury.to_account_info().lamports();
    require!(
        post_transfer_balance
            == pre_transfer_balance
                .checked_add(amount)
                .ok_or(RaffleError::Overflow)?,
        RaffleError::TransferFailed
    );

    emit!(event);

    Ok(())
}

#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,

    #[account(mut, seeds = [RAFFLE_SEED], bump = raffle.bump)]
    pub raffle: Account<'info, Raffle>,

    /// New entry at the next free index of the current round
    #[account(
        init,
        payer = player,
        space = ENTRY_ACCOUNT_SIZE,
        seeds = [
            ENTRY_SEED,
            raffle.round.to_le_bytes().as_ref(),
            raffle.player_count.to_le_bytes().as_ref()
        ],
        bump,
    )]
    pub entry: Account<'info, Entry>,

    /// Receives the deposit
    #[account(mut, seeds = [TREASURY_SEED], bump = treasury.bump)]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}
