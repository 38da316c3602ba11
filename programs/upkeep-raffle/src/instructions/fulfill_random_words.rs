use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{
        Entry, Raffle, Treasury, VrfCoordinator, COORDINATOR_SEED, ENTRY_SEED, RAFFLE_SEED,
        TREASURY_ACCOUNT_SIZE, TREASURY_SEED,
    },
};

/// Oracle callback: consumes the random word for the pending request, pays
/// the whole pool to the selected player and reopens the raffle.
///
/// # Security Considerations
/// 1. Only the coordinator authority may deliver randomness
/// 2. The request id must match the pending one, so replays and answers to
///    abandoned requests are rejected
/// 3. `winning_entry` must be the current round's entry at index
///    `randomness mod player_count`; the fulfiller derives its address from
///    the public raffle state
/// 4. `winner` must be the owner of that entry
/// 5. The treasury keeps its rent-exempt reserve
///
/// # Implementation Notes
/// - If the payout cannot be made the instruction fails as a whole and the
///   round stays Resolving, so the same answer can be delivered again
pub fn fulfill_random_words(
    ctx: Context<FulfillRandomWords>,
    request_id: u64,
    randomness: [u8; 32],
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let rent_reserve = Rent::get()?.minimum_balance(TREASURY_ACCOUNT_SIZE);
    let treasury = ctx.accounts.treasury.to_account_info();
    let winner_account = ctx.accounts.winner.to_account_info();

    let event = ctx.accounts.raffle.fulfill_random_words(
        request_id,
        &randomness,
        &ctx.accounts.winning_entry,
        now,
        |winner, prize| pay_winner(&treasury, &winner_account, winner, prize, rent_reserve),
    )?;

    msg!("Winner {} received {} lamports", event.winner, event.prize);
    emit!(event);

    Ok(())
}

/// Moves `prize` lamports from the treasury to `winner`, which must be the
/// account of `expected`. The treasury never drops below `rent_reserve`.
///
/// Works by adjusting lamports directly, which is possible because the
/// treasury is a PDA owned by this program.
pub fn pay_winner<'info>(
    treasury: &AccountInfo<'info>,
    winner: &AccountInfo<'info>,
    expected: &Pubkey,
    prize: u64,
    rent_reserve: u64,
) -> Result<()> {
    require_keys_eq!(*winner.key, *expected, RaffleError::WinnerAccountMismatch);

    let available = treasury
        .lamports()
        .checked_sub(rent_reserve)
        .ok_or(RaffleError::TransferFailed)?;
    require!(available >= prize, RaffleError::TransferFailed);

    treasury.sub_lamports(prize)?;
    winner.add_lamports(prize)?;
    Ok(())
}

#[derive(Accounts)]
pub struct FulfillRandomWords<'info> {
    #[account(mut, seeds = [RAFFLE_SEED], bump = raffle.bump)]
    pub raffle: Account<'info, Raffle>,

    /// Entry picked by the random word
    #[account(
        seeds = [
            ENTRY_SEED,
            winning_entry.round.to_le_bytes().as_ref(),
            winning_entry.index.to_le_bytes().as_ref()
        ],
        bump = winning_entry.bump,
    )]
    pub winning_entry: Account<'info, Entry>,

    /// Holds the pool being paid out
    #[account(mut, seeds = [TREASURY_SEED], bump = treasury.bump)]
    pub treasury: Account<'info, Treasury>,

    #[account(
        seeds = [COORDINATOR_SEED],
        bump = coordinator.bump,
        has_one = authority @ RaffleError::NotCoordinatorAuthority,
    )]
    pub coordinator: Account<'info, VrfCoordinator>,

    /// The oracle key recorded at initialization
    pub authority: Signer<'info>,

    /// CHECK: Compared against the winning entry's owner before any lamports move.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    const RESERVE: u64 = 946_560;
    const PRIZE: u64 = 4_000_000_000;

    fn account<'a>(
        key: &'a Pubkey,
        lamports: &'a mut u64,
        data: &'a mut [u8],
        owner: &'a Pubkey,
    ) -> AccountInfo<'a> {
        AccountInfo::new(key, false, true, lamports, data, owner, false, 0)
    }

    #[test]
    fn pays_exactly_the_prize() {
        let (treasury_key, winner_key, system) = (Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::default());
        let (mut treasury_lamports, mut winner_lamports) = (RESERVE + PRIZE + 7, 5);
        let (mut treasury_data, mut winner_data) = ([0u8; TREASURY_ACCOUNT_SIZE], [0u8; 0]);
        let treasury = account(&treasury_key, &mut treasury_lamports, &mut treasury_data, &crate::ID);
        let winner = account(&winner_key, &mut winner_lamports, &mut winner_data, &system);

        pay_winner(&treasury, &winner, &winner_key, PRIZE, RESERVE).unwrap();

        assert_eq!(treasury.lamports(), RESERVE + 7);
        assert_eq!(winner.lamports(), PRIZE + 5);
    }

    #[test]
    fn rejects_account_of_someone_else() {
        let (treasury_key, winner_key, system) = (Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::default());
        let (mut treasury_lamports, mut winner_lamports) = (RESERVE + PRIZE, 0);
        let (mut treasury_data, mut winner_data) = ([0u8; TREASURY_ACCOUNT_SIZE], [0u8; 0]);
        let treasury = account(&treasury_key, &mut treasury_lamports, &mut treasury_data, &crate::ID);
        let winner = account(&winner_key, &mut winner_lamports, &mut winner_data, &system);

        let err = pay_winner(&treasury, &winner, &Pubkey::new_unique(), PRIZE, RESERVE).unwrap_err();

        assert_eq!(err, Error::from(RaffleError::WinnerAccountMismatch));
        assert_eq!(treasury.lamports(), RESERVE + PRIZE);
        assert_eq!(winner.lamports(), 0);
    }

    #[test]
    fn keeps_the_treasury_rent_reserve() {
        let (treasury_key, winner_key, system) = (Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::default());
        let (mut treasury_lamports, mut winner_lamports) = (RESERVE + PRIZE - 1, 0);
        let (mut treasury_data, mut winner_data) = ([0u8; TREASURY_ACCOUNT_SIZE], [0u8; 0]);
        let treasury = account(&treasury_key, &mut treasury_lamports, &mut treasury_data, &crate::ID);
        let winner = account(&winner_key, &mut winner_lamports, &mut winner_data, &system);

        let err = pay_winner(&treasury, &winner, &winner_key, PRIZE, RESERVE).unwrap_err();

        assert_eq!(err, Error::from(RaffleError::TransferFailed));
        assert_eq!(treasury.lamports(), RESERVE + PRIZE - 1);
        assert_eq!(winner.lamports(), 0);
    }

    #[test]
    fn treasury_below_reserve_is_rejected() {
        let (treasury_key, winner_key, system) = (Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::default());
        let (mut treasury_lamports, mut winner_lamports) = (RESERVE - 1, 0);
        let (mut treasury_data, mut winner_data) = ([0u8; TREASURY_ACCOUNT_SIZE], [0u8; 0]);
        let treasury = account(&treasury_key, &mut treasury_lamports, &mut treasury_data, &crate::ID);
        let winner = account(&winner_key, &mut winner_lamports, &mut winner_data, &system);

        let err = pay_winner(&treasury, &winner, &winner_key, 0, RESERVE).unwrap_err();

        assert_eq!(err, Error::from(RaffleError::TransferFailed));
    }
}
