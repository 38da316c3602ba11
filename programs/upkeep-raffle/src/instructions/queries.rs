use anchor_lang::prelude::*;

use crate::{
    randomness::{NUM_WORDS, REQUEST_CONFIRMATIONS},
    state::{Config, Entry, Raffle, RoundState, CONFIG_SEED, RAFFLE_SEED},
};

/// Everything an external caller may want to read in one round trip.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RaffleSummary {
    pub entrance_fee: u64,
    pub interval: u64,
    pub state: RoundState,
    pub round: u64,
    pub player_count: u64,
    pub pooled_balance: u64,
    pub recent_winner: Option<Pubkey>,
    pub last_timestamp: i64,
    pub pending_request_id: Option<u64>,
    pub num_words: u32,
    pub request_confirmations: u16,
}

impl RaffleSummary {
    pub fn new(config: &Config, raffle: &Raffle) -> Self {
        Self {
            entrance_fee: config.entrance_fee,
            interval: config.interval,
            state: raffle.state,
            round: raffle.round,
            player_count: raffle.player_count,
            pooled_balance: raffle.pooled_balance,
            recent_winner: raffle.recent_winner,
            last_timestamp: raffle.last_timestamp,
            pending_request_id: raffle.pending_request_id,
            num_words: NUM_WORDS,
            request_confirmations: REQUEST_CONFIRMATIONS,
        }
    }
}

/// Returns the owner of entry `index` in the current round. The caller passes
/// the entry at `["entry", round, index]`, or omits it when none exists.
pub fn get_player(ctx: Context<GetPlayer>, index: u64) -> Result<Pubkey> {
    ctx.accounts
        .raffle
        .player(index, ctx.accounts.entry.as_deref())
}

pub fn get_raffle_summary(ctx: Context<ViewRaffle>) -> Result<RaffleSummary> {
    Ok(RaffleSummary::new(&ctx.accounts.config, &ctx.accounts.raffle))
}

#[derive(Accounts)]
pub struct ViewRaffle<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,

    #[account(seeds = [RAFFLE_SEED], bump = raffle.bump)]
    pub raffle: Account<'info, Raffle>,
}

#[derive(Accounts)]
pub struct GetPlayer<'info> {
    #[account(seeds = [RAFFLE_SEED], bump = raffle.bump)]
    pub raffle: Account<'info, Raffle>,

    /// Checked against the live round by `Raffle::player`
    pub entry: Option<Account<'info, Entry>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RaffleParams;

    #[test]
    fn summary_reflects_config_and_round() {
        let params = RaffleParams {
            entrance_fee: 500,
            interval: 60,
            request_timeout: 7_200,
            key_hash: [0u8; 32],
            subscription_id: 9,
            callback_compute_limit: 200_000,
        };
        let config = Config::new(&params, Pubkey::new_unique(), 250);
        let mut raffle = Raffle::new(1_000, 251);
        let player = Pubkey::new_unique();
        raffle.enter(player, 700, 500).unwrap();

        let summary = RaffleSummary::new(&config, &raffle);

        assert_eq!(summary.entrance_fee, 500);
        assert_eq!(summary.interval, 60);
        assert_eq!(summary.state, RoundState::Open);
        assert_eq!(summary.round, 0);
        assert_eq!(summary.player_count, 1);
        assert_eq!(summary.pooled_balance, 700);
        assert_eq!(summary.recent_winner, None);
        assert_eq!(summary.last_timestamp, 1_000);
        assert_eq!(summary.pending_request_id, None);
        assert_eq!(summary.num_words, 1);
        assert_eq!(summary.request_confirmations, 3);
    }
}
