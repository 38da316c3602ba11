#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
use instructions::*;

pub mod error;
pub mod events;
pub mod instructions;
pub mod randomness;
pub mod state;

use state::{RaffleParams, UpkeepCheck};

declare_id!("H1SGN9DUvmYgjwsxojsmXKPQvwLg4RCXXeSnVyYySdYN");

#[program]
pub mod upkeep_raffle {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, params: RaffleParams) -> Result<()> {
        instructions::initialize::initialize(ctx, params)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
        instructions::enter_raffle::enter_raffle(ctx, amount)
    }

    pub fn check_upkeep(ctx: Context<CheckUpkeep>, check_data: Vec<u8>) -> Result<UpkeepCheck> {
        instructions::check_upkeep::check_upkeep(ctx, check_data)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>, perform_data: Vec<u8>) -> Result<()> {
        instructions::perform_upkeep::perform_upkeep(ctx, perform_data)
    }

    pub fn fulfill_random_words(
        ctx: Context<FulfillRandomWords>,
        request_id: u64,
        randomness: [u8; 32],
    ) -> Result<()> {
        instructions::fulfill_random_words::fulfill_random_words(ctx, request_id, randomness)
    }

    pub fn recover_stalled_round(ctx: Context<RecoverStalledRound>) -> Result<()> {
        instructions::recover_stalled_round::recover_stalled_round(ctx)
    }

    pub fn get_player(ctx: Context<GetPlayer>, index: u64) -> Result<Pubkey> {
        instructions::queries::get_player(ctx, index)
    }

    pub fn get_raffle_summary(ctx: Context<ViewRaffle>) -> Result<RaffleSummary> {
        instructions::queries::get_raffle_summary(ctx)
    }
}
