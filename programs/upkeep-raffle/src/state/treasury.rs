use anchor_lang::prelude::*;

pub const TREASURY_SEED: &[u8] = b"treasury";

// 8 discriminator, 1 bump
pub const TREASURY_ACCOUNT_SIZE: usize = 8 + 1;

/// Program-owned account holding the pooled deposits on top of its rent reserve.
#[account]
pub struct Treasury {
    pub bump: u8,
}
