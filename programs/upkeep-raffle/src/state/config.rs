use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    randomness::{RandomnessRequestParams, NUM_WORDS, REQUEST_CONFIRMATIONS},
};

pub const CONFIG_SEED: &[u8] = b"config";

// 8 discriminator + 8 entrance_fee + 8 interval + 8 request_timeout + 32 key_hash
// + 8 subscription_id + 4 callback_compute_limit + 32 management_authority + 1 bump
pub const CONFIG_ACCOUNT_SIZE: usize = 8 + 8 + 8 + 8 + 32 + 8 + 4 + 32 + 1;

pub const MIN_REQUEST_TIMEOUT: i64 = 60 * 60; // 1 hour in seconds
pub const MIN_CALLBACK_COMPUTE_LIMIT: u32 = 10_000;
pub const MAX_CALLBACK_COMPUTE_LIMIT: u32 = 1_400_000;

/// Deployment parameters, supplied once to `initialize`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RaffleParams {
    /// Minimum deposit in lamports
    pub entrance_fee: u64,
    /// Minimum seconds between resolutions
    pub interval: u64,
    /// Seconds after which an unanswered request may be abandoned
    pub request_timeout: i64,
    /// Oracle key lane to request randomness from
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub callback_compute_limit: u32,
}

impl RaffleParams {
    pub fn validate(&self) -> Result<()> {
        require!(self.entrance_fee > 0, RaffleError::EntranceFeeTooLow);
        require!(self.interval > 0, RaffleError::IntervalTooShort);
        require!(
            self.request_timeout >= MIN_REQUEST_TIMEOUT,
            RaffleError::RequestTimeoutTooShort
        );
        require!(
            (MIN_CALLBACK_COMPUTE_LIMIT..=MAX_CALLBACK_COMPUTE_LIMIT)
                .contains(&self.callback_compute_limit),
            RaffleError::CallbackLimitOutOfRange
        );
        Ok(())
    }
}

/// Immutable for the life of the deployment.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub entrance_fee: u64,
    pub interval: u64,
    pub request_timeout: i64,
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub callback_compute_limit: u32,
    pub management_authority: Pubkey,
    pub bump: u8,
}

impl Config {
    pub fn new(params: &RaffleParams, management_authority: Pubkey, bump: u8) -> Self {
        Self {
            entrance_fee: params.entrance_fee,
            interval: params.interval,
            request_timeout: params.request_timeout,
            key_hash: params.key_hash,
            subscription_id: params.subscription_id,
            callback_compute_limit: params.callback_compute_limit,
            management_authority,
            bump,
        }
    }

    pub fn randomness_request(&self, requester: Pubkey, seed: [u8; 32]) -> RandomnessRequestParams {
        RandomnessRequestParams {
            requester,
            key_hash: self.key_hash,
            subscription_id: self.subscription_id,
            request_confirmations: REQUEST_CONFIRMATIONS,
            callback_compute_limit: self.callback_compute_limit,
            num_words: NUM_WORDS,
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn params() -> RaffleParams {
        RaffleParams {
            entrance_fee: 10_000_000,
            interval: 30,
            request_timeout: 24 * 60 * 60,
            key_hash: [7u8; 32],
            subscription_id: 588,
            callback_compute_limit: 500_000,
        }
    }

    #[test]
    fn accepts_reasonable_params() {
        assert!(params().validate().is_ok());
    }

    #[test]
    fn rejects_zero_fee_and_interval() {
        let zero_fee = RaffleParams { entrance_fee: 0, ..params() };
        assert_eq!(zero_fee.validate().unwrap_err(), Error::from(RaffleError::EntranceFeeTooLow));

        let zero_interval = RaffleParams { interval: 0, ..params() };
        assert_eq!(zero_interval.validate().unwrap_err(), Error::from(RaffleError::IntervalTooShort));
    }

    #[test]
    fn rejects_short_timeout() {
        let p = RaffleParams { request_timeout: MIN_REQUEST_TIMEOUT - 1, ..params() };
        assert_eq!(p.validate().unwrap_err(), Error::from(RaffleError::RequestTimeoutTooShort));
    }

    #[test]
    fn callback_limit_bounds_are_inclusive() {
        for limit in [MIN_CALLBACK_COMPUTE_LIMIT, MAX_CALLBACK_COMPUTE_LIMIT] {
            let p = RaffleParams { callback_compute_limit: limit, ..params() };
            assert!(p.validate().is_ok());
        }
        for limit in [MIN_CALLBACK_COMPUTE_LIMIT - 1, MAX_CALLBACK_COMPUTE_LIMIT + 1] {
            let p = RaffleParams { callback_compute_limit: limit, ..params() };
            assert_eq!(p.validate().unwrap_err(), Error::from(RaffleError::CallbackLimitOutOfRange));
        }
    }

    #[test]
    fn request_params_carry_fixed_constants() {
        let config = Config::new(&params(), Pubkey::new_unique(), 255);
        let requester = Pubkey::new_unique();
        let request = config.randomness_request(requester, [3u8; 32]);

        assert_eq!(request.requester, requester);
        assert_eq!(request.key_hash, [7u8; 32]);
        assert_eq!(request.subscription_id, 588);
        assert_eq!(request.request_confirmations, REQUEST_CONFIRMATIONS);
        assert_eq!(request.num_words, NUM_WORDS);
        assert_eq!(request.seed, [3u8; 32]);
    }
}
