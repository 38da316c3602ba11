use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    events::RandomWordsRequested,
    randomness::{RandomnessGateway, RandomnessRequestParams},
};

pub const COORDINATOR_SEED: &[u8] = b"coordinator";

// 8 discriminator + 32 authority + 8 request_counter + 1 bump
pub const COORDINATOR_ACCOUNT_SIZE: usize = 8 + 32 + 8 + 1;

/// Local end of the randomness oracle.
///
/// Requests are published as `RandomWordsRequested` events; the oracle
/// answers by signing `fulfill_random_words` with `authority`.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct VrfCoordinator {
    /// Oracle key allowed to deliver randomness
    pub authority: Pubkey,
    /// Id of the most recently issued request, 0 before the first one
    pub request_counter: u64,
    pub bump: u8,
}

impl VrfCoordinator {
    pub fn next_request_id(&mut self) -> Result<u64> {
        self.request_counter = self
            .request_counter
            .checked_add(1)
            .ok_or(RaffleError::Overflow)?;
        Ok(self.request_counter)
    }
}

impl RandomnessGateway for VrfCoordinator {
    fn request_randomness(&mut self, params: &RandomnessRequestParams) -> Result<u64> {
        let request_id = self.next_request_id()?;

        emit!(RandomWordsRequested {
            request_id,
            requester: params.requester,
            key_hash: params.key_hash,
            subscription_id: params.subscription_id,
            request_confirmations: params.request_confirmations,
            callback_compute_limit: params.callback_compute_limit,
            num_words: params.num_words,
            seed: params.seed,
        });

        Ok(request_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_ids_start_at_one_and_increase() {
        let mut coordinator = VrfCoordinator {
            authority: Pubkey::new_unique(),
            request_counter: 0,
            bump: 254,
        };
        assert_eq!(coordinator.next_request_id().unwrap(), 1);
        assert_eq!(coordinator.next_request_id().unwrap(), 2);
        assert_eq!(coordinator.request_counter, 2);
    }

    #[test]
    fn counter_overflow_is_an_error() {
        let mut coordinator = VrfCoordinator {
            authority: Pubkey::new_unique(),
            request_counter: u64::MAX,
            bump: 254,
        };
        assert!(coordinator.next_request_id().is_err());
        assert_eq!(coordinator.request_counter, u64::MAX);
    }
}
