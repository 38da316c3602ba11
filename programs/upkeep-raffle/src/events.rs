use anchor_lang::prelude::*;

/// Event emitted once the raffle accounts are created
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaffleInitialized {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// Minimum deposit in lamports
    pub entrance_fee: u64,
    /// Minimum seconds between resolutions
    pub interval: u64,
    /// Key allowed to deliver randomness
    pub coordinator_authority: Pubkey,
}

/// Event emitted when a player enters the current round
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaffleEnter {
    /// The entrant's address
    pub player: Pubkey,
    /// Amount deposited in lamports
    pub amount: u64,
    pub round: u64,
    /// Position of this entry in the round
    pub index: u64,
    /// Number of entries in the round after this one
    pub player_count: u64,
}

/// Event emitted when the round moves to Resolving
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestedRaffleWinner {
    pub request_id: u64,
}

/// Event emitted by the coordinator for the off-chain oracle to pick up
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomWordsRequested {
    pub request_id: u64,
    /// The account that will receive the callback
    pub requester: Pubkey,
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_compute_limit: u32,
    pub num_words: u32,
    /// Recent slot hash mixed into the VRF input
    pub seed: [u8; 32],
}

/// Event emitted when randomness is consumed and the prize is paid
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinnerPicked {
    /// The winner's address
    pub winner: Pubkey,
    /// Lamports transferred to the winner
    pub prize: u64,
    /// Index of the winning entry
    pub winner_index: u64,
    pub request_id: u64,
}

/// Event emitted when an unanswered request is abandoned
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionAbandoned {
    pub request_id: u64,
    pub requested_at: i64,
    pub recovered_at: i64,
}
