use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    events::{RaffleEnter, RequestedRaffleWinner, ResolutionAbandoned, WinnerPicked},
    randomness::{winner_index, RandomnessGateway, RandomnessRequestParams},
    state::Entry,
};

pub const RAFFLE_SEED: &[u8] = b"raffle";

// Space calculation:
// 8 (discriminator) +
// 1 (state) +
// 8 (round) +
// 8 (player_count) +
// 8 (pooled_balance) +
// 8 (last_timestamp) +
// 9 (pending_request_id: Option<u64>) +
// 9 (requested_at: Option<i64>) +
// 33 (recent_winner: Option<Pubkey>) +
// 1 (bump) =
// 93 bytes
pub const RAFFLE_ACCOUNT_SIZE: usize = 8 + 1 + 8 + 8 + 8 + 8 + 9 + 9 + 33 + 1;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundState {
    Open = 0,
    Resolving = 1,
}

/// Answer of the upkeep evaluator.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct UpkeepCheck {
    pub upkeep_needed: bool,
    /// Opaque token for the caller to pass through to `perform_upkeep`
    pub perform_data: Vec<u8>,
}

/// Diagnostic snapshot attached to `UpkeepNotNeeded`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpkeepStatus {
    pub pooled_balance: u64,
    pub player_count: u64,
    pub state: RoundState,
}

/// The single raffle of the deployment, cycling Open -> Resolving -> Open.
///
/// Entries live in their own `Entry` accounts keyed by `(round, index)`, so
/// this account stays the same size however many players join.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct Raffle {
    pub state: RoundState,
    /// Number of rounds paid out so far; scopes the entry addresses
    pub round: u64,
    /// Entries in the current round; one identity may hold several
    pub player_count: u64,
    /// Lamports deposited this round, held by the treasury
    pub pooled_balance: u64,
    /// When the last round closed, or when the raffle was created
    pub last_timestamp: i64,
    /// Set exactly while Resolving
    pub pending_request_id: Option<u64>,
    pub requested_at: Option<i64>,
    pub recent_winner: Option<Pubkey>,
    pub bump: u8,
}

impl Raffle {
    pub fn new(now: i64, bump: u8) -> Self {
        Self {
            state: RoundState::Open,
            round: 0,
            player_count: 0,
            pooled_balance: 0,
            last_timestamp: now,
            pending_request_id: None,
            requested_at: None,
            recent_winner: None,
            bump,
        }
    }

    /// Owner of entry `index` in the current round. `entry` is whatever the
    /// caller supplied for that position; entries from earlier rounds, or a
    /// missing one, are out of range.
    pub fn player(&self, index: u64, entry: Option<&Entry>) -> Result<Pubkey> {
        match entry {
            Some(entry)
                if index < self.player_count && entry.round == self.round && entry.index == index =>
            {
                Ok(entry.owner)
            }
            _ => err!(RaffleError::IndexOutOfRange),
        }
    }

    /// Records one entry and returns it, to be stored at
    /// `Entry::address(event.round, event.index)`. Nothing changes on failure.
    pub fn enter(&mut self, player: Pubkey, amount: u64, entrance_fee: u64) -> Result<RaffleEnter> {
        require!(amount >= entrance_fee, RaffleError::InsufficientDeposit);
        require!(self.state == RoundState::Open, RaffleError::RoundNotOpen);

        let pooled_balance = self
            .pooled_balance
            .checked_add(amount)
            .ok_or(RaffleError::Overflow)?;
        let index = self.player_count;
        let player_count = index.checked_add(1).ok_or(RaffleError::Overflow)?;

        self.pooled_balance = pooled_balance;
        self.player_count = player_count;

        Ok(RaffleEnter {
            player,
            amount,
            round: self.round,
            index,
            player_count,
        })
    }

    pub fn upkeep_status(&self) -> UpkeepStatus {
        UpkeepStatus {
            pooled_balance: self.pooled_balance,
            player_count: self.player_count,
            state: self.state,
        }
    }

    /// Read-only: is a new resolution cycle due at `now`?
    pub fn check_upkeep(&self, now: i64, interval: u64) -> UpkeepCheck {
        let is_open = self.state == RoundState::Open;
        let elapsed = now.saturating_sub(self.last_timestamp);
        let time_passed = elapsed >= 0 && elapsed.unsigned_abs() >= interval;
        let has_balance = self.pooled_balance > 0;
        let has_players = self.player_count > 0;

        UpkeepCheck {
            upkeep_needed: is_open && time_passed && has_balance && has_players,
            perform_data: Vec::new(),
        }
    }

    /// Open -> Resolving. The upkeep condition is re-evaluated here, so of two
    /// callers racing on the same window only the first one succeeds.
    pub fn request_resolution<G>(
        &mut self,
        now: i64,
        interval: u64,
        gateway: &mut G,
        params: &RandomnessRequestParams,
    ) -> Result<RequestedRaffleWinner>
    where
        G: RandomnessGateway + ?Sized,
    {
        if !self.check_upkeep(now, interval).upkeep_needed {
            let status = self.upkeep_status();
            msg!(
                "Upkeep not needed: balance {}, players {}, state {:?}",
                status.pooled_balance,
                status.player_count,
                status.state
            );
            return Err(error!(RaffleError::UpkeepNotNeeded).with_values((
                format!("balance={}, players={}", status.pooled_balance, status.player_count),
                format!("state={:?}", status.state),
            )));
        }

        let request_id = gateway.request_randomness(params)?;

        self.state = RoundState::Resolving;
        self.pending_request_id = Some(request_id);
        self.requested_at = Some(now);

        Ok(RequestedRaffleWinner { request_id })
    }

    /// Consumes the oracle's answer: checks `winning_entry` is the one the
    /// random word selects, pays its owner and starts the next round.
    ///
    /// `payout` runs before any field is written, so a failed transfer leaves
    /// the round untouched in Resolving.
    pub fn fulfill_random_words<F>(
        &mut self,
        request_id: u64,
        randomness: &[u8; 32],
        winning_entry: &Entry,
        now: i64,
        payout: F,
    ) -> Result<WinnerPicked>
    where
        F: FnOnce(&Pubkey, u64) -> Result<()>,
    {
        require!(
            self.state == RoundState::Resolving && self.pending_request_id == Some(request_id),
            RaffleError::UnknownRequest
        );

        let index = winner_index(randomness, self.player_count)?;
        require!(
            winning_entry.round == self.round && winning_entry.index == index,
            RaffleError::WinnerAccountMismatch
        );
        let winner = winning_entry.owner;
        let prize = self.pooled_balance;
        let next_round = self.round.checked_add(1).ok_or(RaffleError::Overflow)?;

        payout(&winner, prize).map_err(|err| {
            msg!("Payout of {} lamports to {} failed: {}", prize, winner, err);
            error!(RaffleError::PayoutFailed)
        })?;

        self.recent_winner = Some(winner);
        self.round = next_round;
        self.player_count = 0;
        self.pooled_balance = 0;
        self.state = RoundState::Open;
        self.last_timestamp = now;
        self.pending_request_id = None;
        self.requested_at = None;

        Ok(WinnerPicked {
            winner,
            prize,
            winner_index: index,
            request_id,
        })
    }

    /// Resolving -> Open without a payout, once the pending request has gone
    /// unanswered for `request_timeout` seconds. Entries and balance carry
    /// over, so upkeep is due again immediately.
    pub fn recover_stalled_round(&mut self, now: i64, request_timeout: i64) -> Result<ResolutionAbandoned> {
        let (request_id, requested_at) = match (self.state, self.pending_request_id, self.requested_at) {
            (RoundState::Resolving, Some(request_id), Some(requested_at)) => (request_id, requested_at),
            _ => return err!(RaffleError::RoundNotResolving),
        };
        require!(
            now.saturating_sub(requested_at) >= request_timeout,
            RaffleError::RecoveryTooEarly
        );

        self.state = RoundState::Open;
        self.pending_request_id = None;
        self.requested_at = None;

        Ok(ResolutionAbandoned {
            request_id,
            requested_at,
            recovered_at: now,
        })
    }
}
