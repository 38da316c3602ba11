use anchor_lang::error_code;

#[error_code]
pub enum RaffleError {
    Overflow,
    #[msg("Deposit is below the entrance fee")]
    InsufficientDeposit,
    #[msg("Raffle is not accepting entries")]
    RoundNotOpen,
    #[msg("Upkeep is not needed")]
    UpkeepNotNeeded,
    #[msg("Randomness response does not match the pending request")]
    UnknownRequest,
    #[msg("Player index is out of range")]
    IndexOutOfRange,
    #[msg("Prize transfer to the winner failed")]
    PayoutFailed,
    #[msg("Raffle has no players")]
    NoPlayers,
    #[msg("Treasury transfer failed")]
    TransferFailed,
    #[msg("Invalid SlotHashes account provided")]
    InvalidSlotHashesAccount,
    #[msg("Entrance fee must be greater than zero")]
    EntranceFeeTooLow,
    #[msg("Interval must be greater than zero")]
    IntervalTooShort,
    #[msg("Request timeout is below the allowed minimum")]
    RequestTimeoutTooShort,
    #[msg("Callback compute limit is out of range")]
    CallbackLimitOutOfRange,
    #[msg("Raffle is not waiting for randomness")]
    RoundNotResolving,
    #[msg("Randomness request has not timed out yet")]
    RecoveryTooEarly,
    #[msg("Only the management authority can recover a stalled round")]
    NotManagementAuthority,
    #[msg("Winner account does not match the selected player")]
    WinnerAccountMismatch,
    #[msg("Only the coordinator authority can deliver randomness")]
    NotCoordinatorAuthority,
}
