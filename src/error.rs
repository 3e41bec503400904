//! Error types for table operations.

use thiserror::Error;

/// Errors that can occur when starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// Bet is outside the table's betting limits.
    #[error("invalid bet amount")]
    InvalidBet,
    /// Player already has a game in progress.
    #[error("player already has an active game")]
    AlreadyActiveGame,
    /// Crediting the wager would overflow the bank balance.
    #[error("bank balance overflow")]
    BalanceOverflow,
}

/// Errors that can occur during player actions and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Caller does not own this game, or no such game exists.
    #[error("not your game")]
    NotYourGame,
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Bank cannot cover the payout.
    #[error("insufficient bank balance for payout")]
    InsufficientBank,
}

/// Errors that can occur during bank operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BankError {
    /// Caller is not the table owner.
    #[error("only the owner can call this function")]
    Unauthorized,
    /// Amount exceeds the bank balance.
    #[error("insufficient bank balance")]
    InsufficientBank,
    /// Amount would overflow the bank balance.
    #[error("bank balance overflow")]
    BalanceOverflow,
}

/// Errors that can occur when changing betting limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LimitError {
    /// Caller is not the table owner.
    #[error("only the owner can call this function")]
    Unauthorized,
    /// Limits are not ordered as `0 < min <= max <= MAX_WAGER`.
    #[error("invalid betting range")]
    InvalidRange,
}

/// A card rank outside `1..=13`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid card rank {0}")]
pub struct InvalidRank(pub u8);
