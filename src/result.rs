//! Game outcomes and payout arithmetic.

use crate::hand::HandValue;
use crate::options::Currency;

/// Result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameResult {
    /// Game not settled yet.
    #[default]
    None,
    /// Player wins (dealer busts or player has the higher total).
    PlayerWin,
    /// Dealer wins (player busts or dealer has the higher total).
    DealerWin,
    /// Push (tie); the bet is refunded.
    Push,
    /// Player has blackjack against a dealer without one.
    Blackjack,
}

/// Outcome of settling a game: the result and the amount paid to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settlement {
    /// The result.
    pub result: GameResult,
    /// Amount paid back to the player, wager included.
    pub payout: Currency,
}

/// Settles a game from the final player and dealer hands.
///
/// Rules are checked in order:
/// 1. Player bust: dealer wins, nothing paid.
/// 2. Dealer bust: player wins, `2 x bet`.
/// 3. Player blackjack against a dealer without one: `floor(2.5 x bet)`.
/// 4. Higher player total: player wins, `2 x bet`.
/// 5. Equal totals: push, `bet` refunded.
/// 6. Otherwise the dealer wins, nothing paid.
///
/// # Example
///
/// ```
/// use bjhouse::{Card, GameResult, evaluate, settle};
///
/// let player = evaluate(&[Card::ACE, Card::KING]);
/// let dealer = evaluate(&[Card::KING, Card::KING]);
/// let settlement = settle(3, player, dealer);
/// assert_eq!(settlement.result, GameResult::Blackjack);
/// assert_eq!(settlement.payout, 7);
/// ```
#[must_use]
pub const fn settle(bet: Currency, player: HandValue, dealer: HandValue) -> Settlement {
    let (result, payout) = if player.is_bust {
        (GameResult::DealerWin, 0)
    } else if dealer.is_bust {
        (GameResult::PlayerWin, double(bet))
    } else if player.is_blackjack && !dealer.is_blackjack {
        (GameResult::Blackjack, double(bet).saturating_add(bet / 2))
    } else if player.total > dealer.total {
        (GameResult::PlayerWin, double(bet))
    } else if player.total == dealer.total {
        (GameResult::Push, bet)
    } else {
        (GameResult::DealerWin, 0)
    };

    Settlement { result, payout }
}

const fn double(bet: Currency) -> Currency {
    bet.saturating_mul(2)
}
