//! Hand evaluation.

use crate::card::Card;

/// The evaluated value of a sequence of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandValue {
    /// Best total, with aces softened from 11 to 1 only as far as needed.
    pub total: u32,
    /// Two cards totalling 21.
    pub is_blackjack: bool,
    /// Total above 21 after every ace has been softened.
    pub is_bust: bool,
    /// At least one ace is still counted as 11.
    pub is_soft: bool,
}

/// Evaluates a hand.
///
/// Every ace starts at 11. While the total is over 21 and an ace is still
/// counted high, that ace is softened to 1. A blackjack is only recognized on
/// a two-card hand, so 21 reached by hitting never counts as one.
///
/// # Example
///
/// ```
/// use bjhouse::{Card, evaluate};
///
/// let ace = Card::ACE;
/// let king = Card::KING;
/// let value = evaluate(&[ace, king]);
/// assert_eq!(value.total, 21);
/// assert!(value.is_blackjack);
/// ```
#[must_use]
pub fn evaluate(cards: &[Card]) -> HandValue {
    let mut total: u32 = 0;
    let mut aces: u32 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        total = total.saturating_add(card.value());
    }

    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    HandValue {
        total,
        is_blackjack: cards.len() == 2 && total == 21,
        is_bust: total > 21,
        is_soft: aces > 0,
    }
}
