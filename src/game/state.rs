//! Game state types.

use alloc::vec::Vec;

use crate::bank::Identity;
use crate::card::Card;
use crate::error::ActionError;
use crate::hand::{HandValue, evaluate};
use crate::options::Currency;
use crate::result::{GameResult, Settlement};

/// Game state.
///
/// States only advance: `PlayerTurn -> DealerTurn -> Settled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer has played; settlement is pending.
    DealerTurn,
    /// Game is over and paid out.
    Settled,
}

/// A single game between one player and the dealer.
#[derive(Debug, Clone)]
pub(crate) struct Game {
    pub(crate) id: u64,
    pub(crate) player: Identity,
    pub(crate) bet: Currency,
    pub(crate) player_cards: Vec<Card>,
    /// Up card first, then the hole card, then any dealer draws.
    pub(crate) dealer_cards: Vec<Card>,
    pub(crate) state: GameState,
    pub(crate) result: GameResult,
    pub(crate) payout: Currency,
}

impl Game {
    pub(crate) const fn new(
        id: u64,
        player: Identity,
        bet: Currency,
        player_cards: Vec<Card>,
        dealer_cards: Vec<Card>,
    ) -> Self {
        Self {
            id,
            player,
            bet,
            player_cards,
            dealer_cards,
            state: GameState::PlayerTurn,
            result: GameResult::None,
            payout: 0,
        }
    }

    /// Evaluates the player's hand.
    #[must_use]
    pub(crate) fn player_value(&self) -> HandValue {
        evaluate(&self.player_cards)
    }

    /// Evaluates the dealer's full hand, hole card included.
    #[must_use]
    pub(crate) fn dealer_value(&self) -> HandValue {
        evaluate(&self.dealer_cards)
    }

    /// Returns the dealer cards the player may see.
    ///
    /// The hole card stays hidden while it is the player's turn.
    #[must_use]
    pub(crate) fn visible_dealer_cards(&self) -> &[Card] {
        if self.state == GameState::PlayerTurn {
            self.dealer_cards
                .first()
                .map_or(&[][..], core::slice::from_ref)
        } else {
            &self.dealer_cards
        }
    }

    /// Checks that `caller` may act on this game now.
    pub(crate) fn ensure_turn(&self, caller: Identity) -> Result<(), ActionError> {
        if caller != self.player {
            return Err(ActionError::NotYourGame);
        }
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    pub(crate) const fn settle(&mut self, settlement: Settlement) {
        self.state = GameState::Settled;
        self.result = settlement.result;
        self.payout = settlement.payout;
    }

    /// Returns the player-facing view of this game.
    #[must_use]
    pub(crate) fn view(&self) -> GameView {
        let dealer_cards = self.visible_dealer_cards().to_vec();
        GameView {
            game_id: self.id,
            player: self.player,
            bet: self.bet,
            player_value: self.player_value().total,
            dealer_value: evaluate(&dealer_cards).total,
            player_cards: self.player_cards.clone(),
            dealer_cards,
            state: self.state,
            result: self.result,
            payout: self.payout,
        }
    }
}

/// A read-only snapshot of a game, as shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameView {
    /// The game id.
    pub game_id: u64,
    /// The player.
    pub player: Identity,
    /// The wager.
    pub bet: Currency,
    /// The player's cards.
    pub player_cards: Vec<Card>,
    /// The dealer's visible cards.
    pub dealer_cards: Vec<Card>,
    /// The state.
    pub state: GameState,
    /// The result.
    pub result: GameResult,
    /// Value of the player's hand.
    pub player_value: u32,
    /// Value of the dealer's visible cards.
    pub dealer_value: u32,
    /// Amount paid to the player, 0 until settled.
    pub payout: Currency,
}
