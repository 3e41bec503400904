use alloc::vec;

use crate::bank::Identity;
use crate::card::Card;
use crate::error::ActionError;
use crate::event::{Event, PlayerAction};
use crate::result::Settlement;

use super::Table;

impl Table {
    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the game at once as a dealer win with nothing paid. Any
    /// other total, 21 included, leaves the turn with the player.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller does not own the game (or it does not
    /// exist) or the game is not in the player's turn.
    pub fn hit(&self, game_id: u64, caller: Identity) -> Result<Card, ActionError> {
        let handle = self.game(game_id).ok_or(ActionError::NotYourGame)?;
        let mut game = handle.lock();
        game.ensure_turn(caller)?;

        let card = self.draw();
        game.player_cards.push(card);

        let mut events = vec![
            Event::PlayerAction {
                game_id,
                player: caller,
                action: PlayerAction::Hit,
            },
            Event::CardDealt {
                game_id,
                player: caller,
                card,
                is_dealer: false,
            },
        ];

        let value = game.player_value();
        tracing::debug!(game_id, card = %card, total = value.total, "player hit");

        if value.is_bust {
            // A bust pays nothing, so closing cannot fail on the bank.
            self.close(&mut game, &mut events)?;
        } else {
            self.publish(events);
        }
        drop(game);

        Ok(card)
    }

    /// Player action: Stand (end the turn and let the dealer play).
    ///
    /// Reveals the dealer's hole card, plays the dealer's hand, settles the
    /// game and pays the player from the bank.
    ///
    /// If the bank cannot cover the payout, the dealer's hand is kept and the
    /// game stays in [`GameState::DealerTurn`](super::GameState::DealerTurn)
    /// with the player still registered; no payout is made and no
    /// `GameEnded` event is published. Settle it later with
    /// [`Table::settle_pending`].
    ///
    /// # Errors
    ///
    /// Returns an error if the caller does not own the game (or it does not
    /// exist), the game is not in the player's turn, or the bank cannot cover
    /// the payout.
    pub fn stand(&self, game_id: u64, caller: Identity) -> Result<Settlement, ActionError> {
        let handle = self.game(game_id).ok_or(ActionError::NotYourGame)?;
        let mut game = handle.lock();
        game.ensure_turn(caller)?;

        let mut events = vec![Event::PlayerAction {
            game_id,
            player: caller,
            action: PlayerAction::Stand,
        }];
        tracing::debug!(game_id, total = game.player_value().total, "player stood");

        self.run_dealer(&mut game, &mut events);

        let settled = self.close(&mut game, &mut events);
        if settled.is_err() {
            tracing::warn!(
                game_id,
                player = %caller,
                balance = %self.bank_balance(),
                "bank cannot cover payout, settlement deferred"
            );
            self.publish(events);
        }
        drop(game);

        settled
    }
}
