//! Dealer play and settlement.

use alloc::vec::Vec;

use crate::bank::Identity;
use crate::card::Card;
use crate::error::ActionError;
use crate::event::Event;
use crate::hand::evaluate;
use crate::result::{Settlement, settle};

use super::{Game, GameState, Table};

/// Total at which the dealer stops drawing.
pub const DEALER_STANDS_ON: u32 = 17;

/// Plays out the dealer's hand.
///
/// Draws while the hand totals less than 17 and returns the cards drawn.
/// Soft 17 stands. Deterministic for a given draw sequence.
///
/// # Example
///
/// ```
/// use bjhouse::Card;
/// use bjhouse::game::dealer::play;
///
/// let mut cards = vec![Card::new(10).unwrap(), Card::new(3).unwrap()];
/// let mut draws = [Card::new(2).unwrap(), Card::new(9).unwrap()].into_iter();
/// let drawn = play(&mut cards, || draws.next().unwrap());
/// assert_eq!(drawn.len(), 2);
/// assert_eq!(cards.len(), 4);
/// ```
pub fn play(cards: &mut Vec<Card>, mut draw: impl FnMut() -> Card) -> Vec<Card> {
    let mut drawn = Vec::new();

    loop {
        let value = evaluate(cards);
        if value.is_bust || value.total >= DEALER_STANDS_ON {
            break;
        }

        let card = draw();
        cards.push(card);
        drawn.push(card);
    }

    drawn
}

impl Table {
    /// Reveals the hole card and plays the dealer's hand to completion.
    pub(super) fn run_dealer(&self, game: &mut Game, events: &mut Vec<Event>) {
        game.state = GameState::DealerTurn;

        let game_id = game.id;
        let player = game.player;
        let dealt = |card| Event::CardDealt {
            game_id,
            player,
            card,
            is_dealer: true,
        };

        if let Some(&hole) = game.dealer_cards.get(1) {
            events.push(dealt(hole));
        }

        let drawn = play(&mut game.dealer_cards, || self.draw());
        events.extend(drawn.iter().copied().map(dealt));

        tracing::debug!(
            game_id,
            drawn = drawn.len(),
            dealer_total = game.dealer_value().total,
            "dealer played"
        );
    }

    /// Settles a game whose hands are final and pays the player.
    ///
    /// Commits the settlement together with `events`. If the bank cannot cover
    /// the payout, nothing is changed or published and the events are left
    /// with the caller.
    pub(super) fn close(
        &self,
        game: &mut Game,
        events: &mut Vec<Event>,
    ) -> Result<Settlement, ActionError> {
        let settlement = settle(game.bet, game.player_value(), game.dealer_value());

        let mut registry = self.registry.lock();
        let mut bank = self.bank.lock();

        if settlement.payout > 0 {
            bank.payout(game.player, settlement.payout)
                .map_err(|_| ActionError::InsufficientBank)?;
        }

        game.settle(settlement);
        registry.clear(game.player);

        events.push(Event::GameEnded {
            game_id: game.id,
            player: game.player,
            result: settlement.result,
            payout: settlement.payout,
        });
        self.publish(core::mem::take(events));
        drop(bank);
        drop(registry);

        tracing::info!(
            game_id = game.id,
            player = %game.player,
            result = ?settlement.result,
            payout = %settlement.payout,
            "game ended"
        );

        Ok(settlement)
    }

    /// Retries the settlement of a game the bank could not pay at stand time.
    ///
    /// The dealer's hand was fixed when the player stood; it is not redrawn.
    /// Either the game's player or the owner may call this once the bank is
    /// funded.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is neither the player nor the owner, no
    /// such game exists, the game is not waiting for settlement, or the bank
    /// still cannot cover the payout. Nothing changes on error.
    pub fn settle_pending(
        &self,
        game_id: u64,
        caller: Identity,
    ) -> Result<Settlement, ActionError> {
        let owner = self.owner();
        let handle = self.game(game_id).ok_or(ActionError::NotYourGame)?;
        let mut game = handle.lock();

        if caller != game.player && caller != owner {
            return Err(ActionError::NotYourGame);
        }
        if game.state != GameState::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        let mut events = Vec::new();
        self.close(&mut game, &mut events)
    }
}
