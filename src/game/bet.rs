use core::sync::atomic::Ordering;

use alloc::sync::Arc;
use alloc::vec;

use crate::bank::Identity;
use crate::error::StartError;
use crate::event::Event;
use crate::options::Currency;
use crate::sync::Mutex;

use super::{Game, Table};

impl Table {
    /// Opens a game for `player` with the given wager.
    ///
    /// The wager is credited to the bank, then the player receives two cards
    /// and the dealer an up card and a hidden hole card. Returns the new game
    /// id; ids start at 1 and are never reused.
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is outside the betting limits, the player
    /// already has an active game, or the wager would overflow the bank
    /// balance. Nothing changes on error.
    pub fn start_game(&self, player: Identity, bet: Currency) -> Result<u64, StartError> {
        let mut registry = self.registry.lock();
        let mut bank = self.bank.lock();

        if !bank.accepts(bet) {
            return Err(StartError::InvalidBet);
        }
        if registry.active_game_of(player) != 0 {
            return Err(StartError::AlreadyActiveGame);
        }

        bank.credit(bet).map_err(|_| StartError::BalanceOverflow)?;

        let game_id = self.next_id.fetch_add(1, Ordering::SeqCst);

        let mut source = self.source.lock();
        let player_cards = vec![source.draw(), source.draw()];
        let dealer_cards = vec![source.draw(), source.draw()];
        drop(source);

        let up_card = dealer_cards[0];
        let mut events = vec![Event::GameStarted {
            game_id,
            player,
            bet,
        }];
        for &card in &player_cards {
            events.push(Event::CardDealt {
                game_id,
                player,
                card,
                is_dealer: false,
            });
        }
        events.push(Event::CardDealt {
            game_id,
            player,
            card: up_card,
            is_dealer: true,
        });

        tracing::info!(
            game_id,
            player = %player,
            bet = %bet,
            first = %player_cards[0],
            second = %player_cards[1],
            dealer = %up_card,
            "game started"
        );

        let game = Game::new(game_id, player, bet, player_cards, dealer_cards);
        self.games
            .write()
            .insert(game_id, Arc::new(Mutex::new(game)));
        registry.register(player, game_id);

        self.publish(events);
        drop(bank);
        drop(registry);

        Ok(game_id)
    }
}
