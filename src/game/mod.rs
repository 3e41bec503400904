//! Table engine and game state management.

use core::sync::atomic::{AtomicU64, Ordering};

use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::sync::{HashMap, Mutex, RwLock};

use crate::bank::{Bank, Identity};
use crate::card::Card;
use crate::error::LimitError;
use crate::event::{Event, EventLog, EventRecord};
use crate::options::{Currency, TableOptions};
use crate::shoe::{CardSource, ChaChaShoe};

mod actions;
mod admin;
mod bet;
pub mod dealer;
mod registry;
pub mod state;

use registry::GameRegistry;
use state::Game;
pub use state::{GameState, GameView};

/// A blackjack table that runs one game per player against the dealer.
///
/// The table owns the house [`Bank`], the registry of active games, every
/// game record ever opened, the card source, and the event log. All methods
/// take `&self`; games of different players lock independently, while every
/// operation that touches the bank balance serializes on the bank lock.
///
/// Locks are always taken in the order game, registry, bank, event log.
pub struct Table {
    /// House bank and betting limits.
    bank: Mutex<Bank>,
    /// Player -> active game id.
    registry: Mutex<GameRegistry>,
    /// Every game opened at this table, settled ones included.
    games: RwLock<HashMap<u64, Arc<Mutex<Game>>>>,
    /// Next game id to assign.
    next_id: AtomicU64,
    /// Card source.
    source: Mutex<Box<dyn CardSource + Send>>,
    /// Notifications for the outside collaborator.
    events: Mutex<EventLog>,
}

impl Table {
    /// Creates a table dealing from a seeded [`ChaChaShoe`].
    ///
    /// The bank starts empty; the owner funds it with [`Table::deposit`].
    ///
    /// # Errors
    ///
    /// Returns [`LimitError::InvalidRange`] if the betting limits in
    /// `options` are invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use bjhouse::{Identity, Table, TableOptions};
    ///
    /// let table = Table::new(Identity::new(1), TableOptions::default(), 42).unwrap();
    /// assert_eq!(table.bank_balance(), 0);
    /// ```
    pub fn new(owner: Identity, options: TableOptions, seed: u64) -> Result<Self, LimitError> {
        Self::with_source(owner, options, ChaChaShoe::new(seed))
    }

    /// Creates a table dealing from the given card source.
    ///
    /// # Errors
    ///
    /// Returns [`LimitError::InvalidRange`] if the betting limits in
    /// `options` are invalid.
    pub fn with_source<S>(
        owner: Identity,
        options: TableOptions,
        source: S,
    ) -> Result<Self, LimitError>
    where
        S: CardSource + Send + 'static,
    {
        let bank = Bank::new(owner, &options)?;

        Ok(Self {
            bank: Mutex::new(bank),
            registry: Mutex::new(GameRegistry::new()),
            games: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
            source: Mutex::new(Box::new(source)),
            events: Mutex::new(EventLog::default()),
        })
    }

    /// Draws a card from the source.
    fn draw(&self) -> Card {
        self.source.lock().draw()
    }

    /// Returns a handle to a game record.
    fn game(&self, game_id: u64) -> Option<Arc<Mutex<Game>>> {
        self.games.read().get(&game_id).cloned()
    }

    /// Appends the events of a committed operation.
    fn publish(&self, events: Vec<Event>) {
        self.events.lock().extend(events);
    }

    /// Returns the player-facing view of a game.
    ///
    /// Returns `None` if no game with this id was ever opened. While it is the
    /// player's turn, only the dealer's up card is shown.
    pub fn game_state(&self, game_id: u64) -> Option<GameView> {
        let game = self.game(game_id)?;
        let view = game.lock().view();
        Some(view)
    }

    /// Returns the player's active game id, or `0` if there is none.
    pub fn active_game_of(&self, player: Identity) -> u64 {
        self.registry.lock().active_game_of(player)
    }

    /// Returns the number of unsettled games.
    pub fn active_games(&self) -> usize {
        self.registry.lock().len()
    }

    /// Returns the number of games opened so far.
    pub fn games_played(&self) -> u64 {
        self.next_id.load(Ordering::SeqCst) - 1
    }

    /// Returns the bank balance.
    pub fn bank_balance(&self) -> Currency {
        self.bank.lock().balance()
    }

    /// Returns the minimum bet.
    pub fn min_bet(&self) -> Currency {
        self.bank.lock().min_bet()
    }

    /// Returns the maximum bet.
    pub fn max_bet(&self) -> Currency {
        self.bank.lock().max_bet()
    }

    /// Returns the table owner.
    pub fn owner(&self) -> Identity {
        self.bank.lock().owner()
    }

    /// Returns the total the bank has paid out to `player`.
    pub fn credited(&self, player: Identity) -> Currency {
        self.bank.lock().credited(player)
    }

    /// Returns every retained event with a sequence number above `seq`.
    ///
    /// Pass `0` to read from the start, then the last `seq` seen to poll.
    pub fn events_since(&self, seq: u64) -> Vec<EventRecord> {
        self.events.lock().since(seq)
    }

    /// Removes and returns every retained event.
    ///
    /// Sequence numbers keep increasing across calls.
    pub fn take_events(&self) -> Vec<EventRecord> {
        self.events.lock().take()
    }
}
