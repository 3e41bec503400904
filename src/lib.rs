//! A house-banked blackjack table engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that runs one game per player against
//! an automated dealer, pays winners out of a shared bank, and gates bank and
//! limit administration to a single owner. Every state change is recorded in
//! an append-only [`Event`] log for an outside collaborator to poll.
//!
//! # Example
//!
//! ```
//! use bjhouse::{Identity, Table, TableOptions, UNIT};
//!
//! let owner = Identity::new(1);
//! let table = Table::new(owner, TableOptions::default(), 42).unwrap();
//! table.deposit(owner, 10 * UNIT).unwrap();
//!
//! let player = Identity::new(2);
//! let game_id = table.start_game(player, UNIT / 10).unwrap();
//! assert_eq!(table.active_game_of(player), game_id);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bank;
pub mod card;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;
mod sync;

// Re-export main types
pub use bank::{Bank, Identity};
pub use card::Card;
pub use error::{ActionError, BankError, InvalidRank, LimitError, StartError};
pub use event::{Event, EventRecord, PlayerAction};
pub use game::{GameState, GameView, Table};
pub use hand::{HandValue, evaluate};
pub use options::{Currency, MAX_WAGER, TableOptions, UNIT};
pub use result::{GameResult, Settlement, settle};
pub use shoe::{CardSource, ChaChaShoe, ScriptedShoe};
