//! Table notifications.
//!
//! Every committed state change appends one or more [`Event`]s to the table's
//! log. The log is the only way an outside collaborator observes the table;
//! it polls with [`Table::events_since`](crate::Table::events_since) or
//! drains with [`Table::take_events`](crate::Table::take_events).

use alloc::vec::Vec;

use crate::bank::Identity;
use crate::card::Card;
use crate::options::Currency;
use crate::result::GameResult;

/// A player action on a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PlayerAction {
    /// Draw a card.
    Hit,
    /// End the turn and let the dealer play.
    Stand,
}

impl PlayerAction {
    /// Returns the action name as reported to collaborators.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
        }
    }
}

impl core::fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A table notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// A game was opened.
    GameStarted {
        /// The game.
        game_id: u64,
        /// The player.
        player: Identity,
        /// The wager.
        bet: Currency,
    },
    /// A card became visible.
    CardDealt {
        /// The game.
        game_id: u64,
        /// The player owning the game.
        player: Identity,
        /// The card.
        card: Card,
        /// Whether the card went to the dealer.
        is_dealer: bool,
    },
    /// A game was settled.
    GameEnded {
        /// The game.
        game_id: u64,
        /// The player.
        player: Identity,
        /// The result.
        result: GameResult,
        /// Amount paid to the player.
        payout: Currency,
    },
    /// A player acted on a game.
    PlayerAction {
        /// The game.
        game_id: u64,
        /// The player.
        player: Identity,
        /// The action.
        action: PlayerAction,
    },
}

impl Event {
    /// Returns the game this event belongs to.
    #[must_use]
    pub const fn game_id(&self) -> u64 {
        match *self {
            Self::GameStarted { game_id, .. }
            | Self::CardDealt { game_id, .. }
            | Self::GameEnded { game_id, .. }
            | Self::PlayerAction { game_id, .. } => game_id,
        }
    }
}

/// An event with its position in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventRecord {
    /// Sequence number, starting at 1 and never reused.
    pub seq: u64,
    /// The event.
    pub event: Event,
}

/// Append-only event log.
#[derive(Debug, Default)]
pub(crate) struct EventLog {
    last_seq: u64,
    records: Vec<EventRecord>,
}

impl EventLog {
    /// Appends a batch of events committed by one operation.
    pub(crate) fn extend(&mut self, events: impl IntoIterator<Item = Event>) {
        for event in events {
            self.last_seq += 1;
            self.records.push(EventRecord {
                seq: self.last_seq,
                event,
            });
        }
    }

    /// Returns the retained records with a sequence number above `seq`.
    pub(crate) fn since(&self, seq: u64) -> Vec<EventRecord> {
        let start = self.records.partition_point(|record| record.seq <= seq);
        self.records[start..].to_vec()
    }

    /// Removes and returns every retained record.
    pub(crate) fn take(&mut self) -> Vec<EventRecord> {
        core::mem::take(&mut self.records)
    }
}
