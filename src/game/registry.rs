//! Active game registry.

use crate::bank::Identity;
use crate::sync::HashMap;

/// Maps each player to their one unsettled game.
///
/// A game id of `0` means the player has no active game.
#[derive(Debug, Default)]
pub(crate) struct GameRegistry {
    active: HashMap<Identity, u64>,
}

impl GameRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the player's active game id, or `0`.
    #[must_use]
    pub(crate) fn active_game_of(&self, player: Identity) -> u64 {
        self.active.get(&player).copied().unwrap_or(0)
    }

    /// Records `game_id` as the player's active game.
    pub(crate) fn register(&mut self, player: Identity, game_id: u64) {
        self.active.insert(player, game_id);
    }

    /// Forgets the player's active game.
    pub(crate) fn clear(&mut self, player: Identity) {
        self.active.remove(&player);
    }

    /// Returns the number of players with an active game.
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.active.len()
    }
}
