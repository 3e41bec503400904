//! Card sources.
//!
//! The table never removes cards from a physical deck: every draw is an
//! independent, uniformly distributed rank. [`CardSource`] is the seam where
//! the randomness comes in, so an embedder that needs unpredictable or
//! verifiable deals can supply its own implementation.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::InvalidRank;

/// A source of card ranks.
pub trait CardSource {
    /// Draws the next card.
    fn draw(&mut self) -> Card;
}

impl<F> CardSource for F
where
    F: FnMut() -> Card,
{
    fn draw(&mut self) -> Card {
        self()
    }
}

/// An infinite shoe driven by a seeded `ChaCha8` generator.
///
/// Anyone who learns the seed can predict every deal, so this source is only
/// suitable where the operator is trusted.
#[derive(Debug, Clone)]
pub struct ChaChaShoe {
    rng: ChaCha8Rng,
}

impl ChaChaShoe {
    /// Creates a shoe from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl CardSource for ChaChaShoe {
    fn draw(&mut self) -> Card {
        let rank = self.rng.random_range(1..=13u8);
        Card::new(rank).unwrap_or(Card::ACE)
    }
}

/// A shoe that replays a fixed sequence of ranks.
///
/// Once the script runs out, draws continue from a [`ChaChaShoe`] seeded with
/// the fallback seed. Useful for replaying a recorded game and for tests.
#[derive(Debug, Clone)]
pub struct ScriptedShoe {
    script: VecDeque<Card>,
    fallback: ChaChaShoe,
}

impl ScriptedShoe {
    /// Creates a scripted shoe from cards.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            script: cards.into_iter().collect(),
            fallback: ChaChaShoe::new(0),
        }
    }

    /// Creates a scripted shoe from raw ranks.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first rank outside `1..=13`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjhouse::{CardSource, ScriptedShoe};
    ///
    /// let mut shoe = ScriptedShoe::from_ranks(&[1, 13]).unwrap();
    /// assert_eq!(shoe.draw().rank(), 1);
    /// assert_eq!(shoe.draw().rank(), 13);
    /// assert!(ScriptedShoe::from_ranks(&[14]).is_err());
    /// ```
    pub fn from_ranks(ranks: &[u8]) -> Result<Self, InvalidRank> {
        let cards = ranks
            .iter()
            .map(|&rank| Card::try_from(rank))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(cards))
    }

    /// Sets the seed used once the script is exhausted.
    #[must_use]
    pub fn with_fallback_seed(mut self, seed: u64) -> Self {
        self.fallback = ChaChaShoe::new(seed);
        self
    }

    /// Returns the number of scripted cards not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl CardSource for ScriptedShoe {
    fn draw(&mut self) -> Card {
        self.script
            .pop_front()
            .unwrap_or_else(|| self.fallback.draw())
    }
}
