//! Card ranks.
//!
//! The table deals from an infinite shoe, so suits carry no meaning and a
//! card is just its rank.

use crate::error::InvalidRank;

/// A playing card rank (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Card(u8);

impl Card {
    /// The ace.
    pub const ACE: Self = Self(1);
    /// The king.
    pub const KING: Self = Self(13);

    /// Creates a card from a rank in `1..=13`.
    ///
    /// Returns `None` for any other rank.
    #[must_use]
    pub const fn new(rank: u8) -> Option<Self> {
        match rank {
            1..=13 => Some(Self(rank)),
            _ => None,
        }
    }

    /// Returns the rank.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0
    }

    /// Returns whether this card is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.0 == 1
    }

    /// Returns the hard value of the card, counting an ace as 11.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self.0 {
            1 => 11,
            11..=13 => 10,
            rank => rank as u32,
        }
    }
}

impl TryFrom<u8> for Card {
    type Error = InvalidRank;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        Self::new(rank).ok_or(InvalidRank(rank))
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl core::fmt::Display for Card {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.0 {
            1 => f.write_str("A"),
            11 => f.write_str("J"),
            12 => f.write_str("Q"),
            13 => f.write_str("K"),
            rank => write!(f, "{rank}"),
        }
    }
}
