//! Table configuration options.

use crate::error::LimitError;

/// Amount of currency, in base units.
pub type Currency = u128;

/// Base units in one whole coin.
pub const UNIT: Currency = 1_000_000_000_000_000_000;

/// Largest bet a table may accept.
///
/// A blackjack pays `2.5 x bet`, which must stay representable.
pub const MAX_WAGER: Currency = Currency::MAX / 4;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjhouse::{TableOptions, UNIT};
///
/// let options = TableOptions::default()
///     .with_min_bet(UNIT / 100)
///     .with_max_bet(5 * UNIT);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableOptions {
    /// Smallest accepted bet.
    pub min_bet: Currency,
    /// Largest accepted bet.
    pub max_bet: Currency,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            min_bet: UNIT / 1000,
            max_bet: UNIT,
        }
    }
}

impl TableOptions {
    /// Sets the minimum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjhouse::{TableOptions, UNIT};
    ///
    /// let options = TableOptions::default().with_min_bet(UNIT / 10);
    /// assert_eq!(options.min_bet, UNIT / 10);
    /// ```
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: Currency) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the maximum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjhouse::{TableOptions, UNIT};
    ///
    /// let options = TableOptions::default().with_max_bet(3 * UNIT);
    /// assert_eq!(options.max_bet, 3 * UNIT);
    /// ```
    #[must_use]
    pub const fn with_max_bet(mut self, max_bet: Currency) -> Self {
        self.max_bet = max_bet;
        self
    }

    /// Checks that `0 < min_bet <= max_bet <= MAX_WAGER`.
    ///
    /// # Errors
    ///
    /// Returns [`LimitError::InvalidRange`] if the limits are out of order.
    pub const fn validate(&self) -> Result<(), LimitError> {
        if self.min_bet == 0 || self.min_bet > self.max_bet || self.max_bet > MAX_WAGER {
            return Err(LimitError::InvalidRange);
        }
        Ok(())
    }

    /// Returns whether `bet` lies within the limits.
    #[must_use]
    pub const fn accepts(&self, bet: Currency) -> bool {
        self.min_bet <= bet && bet <= self.max_bet
    }
}
