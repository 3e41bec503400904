//! House bank and owner access control.

use crate::error::{BankError, LimitError};
use crate::options::{Currency, TableOptions};
use crate::sync::HashMap;

/// An opaque account identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity(u64);

impl Identity {
    /// Creates an identity.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for Identity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

/// The shared house bank.
///
/// Holds the balance every payout is drawn from, the betting limits, and the
/// owner allowed to change either. Wagers are credited on game start; payouts
/// are debited on settlement and credited to the winner's ledger entry.
#[derive(Debug, Clone)]
pub struct Bank {
    balance: Currency,
    limits: TableOptions,
    owner: Identity,
    credits: HashMap<Identity, Currency>,
}

impl Bank {
    /// Creates an empty bank.
    ///
    /// # Errors
    ///
    /// Returns [`LimitError::InvalidRange`] if the option limits are invalid.
    pub fn new(owner: Identity, options: &TableOptions) -> Result<Self, LimitError> {
        options.validate()?;
        Ok(Self {
            balance: 0,
            limits: *options,
            owner,
            credits: HashMap::new(),
        })
    }

    /// Returns the balance.
    #[must_use]
    pub const fn balance(&self) -> Currency {
        self.balance
    }

    /// Returns the minimum bet.
    #[must_use]
    pub const fn min_bet(&self) -> Currency {
        self.limits.min_bet
    }

    /// Returns the maximum bet.
    #[must_use]
    pub const fn max_bet(&self) -> Currency {
        self.limits.max_bet
    }

    /// Returns the owner.
    #[must_use]
    pub const fn owner(&self) -> Identity {
        self.owner
    }

    /// Returns the total paid out to `player`.
    #[must_use]
    pub fn credited(&self, player: Identity) -> Currency {
        self.credits.get(&player).copied().unwrap_or(0)
    }

    /// Returns whether `bet` lies within the betting limits.
    #[must_use]
    pub const fn accepts(&self, bet: Currency) -> bool {
        self.limits.accepts(bet)
    }

    /// Returns whether `caller` is the owner.
    #[must_use]
    pub fn authorize(&self, caller: Identity) -> bool {
        caller == self.owner
    }

    /// Adds owner funds to the balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not the owner or the balance would
    /// overflow.
    pub fn deposit(&mut self, caller: Identity, amount: Currency) -> Result<(), BankError> {
        if !self.authorize(caller) {
            return Err(BankError::Unauthorized);
        }
        self.credit(amount)
    }

    /// Removes owner funds from the balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not the owner or the amount exceeds
    /// the balance.
    pub fn withdraw(&mut self, caller: Identity, amount: Currency) -> Result<(), BankError> {
        if !self.authorize(caller) {
            return Err(BankError::Unauthorized);
        }
        self.debit(amount)
    }

    /// Replaces the betting limits.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not the owner or the range is not
    /// `0 < min <= max <= MAX_WAGER`.
    pub fn set_betting_limits(
        &mut self,
        caller: Identity,
        min_bet: Currency,
        max_bet: Currency,
    ) -> Result<(), LimitError> {
        if !self.authorize(caller) {
            return Err(LimitError::Unauthorized);
        }
        let limits = self.limits.with_min_bet(min_bet).with_max_bet(max_bet);
        limits.validate()?;
        self.limits = limits;
        Ok(())
    }

    /// Pays `amount` out of the balance to `player`.
    ///
    /// The sufficiency check and the debit happen under the same `&mut self`
    /// borrow, so callers holding the bank lock cannot race another debit.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::InsufficientBank`] if the amount exceeds the
    /// balance; nothing changes in that case.
    pub fn payout(&mut self, player: Identity, amount: Currency) -> Result<(), BankError> {
        self.debit(amount)?;
        let credit = self.credits.entry(player).or_insert(0);
        *credit = credit.saturating_add(amount);
        Ok(())
    }

    /// Adds a wager or deposit to the balance.
    pub(crate) fn credit(&mut self, amount: Currency) -> Result<(), BankError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(BankError::BalanceOverflow)?;
        Ok(())
    }

    fn debit(&mut self, amount: Currency) -> Result<(), BankError> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(BankError::InsufficientBank)?;
        Ok(())
    }
}
