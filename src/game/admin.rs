use crate::bank::Identity;
use crate::error::{BankError, LimitError};
use crate::options::Currency;

use super::Table;

impl Table {
    /// Adds owner funds to the bank.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not the owner or the balance would
    /// overflow.
    pub fn deposit(&self, caller: Identity, amount: Currency) -> Result<(), BankError> {
        let mut bank = self.bank.lock();
        bank.deposit(caller, amount)?;
        tracing::info!(amount = %amount, balance = %bank.balance(), "bank deposit");
        Ok(())
    }

    /// Withdraws owner funds from the bank.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not the owner or the amount exceeds
    /// the balance. The balance is unchanged on error.
    pub fn withdraw(&self, caller: Identity, amount: Currency) -> Result<(), BankError> {
        let mut bank = self.bank.lock();
        bank.withdraw(caller, amount)?;
        tracing::info!(amount = %amount, balance = %bank.balance(), "bank withdrawal");
        Ok(())
    }

    /// Replaces the betting limits.
    ///
    /// Games already open keep their wager.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not the owner or the range is not
    /// `0 < min_bet <= max_bet <= MAX_WAGER`.
    pub fn set_betting_limits(
        &self,
        caller: Identity,
        min_bet: Currency,
        max_bet: Currency,
    ) -> Result<(), LimitError> {
        self.bank
            .lock()
            .set_betting_limits(caller, min_bet, max_bet)?;
        tracing::info!(min_bet = %min_bet, max_bet = %max_bet, "betting limits changed");
        Ok(())
    }
}
