use crate::ledger::{transaction::Kind, Amount, LedgerError};

use super::account::{ensure_positive, Account};

impl Account {
    pub(in crate::ledger) fn apply_withdrawal(
        &mut self,
        amount: Amount,
        max_transactions: usize,
    ) -> Result<(), LedgerError> {
        self.ensure_withdrawable(amount)?;
        self.ensure_log_room(1, max_transactions)?;

        self.balance.subtract(amount)?;
        self.record(Kind::Withdrawal, amount);

        Ok(())
    }

    /// Money can only leave an account in strictly positive amounts, and
    /// never more than what the account holds.
    pub(in crate::ledger) fn ensure_withdrawable(&self, amount: Amount) -> Result<(), LedgerError> {
        ensure_positive(amount)?;

        if amount > self.balance() {
            return Err(LedgerError::InsufficientFunds {
                account: self.number,
                available: self.balance(),
                requested: amount,
            });
        }

        Ok(())
    }
}
