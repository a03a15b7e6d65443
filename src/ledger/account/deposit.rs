use crate::ledger::{transaction::Kind, Amount, LedgerError};

use super::account::{ensure_positive, Account};

impl Account {
    pub(in crate::ledger) fn apply_deposit(
        &mut self,
        amount: Amount,
        max_transactions: usize,
    ) -> Result<(), LedgerError> {
        ensure_positive(amount)?;
        self.ensure_log_room(1, max_transactions)?;

        self.balance.add(amount)?;
        self.record(Kind::Deposit, amount);

        Ok(())
    }
}
