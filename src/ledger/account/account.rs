use crate::ledger::{
    transaction::{Kind, Transaction},
    AccountNumber, Amount, LedgerError,
};

use super::balance::Balance;

/// An open account: who owns it, how much is in it, and what happened to it.
///
/// The transaction log only grows. Once it holds as many entries as the
/// ledger allows, every operation that would record a new entry is refused.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub(in crate::ledger) number: AccountNumber,
    pub(in crate::ledger) owner: String,
    pub(in crate::ledger) balance: Balance,
    pub(in crate::ledger) transactions: Vec<Transaction>,
}

impl Account {
    /// Open an account with an empty history. Opening balances are not
    /// recorded as transactions.
    pub fn new(number: AccountNumber, owner: impl Into<String>, initial_balance: Amount) -> Self {
        Self {
            number,
            owner: owner.into(),
            balance: Balance::new(initial_balance),
            transactions: Vec::new(),
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Get the amount currently held in the account.
    pub fn balance(&self) -> Amount {
        self.balance.amount()
    }

    /// The account's history, oldest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Make sure `entries` more transactions fit in the log.
    pub(in crate::ledger) fn ensure_log_room(
        &self,
        entries: usize,
        max_transactions: usize,
    ) -> Result<(), LedgerError> {
        if self.transactions.len() + entries > max_transactions {
            return Err(LedgerError::TransactionLogFull {
                account: self.number,
                max: max_transactions,
            });
        }

        Ok(())
    }

    pub(in crate::ledger) fn record(&mut self, kind: Kind, amount: Amount) {
        self.transactions
            .push(Transaction::new(self.number, kind, amount));
    }
}

pub(in crate::ledger) fn ensure_positive(amount: Amount) -> Result<(), LedgerError> {
    if amount.is_sign_negative() || amount.is_zero() {
        return Err(LedgerError::InvalidAmount(amount));
    }

    Ok(())
}
