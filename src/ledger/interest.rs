use super::{ledger::Ledger, AccountNumber, Amount, Balance, LedgerError};

use rust_decimal_macros::dec;
use tracing::info;

impl Ledger {
    /// Multiply every balance by `1 + rate`.
    ///
    /// Interest is not recorded in any transaction log, and `rate` is not
    /// bounded: a rate below -1 turns positive balances negative. If any
    /// balance would overflow, no account is changed.
    pub fn calculate_interest(&mut self, rate: Amount) -> Result<(), LedgerError> {
        let factor = dec!(1).checked_add(rate).ok_or(LedgerError::Overflow)?;

        let scaled = self
            .accounts
            .iter()
            .map(|(number, account)| Ok((*number, account.balance.scaled(factor)?)))
            .collect::<Result<Vec<(AccountNumber, Balance)>, LedgerError>>()?;

        for (number, balance) in scaled {
            if let Some(account) = self.accounts.get_mut(&number) {
                account.balance = balance;
            }
        }

        info!(%rate, accounts = self.len(), "interest applied");
        Ok(())
    }
}
