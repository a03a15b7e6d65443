use super::{ledger::Ledger, transaction::Kind, AccountNumber, Amount, LedgerError};

use tracing::debug;

impl Ledger {
    /// Move `amount` from one account to another. Returns the new balances of
    /// the source and destination accounts.
    ///
    /// Every check runs before either account is touched, so a refused
    /// transfer changes nothing. Each side records its own entry.
    pub fn transfer(
        &mut self,
        from: AccountNumber,
        to: AccountNumber,
        amount: Amount,
    ) -> Result<(Amount, Amount), LedgerError> {
        if from == to {
            return Err(LedgerError::SelfTransfer(from));
        }

        let max_transactions = self.config.max_transactions;
        let source = self
            .accounts
            .get(&from)
            .ok_or(LedgerError::AccountNotFound(from))?;
        let destination = self
            .accounts
            .get(&to)
            .ok_or(LedgerError::AccountNotFound(to))?;

        source.ensure_withdrawable(amount)?;
        source.ensure_log_room(1, max_transactions)?;
        destination.ensure_log_room(1, max_transactions)?;

        let mut source_balance = source.balance.clone();
        source_balance.subtract(amount)?;
        let mut destination_balance = destination.balance.clone();
        destination_balance.add(amount)?;

        let source = self.account_mut(from)?;
        source.balance = source_balance;
        source.record(Kind::TransferOut { to }, amount);
        let source_after = source.balance();

        let destination = self.account_mut(to)?;
        destination.balance = destination_balance;
        destination.record(Kind::TransferIn { from }, amount);
        let destination_after = destination.balance();

        debug!(from, to, %amount, "transfer applied");
        Ok((source_after, destination_after))
    }
}
