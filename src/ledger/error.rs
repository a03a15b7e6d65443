use super::{AccountNumber, Amount};
use thiserror::Error;

/// Every way a ledger operation can be refused.
///
/// A refused operation never leaves the ledger half-updated: the checks run
/// before any balance or transaction log is touched.
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    /// The ledger already holds as many accounts as it is configured for.
    #[error("maximum number of accounts reached ({max})")]
    CapacityExceeded { max: usize },

    #[error("account {0} not found")]
    AccountNotFound(AccountNumber),

    /// An account with the same number is already open.
    #[error("account {0} already exists")]
    DuplicateAccount(AccountNumber),

    /// Deposits, withdrawals and transfers only accept strictly positive amounts.
    #[error("invalid amount: {0}")]
    InvalidAmount(Amount),

    #[error("insufficient funds in account {account}: {available} available, {requested} requested")]
    InsufficientFunds {
        account: AccountNumber,
        available: Amount,
        requested: Amount,
    },

    /// Recording the operation would push an account's history past its bound.
    #[error("transaction log of account {account} is full ({max} entries)")]
    TransactionLogFull { account: AccountNumber, max: usize },

    #[error("owner name is longer than {max} characters")]
    OwnerTooLong { max: usize },

    #[error("cannot transfer from account {0} to itself")]
    SelfTransfer(AccountNumber),

    /// Adding more money to a balance would overflow.
    #[error("amount overflow")]
    Overflow,
}
