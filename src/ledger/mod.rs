//! Handles accounts and their transaction history through a ledger.
//!
//! Ledger: contains every open account, in the order they were created.
//! Account: an owner, a balance, and a bounded log of the transactions that
//! moved money in or out of it.

pub mod account;
pub mod error;
pub mod interest;
pub mod ledger;
pub mod transaction;
pub mod transfer;

pub use account::{account::Account, balance::Balance};
pub use error::LedgerError;
pub use ledger::Ledger;
pub use transaction::{Kind, Transaction};

// Using named types doesn't provide any compiler help, but it helps a lot with
// readability.
// Consider the following, when creating the accounts HashMap:
// (1) accounts: HashMap<i32, Account>
// (2) accounts: HashMap<AccountNumber, Account>
// Implementation (1) would most likely need comments, and could be confusing.
// Implementation (2) is self-explanatory.
pub type AccountNumber = i32;

// A decimal type rather than f64, so that 0.1 + 0.2 really is 0.3 when
// dealing with money. No rounding policy is imposed on top of it.
pub type Amount = rust_decimal::Decimal;
