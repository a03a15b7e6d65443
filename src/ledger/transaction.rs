use super::{AccountNumber, Amount};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kind {
    Deposit,    // Money added to the account.
    Withdrawal, // Money taken out of the account.
    TransferOut { to: AccountNumber },
    TransferIn { from: AccountNumber },
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Deposit => write!(f, "Deposit"),
            Kind::Withdrawal => write!(f, "Withdrawal"),
            Kind::TransferOut { to } => write!(f, "Transfer (to {})", to),
            Kind::TransferIn { from } => write!(f, "Transfer (from {})", from),
        }
    }
}

/// One entry of an account's history.
///
/// A transfer is recorded twice, once in each account's log, each entry
/// carrying its own account number.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub(super) account_number: AccountNumber,
    pub(super) kind: Kind,
    pub(super) amount: Amount,
}

impl Transaction {
    pub fn new(account_number: AccountNumber, kind: Kind, amount: Amount) -> Self {
        Self {
            account_number,
            kind,
            amount,
        }
    }

    pub fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}

#[test]
fn test_kind_display() {
    for (kind, want) in vec![
        (Kind::Deposit, "Deposit"),
        (Kind::Withdrawal, "Withdrawal"),
        (Kind::TransferOut { to: 1002 }, "Transfer (to 1002)"),
        (Kind::TransferIn { from: 1001 }, "Transfer (from 1001)"),
    ] {
        assert_eq!(want, kind.to_string());
    }
}
