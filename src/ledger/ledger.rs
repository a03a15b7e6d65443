use super::{
    account::account::Account, transaction::Transaction, AccountNumber, Amount, LedgerError,
};
use crate::config::LedgerConfig;

use std::collections::HashMap;
use tracing::{debug, info};

/// A ledger holds every open account.
///
/// Accounts are looked up by number through a map, while `order` remembers
/// the order they were opened in, so listings are stable and deleting an
/// account keeps the others in place.
#[derive(Debug, Default)]
pub struct Ledger {
    pub(super) config: LedgerConfig,
    pub(super) order: Vec<AccountNumber>,
    pub(super) accounts: HashMap<AccountNumber, Account>,
}

impl Ledger {
    /// An empty ledger with the default capacities.
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            config,
            order: Vec::new(),
            accounts: HashMap::new(),
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Open a new account with an empty history.
    ///
    /// Account numbers are unique: opening a second account under a number
    /// that is already in use is refused.
    pub fn create_account(
        &mut self,
        number: AccountNumber,
        owner: impl Into<String>,
        initial_balance: Amount,
    ) -> Result<&Account, LedgerError> {
        if self.accounts.len() >= self.config.max_accounts {
            return Err(LedgerError::CapacityExceeded {
                max: self.config.max_accounts,
            });
        }

        if self.accounts.contains_key(&number) {
            return Err(LedgerError::DuplicateAccount(number));
        }

        let owner = owner.into();
        if owner.chars().count() > self.config.max_owner_len {
            return Err(LedgerError::OwnerTooLong {
                max: self.config.max_owner_len,
            });
        }

        info!(account = number, %owner, %initial_balance, "account created");

        self.order.push(number);
        let account = self
            .accounts
            .entry(number)
            .or_insert_with(|| Account::new(number, owner, initial_balance));

        Ok(account)
    }

    pub fn find_account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.get(&number)
    }

    pub(super) fn account_mut(&mut self, number: AccountNumber) -> Result<&mut Account, LedgerError> {
        self.accounts
            .get_mut(&number)
            .ok_or(LedgerError::AccountNotFound(number))
    }

    /// Add money to an account. Returns the new balance.
    pub fn deposit(&mut self, number: AccountNumber, amount: Amount) -> Result<Amount, LedgerError> {
        let max_transactions = self.config.max_transactions;
        let account = self.account_mut(number)?;
        account.apply_deposit(amount, max_transactions)?;

        debug!(account = number, %amount, balance = %account.balance(), "deposit applied");
        Ok(account.balance())
    }

    /// Take money out of an account. Returns the new balance.
    pub fn withdraw(&mut self, number: AccountNumber, amount: Amount) -> Result<Amount, LedgerError> {
        let max_transactions = self.config.max_transactions;
        let account = self.account_mut(number)?;
        account.apply_withdrawal(amount, max_transactions)?;

        debug!(account = number, %amount, balance = %account.balance(), "withdrawal applied");
        Ok(account.balance())
    }

    /// Close an account. Its history goes with it.
    pub fn delete_account(&mut self, number: AccountNumber) -> Result<Account, LedgerError> {
        let account = self
            .accounts
            .remove(&number)
            .ok_or(LedgerError::AccountNotFound(number))?;
        self.order.retain(|n| *n != number);

        info!(account = number, "account deleted");
        Ok(account)
    }

    /// The history of an account, oldest first.
    pub fn transactions(&self, number: AccountNumber) -> Result<&[Transaction], LedgerError> {
        self.find_account(number)
            .map(Account::transactions)
            .ok_or(LedgerError::AccountNotFound(number))
    }

    /// Every account, in the order they were opened.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> + '_ {
        self.order
            .iter()
            .filter_map(move |number| self.accounts.get(number))
    }

    /// Every account whose owner is exactly `owner` (case-sensitive), in the
    /// order they were opened.
    pub fn search_by_owner(&self, owner: &str) -> Vec<&Account> {
        self.accounts()
            .filter(|account| account.owner() == owner)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::LedgerConfig;
    use crate::ledger::{
        transaction::{Kind, Transaction},
        Ledger, LedgerError,
    };

    use rust_decimal_macros::dec;

    #[test]
    fn test_create_and_find() {
        let mut ledger = Ledger::new();
        ledger
            .create_account(1001, "Alice", dec!(5000))
            .expect("should create an account");

        let acc = ledger.find_account(1001).expect("account should exist");
        assert_eq!(1001, acc.number());
        assert_eq!("Alice", acc.owner());
        assert_eq!(dec!(5000), acc.balance());
        assert!(acc.transactions().is_empty());
        assert_eq!(1, ledger.len());
    }

    #[test]
    fn test_negative_account_number() {
        let mut ledger = Ledger::new();
        ledger.create_account(-1, "Alice", dec!(10)).unwrap();
        ledger.create_account(1, "Bob", dec!(0)).unwrap();

        assert_eq!(Ok((dec!(6), dec!(4))), ledger.transfer(-1, 1, dec!(4)));
        assert_eq!(-1, ledger.find_account(-1).unwrap().number());
    }

    #[test]
    fn test_find_unknown_account() {
        let ledger = Ledger::new();
        assert!(ledger.find_account(42).is_none());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_create_capacity_exceeded() {
        let mut ledger = Ledger::with_config(LedgerConfig::new(2, 50, 100));
        ledger.create_account(1, "A", dec!(1)).unwrap();
        ledger.create_account(2, "B", dec!(2)).unwrap();

        let got = ledger.create_account(3, "C", dec!(3)).map(|_| ());
        assert_eq!(Err(LedgerError::CapacityExceeded { max: 2 }), got);
        assert_eq!(2, ledger.len());
        assert!(ledger.find_account(3).is_none());
    }

    #[test]
    fn test_create_duplicate() {
        let mut ledger = Ledger::new();
        ledger.create_account(1, "Alice", dec!(10)).unwrap();

        let got = ledger.create_account(1, "Mallory", dec!(99)).map(|_| ());
        assert_eq!(Err(LedgerError::DuplicateAccount(1)), got);
        assert_eq!(1, ledger.len());
        assert_eq!("Alice", ledger.find_account(1).unwrap().owner());
        assert_eq!(dec!(10), ledger.find_account(1).unwrap().balance());
    }

    #[test]
    fn test_create_owner_too_long() {
        let mut ledger = Ledger::with_config(LedgerConfig::new(10, 5, 10));

        let got = ledger.create_account(1, "Maximilian", dec!(0)).map(|_| ());
        assert_eq!(Err(LedgerError::OwnerTooLong { max: 5 }), got);
        assert!(ledger.is_empty());

        ledger
            .create_account(1, "Émile", dec!(0))
            .expect("five characters should fit");
    }

    #[test]
    fn test_deposit() {
        let mut ledger = Ledger::new();
        ledger.create_account(1001, "Alice", dec!(5000)).unwrap();

        assert_eq!(Ok(dec!(6000)), ledger.deposit(1001, dec!(1000)));
        assert_eq!(
            Ok(&[Transaction::new(1001, Kind::Deposit, dec!(1000))][..]),
            ledger.transactions(1001)
        );
    }

    #[test]
    fn test_deposit_after_large_turnover() {
        use rust_decimal::Decimal;
        use std::str::FromStr;

        let big = Decimal::from_str("1000000000000000000000000000").unwrap();
        let mut ledger = Ledger::new();
        ledger.create_account(1, "Alice", dec!(0)).unwrap();

        assert_eq!(Ok(big), ledger.deposit(1, big));
        assert_eq!(Ok(dec!(0)), ledger.withdraw(1, big));
        assert_eq!(Ok(dec!(0.001)), ledger.deposit(1, dec!(0.001)));

        let logged: Decimal = ledger.transactions(1).unwrap()[2].amount();
        assert_eq!(dec!(0.001), logged);
        assert_eq!(logged, ledger.find_account(1).unwrap().balance());
    }

    #[test]
    fn test_deposit_into_emptied_account() {
        use rust_decimal::Decimal;
        use std::str::FromStr;

        let very_big_number = Decimal::from_str("50000000000000000000000000000").unwrap();
        let mut ledger = Ledger::new();
        ledger.create_account(1, "Alice", very_big_number).unwrap();

        assert_eq!(Ok(dec!(0)), ledger.withdraw(1, very_big_number));
        assert_eq!(Ok(very_big_number), ledger.deposit(1, very_big_number));
    }

    #[test]
    fn test_deposit_unknown_account() {
        let mut ledger = Ledger::new();
        assert_eq!(
            Err(LedgerError::AccountNotFound(9)),
            ledger.deposit(9, dec!(1))
        );
    }

    #[test]
    fn test_withdraw() {
        let mut ledger = Ledger::new();
        ledger.create_account(1002, "Bob", dec!(3000)).unwrap();

        assert_eq!(Ok(dec!(2500)), ledger.withdraw(1002, dec!(500)));
        assert_eq!(
            Err(LedgerError::InsufficientFunds {
                account: 1002,
                available: dec!(2500),
                requested: dec!(2500.01),
            }),
            ledger.withdraw(1002, dec!(2500.01))
        );
        assert_eq!(
            Err(LedgerError::InvalidAmount(dec!(0))),
            ledger.withdraw(1002, dec!(0))
        );
        assert_eq!(dec!(2500), ledger.find_account(1002).unwrap().balance());
        assert_eq!(1, ledger.transactions(1002).unwrap().len());
    }

    #[test]
    fn test_withdraw_unknown_account() {
        let mut ledger = Ledger::new();
        assert_eq!(
            Err(LedgerError::AccountNotFound(9)),
            ledger.withdraw(9, dec!(1))
        );
    }

    #[test]
    fn test_delete_keeps_order() {
        let mut ledger = Ledger::new();
        for (number, owner) in vec![(1, "A"), (2, "B"), (3, "C"), (4, "D")] {
            ledger.create_account(number, owner, dec!(0)).unwrap();
        }

        let deleted = ledger.delete_account(2).expect("should delete");
        assert_eq!(2, deleted.number());

        let numbers: Vec<_> = ledger.accounts().map(|acc| acc.number()).collect();
        assert_eq!(vec![1, 3, 4], numbers);
        assert!(ledger.find_account(2).is_none());
        assert_eq!(3, ledger.len());
    }

    #[test]
    fn test_delete_discards_history() {
        let mut ledger = Ledger::new();
        ledger.create_account(1, "A", dec!(10)).unwrap();
        ledger.deposit(1, dec!(5)).unwrap();
        ledger.delete_account(1).unwrap();

        assert_eq!(
            Err(LedgerError::AccountNotFound(1)),
            ledger.transactions(1)
        );

        // Reopening the number starts from scratch.
        ledger.create_account(1, "A", dec!(0)).unwrap();
        assert!(ledger.transactions(1).unwrap().is_empty());
    }

    #[test]
    fn test_delete_unknown_account() {
        let mut ledger = Ledger::new();
        ledger.create_account(1, "A", dec!(10)).unwrap();

        let got = ledger.delete_account(2).map(|_| ());
        assert_eq!(Err(LedgerError::AccountNotFound(2)), got);
        assert_eq!(1, ledger.len());
    }

    #[test]
    fn test_search_by_owner() {
        let mut ledger = Ledger::new();
        for (number, owner) in vec![(1, "Alice"), (2, "Bob"), (3, "alice"), (4, "Alice")] {
            ledger.create_account(number, owner, dec!(0)).unwrap();
        }

        let found: Vec<_> = ledger
            .search_by_owner("Alice")
            .iter()
            .map(|acc| acc.number())
            .collect();
        assert_eq!(vec![1, 4], found);
        assert!(ledger.search_by_owner("Carol").is_empty());
    }
}
