//! Capacity limits of a ledger.

pub const MAX_ACCOUNTS: usize = 100;
pub const MAX_OWNER_LEN: usize = 50;
pub const MAX_TRANSACTIONS: usize = 100;

/// Configuration for a ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Maximum number of accounts open at the same time
    pub max_accounts: usize,
    /// Maximum length of an owner name, in characters
    pub max_owner_len: usize,
    /// Maximum number of entries in one account's transaction log
    pub max_transactions: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            max_accounts: MAX_ACCOUNTS,
            max_owner_len: MAX_OWNER_LEN,
            max_transactions: MAX_TRANSACTIONS,
        }
    }
}

impl LedgerConfig {
    /// Create a new configuration with custom values
    pub fn new(max_accounts: usize, max_owner_len: usize, max_transactions: usize) -> Self {
        Self {
            max_accounts,
            max_owner_len,
            max_transactions,
        }
    }
}

#[test]
fn test_default_config() {
    let config = LedgerConfig::default();

    assert_eq!(100, config.max_accounts);
    assert_eq!(50, config.max_owner_len);
    assert_eq!(100, config.max_transactions);
    assert_eq!(LedgerConfig::new(100, 50, 100), config);
}
