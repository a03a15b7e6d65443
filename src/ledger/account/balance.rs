use crate::ledger::{Amount, LedgerError};

/// The money currently held in an account.
///
/// Only the current amount is kept: the account's transaction log is what
/// keeps the history. Every change is overflow-checked and leaves the
/// balance untouched when it fails.
#[derive(Clone, Debug, PartialEq)]
pub struct Balance {
    amount: Amount,
}

impl Balance {
    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn add(&mut self, amount: Amount) -> Result<(), LedgerError> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        Ok(())
    }

    pub fn subtract(&mut self, amount: Amount) -> Result<(), LedgerError> {
        self.amount = self
            .amount
            .checked_sub(amount)
            .ok_or(LedgerError::Overflow)?;

        Ok(())
    }

    /// The balance multiplied by `factor`.
    pub fn scaled(&self, factor: Amount) -> Result<Self, LedgerError> {
        let amount = self
            .amount
            .checked_mul(factor)
            .ok_or(LedgerError::Overflow)?;

        Ok(Self::new(amount))
    }

    pub const fn new(amount: Amount) -> Self {
        Self { amount }
    }
}

#[cfg(test)]
mod tests {
    use crate::ledger::LedgerError;

    use super::Balance;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_add() {
        let mut balance = Balance::new(dec!(10));
        balance.add(dec!(7)).expect("should not overflow");

        assert_eq!(dec!(17), balance.amount());
    }

    #[test]
    fn test_add_overflow() {
        let very_big_number = Decimal::from_str("70000000000000000000000000000").unwrap();
        let mut balance = Balance::new(very_big_number);

        assert_eq!(Err(LedgerError::Overflow), balance.add(very_big_number));
        assert_eq!(very_big_number, balance.amount());
    }

    #[test]
    fn test_subtract() {
        let mut balance = Balance::new(dec!(10));
        balance.subtract(dec!(7)).expect("should not overflow");

        assert_eq!(dec!(3), balance.amount());
    }

    #[test]
    fn test_subtract_overflow() {
        let very_big_number = Decimal::from_str("70000000000000000000000000000").unwrap();
        let mut balance = Balance::new(-very_big_number);

        assert_eq!(
            Err(LedgerError::Overflow),
            balance.subtract(very_big_number)
        );
        assert_eq!(-very_big_number, balance.amount());
    }

    #[test]
    // The result only depends on the current amount, not on how much has
    // moved through the balance before.
    fn test_large_turnover_keeps_small_amounts() {
        let big = Decimal::from_str("1000000000000000000000000000").unwrap();
        let mut balance = Balance::new(dec!(0));

        balance.add(big).unwrap();
        balance.subtract(big).unwrap();
        balance.add(dec!(0.001)).unwrap();

        assert_eq!(dec!(0.001), balance.amount());
    }

    #[test]
    fn test_large_turnover_does_not_overflow() {
        let very_big_number = Decimal::from_str("50000000000000000000000000000").unwrap();
        let mut balance = Balance::new(very_big_number);

        balance.subtract(very_big_number).unwrap();
        balance
            .add(very_big_number)
            .expect("a zero balance can take any representable amount");

        assert_eq!(very_big_number, balance.amount());
    }

    #[test]
    fn test_scaled() {
        for (amount, factor, want) in vec![
            (dec!(100), dec!(1.05), dec!(105)),
            (dec!(100), dec!(1.5), dec!(150)),
            (dec!(100), dec!(0), dec!(0)),
            (dec!(100), dec!(-0.5), dec!(-50)),
            (dec!(-20), dec!(2), dec!(-40)),
        ] {
            let scaled = Balance::new(amount).scaled(factor).unwrap();
            assert_eq!(want, scaled.amount());
        }
    }

    #[test]
    fn test_scaled_overflow() {
        let very_big_number = Decimal::from_str("70000000000000000000000000000").unwrap();
        let balance = Balance::new(very_big_number);

        assert_eq!(Err(LedgerError::Overflow), balance.scaled(dec!(2)));
    }
}
