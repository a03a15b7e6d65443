use crate::ledger::{Account, AccountNumber, Amount};

use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct AccountRecord<'a> {
    #[serde(rename = "account")]
    number: AccountNumber,

    owner: &'a str,

    balance: Amount,

    #[serde(rename = "transactions")]
    transaction_count: usize,
}

impl<'a> AccountRecord<'a> {
    fn new(acc: &'a Account) -> Self {
        Self {
            number: acc.number(),
            owner: acc.owner(),
            balance: acc.balance(),
            transaction_count: acc.transactions().len(),
        }
    }
}

/// Writes the given accounts to the given stream, as CSV.
pub fn export<'a>(
    output_stream: impl Write,
    accounts: impl IntoIterator<Item = &'a Account>,
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(output_stream);

    for account in accounts {
        writer.serialize(AccountRecord::new(account))?;
    }

    writer.flush()?;
    Ok(())
}

pub fn write_transactions(mut output_stream: impl Write, acc: &Account) -> io::Result<()> {
    writeln!(
        output_stream,
        "Transaction history for account {} ({}):",
        acc.number(),
        acc.owner()
    )?;
    for tx in acc.transactions() {
        writeln!(output_stream, "Type: {}, Amount: {:.2}", tx.kind(), tx.amount())?;
    }

    Ok(())
}

pub fn write_account_details(mut output_stream: impl Write, acc: &Account) -> io::Result<()> {
    writeln!(output_stream, "Account Number: {}", acc.number())?;
    writeln!(output_stream, "Owner: {}", acc.owner())?;
    writeln!(output_stream, "Balance: {:.2}", acc.balance())?;
    write_transactions(output_stream, acc)
}

pub fn write_all_accounts<'a>(
    mut output_stream: impl Write,
    accounts: impl IntoIterator<Item = &'a Account>,
) -> io::Result<()> {
    writeln!(output_stream, "List of all accounts:")?;
    for acc in accounts {
        writeln!(
            output_stream,
            "Account Number: {}, Owner: {}, Balance: {:.2}",
            acc.number(),
            acc.owner(),
            acc.balance()
        )?;
    }

    Ok(())
}

pub fn write_owner_search<'a>(
    mut output_stream: impl Write,
    owner: &str,
    accounts: impl IntoIterator<Item = &'a Account>,
) -> io::Result<()> {
    writeln!(output_stream, "Accounts owned by {}:", owner)?;
    for acc in accounts {
        writeln!(
            output_stream,
            "Account Number: {}, Balance: {:.2}",
            acc.number(),
            acc.balance()
        )?;
    }

    Ok(())
}
