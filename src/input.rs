use crate::ledger::{AccountNumber, Amount};

use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, PartialEq)]
pub enum Error {
    Csv(String),    // CSV is malformed
    Format(String), // Data format is incorrect
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<<CommandRecord as TryInto<Command>>::Error> for Error {
    fn from(err: <CommandRecord as TryInto<Command>>::Error) -> Self {
        Self::Format(err.to_string())
    }
}

/// One operation to run against the ledger, with its arguments already
/// checked for presence.
#[derive(Debug, PartialEq)]
pub enum Command {
    Create {
        account: AccountNumber,
        owner: String,
        initial_balance: Amount,
    },
    Deposit {
        account: AccountNumber,
        amount: Amount,
    },
    Withdraw {
        account: AccountNumber,
        amount: Amount,
    },
    Transfer {
        from: AccountNumber,
        to: AccountNumber,
        amount: Amount,
    },
    Interest {
        rate: Amount,
    },
    Delete {
        account: AccountNumber,
    },
    Show {
        account: AccountNumber,
    },
    History {
        account: AccountNumber,
    },
    List,
    Search {
        owner: String,
    },
    Export,
}

// A bad line only skips that line: the caller gets an Err for it and the
// commands after it keep coming.
pub fn parse(input_stream: impl std::io::Read) -> impl Iterator<Item = Result<Command, Error>> {
    let buffered = std::io::BufReader::new(input_stream);
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(buffered);

    reader.into_deserialize::<CommandRecord>().map(convert)
}

// Convert from a csv deserialise result into a command result.
fn convert(record: Result<CommandRecord, csv::Error>) -> Result<Command, Error> {
    Ok(record?.try_into()?)
}

// I have a CommandRecord type because I can't directly deserialise into my "domain" type, i.e. Command.
// See https://github.com/BurntSushi/rust-csv/issues/211.
//
// Every column is optional on the wire; which ones are required depends on
// the command, and that is checked when converting into a Command.
#[derive(Debug, Deserialize)]
pub struct CommandRecord {
    command: CommandRecordType,
    account: Option<AccountNumber>,
    owner: Option<String>,
    to: Option<AccountNumber>,
    amount: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandRecordType {
    Create,
    Deposit,
    Withdraw,
    Transfer,
    Interest,
    Delete,
    Show,
    History,
    List,
    Search,
    Export,
}

impl TryFrom<CommandRecord> for Command {
    type Error = &'static str;
    fn try_from(record: CommandRecord) -> Result<Self, Self::Error> {
        let account = record.account;
        let amount = record.amount;

        let command = match record.command {
            CommandRecordType::Create => Command::Create {
                account: account.ok_or("missing account for create")?,
                owner: record.owner.ok_or("missing owner for create")?,
                // No amount means the account opens empty.
                initial_balance: amount.unwrap_or_default(),
            },
            CommandRecordType::Deposit => Command::Deposit {
                account: account.ok_or("missing account for deposit")?,
                amount: amount.ok_or("missing amount for deposit")?,
            },
            CommandRecordType::Withdraw => Command::Withdraw {
                account: account.ok_or("missing account for withdraw")?,
                amount: amount.ok_or("missing amount for withdraw")?,
            },
            CommandRecordType::Transfer => Command::Transfer {
                from: account.ok_or("missing account for transfer")?,
                to: record.to.ok_or("missing destination for transfer")?,
                amount: amount.ok_or("missing amount for transfer")?,
            },
            CommandRecordType::Interest => Command::Interest {
                rate: amount.ok_or("missing rate for interest")?,
            },
            CommandRecordType::Delete => Command::Delete {
                account: account.ok_or("missing account for delete")?,
            },
            CommandRecordType::Show => Command::Show {
                account: account.ok_or("missing account for show")?,
            },
            CommandRecordType::History => Command::History {
                account: account.ok_or("missing account for history")?,
            },
            CommandRecordType::List => Command::List,
            CommandRecordType::Search => Command::Search {
                owner: record.owner.ok_or("missing owner for search")?,
            },
            CommandRecordType::Export => Command::Export,
        };

        Ok(command)
    }
}
